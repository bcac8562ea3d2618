//! Static descriptions of the admin resources.
//!
//! Every view the console offers is described by a [`ResourceSpec`] entry in
//! [`CATALOG`]: which endpoint it binds to, which fields its records carry,
//! whether soft-deleted records are hidden, which row actions exist, and the
//! labels the UI shows. All per-resource behavior elsewhere in the codebase
//! is driven by this table; adding a view is adding an entry here.

use crate::record::Record;

/// Input kind of a described field.
///
/// `Text`, `TextArea`, and `File` are form input kinds. `Date` only appears
/// on read-only resources and controls table cell formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    File,
    Date,
}

impl FieldKind {
    pub fn is_file(&self) -> bool {
        matches!(self, FieldKind::File)
    }
}

/// One described field: wire name, display label, kind, required flag.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as the backend knows it (JSON key / multipart part name).
    pub name: &'static str,
    /// Label shown in the form and as the table column header.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Required on submit. File fields are only enforced when creating;
    /// an omitted file on edit means "keep the existing one".
    pub required: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
        }
    }

    const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::TextArea,
            required: true,
        }
    }

    const fn file(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::File,
            required: true,
        }
    }

    const fn display(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Date,
            required: false,
        }
    }
}

/// Which row actions a resource offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
    pub approve: bool,
}

impl RowActions {
    pub const CRUD: Self = Self {
        edit: true,
        delete: true,
        approve: false,
    };

    pub const APPROVE: Self = Self {
        edit: false,
        delete: false,
        approve: true,
    };

    pub const NONE: Self = Self {
        edit: false,
        delete: false,
        approve: false,
    };

    pub fn any(&self) -> bool {
        self.edit || self.delete || self.approve
    }
}

/// Static configuration for one resource view.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Stable internal key (also the log tag for this view).
    pub slug: &'static str,
    /// Page heading.
    pub title: &'static str,
    /// Short label for the tab bar.
    pub tab_label: &'static str,
    /// URL path under `{base}/api/`.
    pub path: &'static str,
    /// Envelope key the server wraps the collection in.
    pub collection_key: &'static str,
    /// Singular noun for submit labels and notices ("Box", "Office Tour").
    pub noun: &'static str,
    pub fields: &'static [FieldSpec],
    /// Hide records whose `isDeleted` flag is set.
    pub soft_delete: bool,
    /// When set, only show records whose approval flag equals this value.
    pub approved_filter: Option<bool>,
    pub actions: RowActions,
    /// Text for the empty-state table row.
    pub empty_text: &'static str,
    /// Label for the open-form affordance (empty when the view has no form).
    pub open_form_label: &'static str,
}

impl ResourceSpec {
    /// Whether create/update requests for this resource are sent as
    /// multipart form data instead of a JSON body.
    pub fn has_file_fields(&self) -> bool {
        self.fields.iter().any(|f| f.kind.is_file())
    }

    /// Whether this view has an add/edit form at all.
    pub fn has_form(&self) -> bool {
        self.actions.edit
    }

    /// Fields that appear as form inputs (everything except display-only
    /// date fields).
    pub fn input_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.kind != FieldKind::Date)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Submit button label: "Add {noun}" or "Update {noun}".
    pub fn submit_label(&self, editing: bool) -> String {
        if editing {
            format!("Update {}", self.noun)
        } else {
            format!("Add {}", self.noun)
        }
    }

    /// Whether a record passes this view's display filters.
    pub fn shows(&self, record: &Record) -> bool {
        if self.soft_delete && record.is_deleted() {
            return false;
        }
        match self.approved_filter {
            Some(want) => record.is_approved() == want,
            None => true,
        }
    }
}

/// Every view the console offers, in tab order.
pub static CATALOG: &[ResourceSpec] = &[
    ResourceSpec {
        slug: "boxes",
        title: "Boxes Management",
        tab_label: "Boxes",
        path: "boxes",
        collection_key: "data",
        noun: "Box",
        fields: &[
            FieldSpec::text("icon", "Icon"),
            FieldSpec::text("link", "Link"),
            FieldSpec::text("text", "Text"),
            FieldSpec::textarea("description", "Description"),
        ],
        soft_delete: true,
        approved_filter: None,
        actions: RowActions::CRUD,
        empty_text: "No boxes found.",
        open_form_label: "Add Data",
    },
    ResourceSpec {
        slug: "office-tours",
        title: "Office Tours",
        tab_label: "Office Tours",
        path: "office-tours",
        collection_key: "data",
        noun: "Office Tour",
        fields: &[
            FieldSpec::text("title", "Title"),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::file("image", "Image"),
        ],
        soft_delete: true,
        approved_filter: None,
        actions: RowActions::CRUD,
        empty_text: "No office tours found.",
        open_form_label: "Add Office Tour",
    },
    ResourceSpec {
        slug: "explore-office",
        title: "Explore Office Management",
        tab_label: "Explore Office",
        path: "explore-office",
        collection_key: "data",
        noun: "Office",
        fields: &[
            FieldSpec::text("name", "Name"),
            FieldSpec::text("address", "Address"),
            FieldSpec::file("image", "Image"),
        ],
        soft_delete: false,
        approved_filter: None,
        actions: RowActions::CRUD,
        empty_text: "No offices found.",
        open_form_label: "Add Office",
    },
    ResourceSpec {
        slug: "work-business",
        title: "Work Business",
        tab_label: "Work Business",
        path: "workbusiness",
        collection_key: "data",
        noun: "Entry",
        fields: &[
            FieldSpec::text("title", "Title"),
            FieldSpec::textarea("description1", "Description 1"),
            FieldSpec::textarea("description2", "Description 2"),
            FieldSpec::file("imageTop", "Image Top"),
            FieldSpec::file("imageBottom", "Image Bottom"),
        ],
        soft_delete: true,
        approved_filter: None,
        actions: RowActions::CRUD,
        empty_text: "No entries found.",
        open_form_label: "Add Entry",
    },
    ResourceSpec {
        slug: "vendor-requests",
        title: "Vendor Requests",
        tab_label: "Vendor Requests",
        path: "officeSpaces",
        collection_key: "data",
        noun: "Office Space",
        fields: OFFICE_SPACE_FIELDS,
        soft_delete: false,
        approved_filter: Some(false),
        actions: RowActions::APPROVE,
        empty_text: "No vendor requests found.",
        open_form_label: "",
    },
    ResourceSpec {
        slug: "office-spaces",
        title: "Office Space List",
        tab_label: "Office Spaces",
        path: "officeSpaces",
        collection_key: "data",
        noun: "Office Space",
        fields: OFFICE_SPACE_FIELDS,
        soft_delete: false,
        approved_filter: Some(true),
        actions: RowActions::APPROVE,
        empty_text: "No vendor requests found.",
        open_form_label: "",
    },
    ResourceSpec {
        slug: "users",
        title: "User List",
        tab_label: "Users",
        path: "auth/signup",
        collection_key: "users",
        noun: "User",
        fields: &[
            FieldSpec::display("name", "Name"),
            FieldSpec::display("email", "Email"),
            FieldSpec::display("phone", "Phone"),
            FieldSpec::display("address", "Address"),
            FieldSpec::date("createdAt", "Created At"),
            FieldSpec::date("updatedAt", "Updated At"),
        ],
        soft_delete: false,
        approved_filter: None,
        actions: RowActions::NONE,
        empty_text: "No users found.",
        open_form_label: "",
    },
];

/// Vendor-submitted office spaces. Shared between the pending-requests view
/// and the approved-list view, which differ only in their approval filter.
static OFFICE_SPACE_FIELDS: &[FieldSpec] = &[
    FieldSpec::display("officeName", "Office Name"),
    FieldSpec::display("category", "Category"),
    FieldSpec::display("city", "City"),
    FieldSpec::display("state", "State"),
    FieldSpec::display("pincode", "Pincode"),
    FieldSpec::display("description", "Description"),
    FieldSpec::display("rate", "Rate"),
];

/// Look up a catalog entry by slug.
pub fn resource_by_slug(slug: &str) -> Option<&'static ResourceSpec> {
    CATALOG.iter().find(|spec| spec.slug == slug)
}
