//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use crate::config::Settings;
use spacedeck_core::{Draft, FieldSpec, Record, ResourceSpec, CATALOG};

/// Current application phase (used for app-level quitting state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Form State
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the add/edit form is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// What a form submit will do: create a new record, or overwrite the record
/// with the carried id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(String),
}

/// The add/edit form for one page: visibility, mode, and typed input travel
/// together so they can only change in lockstep.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub visibility: Visibility,
    pub mode: EditMode,
    pub draft: Draft,
    /// Index of the focused input within the resource's input fields.
    pub focus: usize,
}

impl FormState {
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing(id) => Some(id),
            EditMode::Creating => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Failure,
}

/// Transient status-bar message, expired by the tick handler.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Success,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn failure(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Failure,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of write currently in flight against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Approve,
}

impl MutationKind {
    /// Infinitive for failure notices ("Failed to add ...").
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::Create => "add",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::Approve => "approve",
        }
    }

    /// Past tense for success notices ("... added").
    pub fn past(&self) -> &'static str {
        match self {
            MutationKind::Create => "added",
            MutationKind::Update => "updated",
            MutationKind::Delete => "deleted",
            MutationKind::Approve => "approved",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page State
// ─────────────────────────────────────────────────────────────────────────────

/// State for one resource view (one tab).
#[derive(Debug, Clone)]
pub struct PageState {
    /// Which catalog resource this page shows.
    pub spec: &'static ResourceSpec,

    /// Records as last fetched, unfiltered.
    pub records: Vec<Record>,

    /// A list fetch is in flight.
    pub loading: bool,

    /// Selected row, as an index into [`PageState::visible_records`].
    pub selected: usize,

    /// Add/edit form state.
    pub form: FormState,

    /// A write is in flight; further writes are refused until it completes.
    pub in_flight: Option<MutationKind>,

    /// Record id armed for deletion, awaiting the confirming keypress.
    pub pending_delete: Option<String>,
}

impl PageState {
    pub fn new(spec: &'static ResourceSpec) -> Self {
        Self {
            spec,
            records: Vec::new(),
            loading: false,
            selected: 0,
            form: FormState::default(),
            in_flight: None,
            pending_delete: None,
        }
    }

    /// Records that pass the resource's display filters, in fetch order.
    pub fn visible_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| self.spec.shows(r))
            .collect()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.visible_records().get(self.selected).copied()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Row Selection
    // ─────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        self.select_forward(1);
    }

    pub fn select_prev(&mut self) {
        self.select_back(1);
    }

    /// Move the selection down by up to `n` rows.
    pub fn select_forward(&mut self, n: usize) {
        let count = self.visible_records().len();
        if count > 0 {
            self.selected = (self.selected + n).min(count - 1);
        }
        self.pending_delete = None;
    }

    /// Move the selection up by up to `n` rows.
    pub fn select_back(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.pending_delete = None;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_delete = None;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_records().len().saturating_sub(1);
        self.pending_delete = None;
    }

    /// Keep the selection inside the visible range after records change.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_records().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Form Transitions
    // ─────────────────────────────────────────────────────────

    pub fn input_field_count(&self) -> usize {
        self.spec.input_fields().count()
    }

    /// The field the form cursor is on.
    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.spec.input_fields().nth(self.form.focus)
    }

    /// Open an empty form for creating a record.
    pub fn open_create_form(&mut self) {
        self.form = FormState {
            visibility: Visibility::Visible,
            mode: EditMode::Creating,
            draft: Draft::new(),
            focus: 0,
        };
    }

    /// Open a form pre-filled from an existing record. File fields start
    /// empty; leaving one untouched keeps the stored file.
    pub fn open_edit_form(&mut self, record: &Record) {
        self.form = FormState {
            visibility: Visibility::Visible,
            mode: EditMode::Editing(record.id.clone()),
            draft: Draft::seeded_from(self.spec, record),
            focus: 0,
        };
    }

    /// Close the form, dropping any typed input.
    pub fn close_form(&mut self) {
        self.form = FormState::default();
    }

    pub fn focus_next_field(&mut self) {
        let count = self.input_field_count();
        if count > 0 {
            self.form.focus = (self.form.focus + 1) % count;
        }
    }

    pub fn focus_prev_field(&mut self) {
        let count = self.input_field_count();
        if count > 0 {
            self.form.focus = (self.form.focus + count - 1) % count;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// One page per catalog resource, in tab order.
    pub pages: Vec<PageState>,

    /// Index of the active page.
    pub active: usize,

    /// Current transient status-bar notice, if any.
    pub notice: Option<Notice>,

    /// Application settings from config file
    pub settings: Settings,

    /// Current application phase
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            pages: CATALOG.iter().map(PageState::new).collect(),
            active: 0,
            notice: None,
            settings,
            phase: AppPhase::Running,
        }
    }

    pub fn active_page(&self) -> &PageState {
        &self.pages[self.active]
    }

    pub fn active_page_mut(&mut self) -> &mut PageState {
        &mut self.pages[self.active]
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut PageState> {
        self.pages.get_mut(index)
    }

    // ─────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────

    /// Switch to a page by index. Returns false when out of range.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index < self.pages.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.pages.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.pages.len() - 1) % self.pages.len();
    }

    // ─────────────────────────────────────────────────────────
    // Quit / Notices
    // ─────────────────────────────────────────────────────────

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.settings.ui.notice_ttl_secs)
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text, self.notice_ttl()));
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::success(text, self.notice_ttl()));
    }

    pub fn notify_failure(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::failure(text, self.notice_ttl()));
    }

    /// Drop the notice once its deadline passes. Called on every tick.
    pub fn clear_expired_notice(&mut self) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired()) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn state() -> AppState {
        AppState::new()
    }

    #[test]
    fn test_one_page_per_catalog_entry() {
        let state = state();
        assert_eq!(state.pages.len(), CATALOG.len());
        assert_eq!(state.active_page().spec.slug, "boxes");
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut state = state();
        state.active = state.pages.len() - 1;
        state.next_tab();
        assert_eq!(state.active, 0);
        state.prev_tab();
        assert_eq!(state.active, state.pages.len() - 1);

        assert!(state.select_tab(2));
        assert_eq!(state.active, 2);
        assert!(!state.select_tab(99));
        assert_eq!(state.active, 2);
    }

    #[test]
    fn test_visible_records_hide_soft_deleted() {
        let mut state = state();
        let page = state.active_page_mut();
        page.records = vec![
            record(json!({"_id": "1", "text": "keep"})),
            record(json!({"_id": "2", "text": "gone", "isDeleted": true})),
            record(json!({"_id": "3", "text": "keep too"})),
        ];
        assert_eq!(page.visible_records().len(), 2);
        assert_eq!(page.selected_record().unwrap().id, "1");
    }

    #[test]
    fn test_selection_clamps_to_visible() {
        let mut state = state();
        let page = state.active_page_mut();
        page.records = vec![
            record(json!({"_id": "1", "text": "a"})),
            record(json!({"_id": "2", "text": "b"})),
        ];

        page.select_prev();
        assert_eq!(page.selected, 0);
        page.select_next();
        assert_eq!(page.selected, 1);
        page.select_next();
        assert_eq!(page.selected, 1);

        // Shrinking the list pulls the selection back in range.
        page.records.truncate(1);
        page.clamp_selection();
        assert_eq!(page.selected, 0);

        page.records.clear();
        page.clamp_selection();
        assert_eq!(page.selected, 0);
        assert!(page.selected_record().is_none());
    }

    #[test]
    fn test_selection_jumps_stay_in_range() {
        let mut state = state();
        let page = state.active_page_mut();
        page.records = (0..25)
            .map(|i| record(json!({"_id": i.to_string(), "text": "row"})))
            .collect();

        page.select_forward(10);
        assert_eq!(page.selected, 10);
        page.select_forward(100);
        assert_eq!(page.selected, 24);
        page.select_back(10);
        assert_eq!(page.selected, 14);

        page.select_first();
        assert_eq!(page.selected, 0);
        page.select_last();
        assert_eq!(page.selected, 24);

        page.records.clear();
        page.select_last();
        assert_eq!(page.selected, 0);
        page.select_forward(5);
        assert_eq!(page.selected, 0);
    }

    #[test]
    fn test_moving_selection_disarms_pending_delete() {
        let mut state = state();
        let page = state.active_page_mut();
        page.records = vec![
            record(json!({"_id": "1", "text": "a"})),
            record(json!({"_id": "2", "text": "b"})),
        ];
        page.pending_delete = Some("1".to_string());
        page.select_next();
        assert!(page.pending_delete.is_none());
    }

    #[test]
    fn test_form_transitions() {
        let mut state = state();
        let page = state.active_page_mut();
        assert!(!page.form.is_visible());

        page.open_create_form();
        assert!(page.form.is_visible());
        assert!(!page.form.is_editing());
        assert!(page.form.draft.is_empty());

        let rec = record(json!({"_id": "b1", "icon": "star", "text": "Offices"}));
        page.open_edit_form(&rec);
        assert!(page.form.is_editing());
        assert_eq!(page.form.editing_id(), Some("b1"));
        assert_eq!(page.form.draft.value("icon"), "star");

        page.close_form();
        assert!(!page.form.is_visible());
        assert!(!page.form.is_editing());
        assert!(page.form.draft.is_empty());
    }

    #[test]
    fn test_form_focus_wraps_over_inputs() {
        let mut state = state();
        // boxes has four input fields
        let page = state.active_page_mut();
        assert_eq!(page.input_field_count(), 4);
        assert_eq!(page.focused_field().unwrap().name, "icon");

        page.focus_prev_field();
        assert_eq!(page.form.focus, 3);
        page.focus_next_field();
        assert_eq!(page.form.focus, 0);
    }

    #[test]
    fn test_notice_expiry() {
        let mut state = state();
        state.notice = Some(Notice::success("Box added", Duration::ZERO));
        state.clear_expired_notice();
        assert!(state.notice.is_none());

        state.notify_failure("Failed to add box");
        state.clear_expired_notice();
        assert!(state.notice.is_some());
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Failure);
    }

    #[test]
    fn test_mutation_kind_wording() {
        assert_eq!(MutationKind::Create.verb(), "add");
        assert_eq!(MutationKind::Create.past(), "added");
        assert_eq!(MutationKind::Approve.verb(), "approve");
        assert_eq!(MutationKind::Delete.past(), "deleted");
    }
}
