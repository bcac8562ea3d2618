//! Request body planning.
//!
//! Turning a [`Draft`] into an outgoing body is pure and separately
//! testable; the client only executes the plan. Resources with file fields
//! go out as multipart form data, everything else as a JSON object.

use std::path::PathBuf;

use serde_json::{Map, Value};
use spacedeck_core::record::APPROVED_FLAG;
use spacedeck_core::{Draft, ResourceSpec};

/// One planned part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartPlan {
    Text {
        name: &'static str,
        value: String,
    },
    /// File to read and attach at send time. Only planned when the user
    /// actually entered a path; an untouched file field is omitted so the
    /// backend keeps whatever it has stored.
    File {
        name: &'static str,
        path: PathBuf,
    },
}

/// Plan the multipart parts for a create or update of `spec` from `draft`,
/// in field order.
pub fn plan_parts(spec: &ResourceSpec, draft: &Draft) -> Vec<PartPlan> {
    let mut parts = Vec::new();
    for field in spec.input_fields() {
        if field.kind.is_file() {
            let path = draft.value(field.name);
            if !path.is_empty() {
                parts.push(PartPlan::File {
                    name: field.name,
                    path: PathBuf::from(path),
                });
            }
        } else {
            parts.push(PartPlan::Text {
                name: field.name,
                value: draft.value(field.name).to_string(),
            });
        }
    }
    parts
}

/// JSON body for a create or update of a resource without file fields.
pub fn json_body(spec: &ResourceSpec, draft: &Draft) -> Value {
    let mut body = Map::new();
    for field in spec.input_fields() {
        if !field.kind.is_file() {
            body.insert(
                field.name.to_string(),
                Value::String(draft.value(field.name).to_string()),
            );
        }
    }
    Value::Object(body)
}

/// Body for the approval PUT: just the flag flip.
pub fn approval_body() -> Value {
    let mut body = Map::new();
    body.insert(APPROVED_FLAG.to_string(), Value::Bool(true));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spacedeck_core::resource_by_slug;

    #[test]
    fn test_json_body_covers_all_text_fields() {
        let spec = resource_by_slug("boxes").unwrap();
        let mut draft = Draft::new();
        draft.set("icon", "star");
        draft.set("link", "/offices");
        draft.set("text", "Offices");
        draft.set("description", "Browse all offices");

        assert_eq!(
            json_body(spec, &draft),
            json!({
                "icon": "star",
                "link": "/offices",
                "text": "Offices",
                "description": "Browse all offices"
            })
        );
    }

    #[test]
    fn test_plan_includes_entered_file() {
        let spec = resource_by_slug("office-tours").unwrap();
        let mut draft = Draft::new();
        draft.set("title", "Rooftop");
        draft.set("description", "A view");
        draft.set("image", "/tmp/rooftop.png");

        let parts = plan_parts(spec, &draft);
        assert_eq!(
            parts,
            vec![
                PartPlan::Text {
                    name: "title",
                    value: "Rooftop".into()
                },
                PartPlan::Text {
                    name: "description",
                    value: "A view".into()
                },
                PartPlan::File {
                    name: "image",
                    path: PathBuf::from("/tmp/rooftop.png")
                },
            ]
        );
    }

    #[test]
    fn test_plan_omits_untouched_file() {
        let spec = resource_by_slug("work-business").unwrap();
        let mut draft = Draft::new();
        draft.set("title", "Focus");
        draft.set("description1", "One");
        draft.set("description2", "Two");
        draft.set("imageTop", "/tmp/top.png");

        let parts = plan_parts(spec, &draft);
        let file_names: Vec<_> = parts
            .iter()
            .filter_map(|p| match p {
                PartPlan::File { name, .. } => Some(*name),
                PartPlan::Text { .. } => None,
            })
            .collect();
        assert_eq!(file_names, vec!["imageTop"]);
    }

    #[test]
    fn test_approval_body_flips_flag() {
        assert_eq!(approval_body(), json!({"isAdminApprove": true}));
    }
}
