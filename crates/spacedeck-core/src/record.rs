//! Backend record model.
//!
//! Records arrive as loosely-shaped JSON objects; beyond the Mongo-style
//! `_id` we keep every field in a flattened map and interpret values on
//! demand. This keeps one type working across all catalog resources.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::resource::FieldKind;

/// Soft-delete marker field.
pub const DELETED_FLAG: &str = "isDeleted";

/// Admin approval marker field.
pub const APPROVED_FLAG: &str = "isAdminApprove";

/// One record as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Raw field value, if present.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value rendered as display text. Non-string scalars are
    /// stringified; missing and null fields render empty.
    pub fn display(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Field value rendered for a table cell of the given kind. Date
    /// fields are reformatted from RFC 3339 to a short human form; if the
    /// value does not parse it is shown as-is.
    pub fn display_as(&self, name: &str, kind: FieldKind) -> String {
        let raw = self.display(name);
        if kind != FieldKind::Date || raw.is_empty() {
            return raw;
        }
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => ts.format("%d %b %Y").to_string(),
            Err(_) => raw,
        }
    }

    /// Boolean marker field. Absent or non-boolean values count as false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Value::Bool(true)))
    }

    pub fn is_deleted(&self) -> bool {
        self.flag(DELETED_FLAG)
    }

    pub fn is_approved(&self) -> bool {
        self.flag(APPROVED_FLAG)
    }
}
