//! In-progress form input.

use std::collections::BTreeMap;

use crate::record::Record;
use crate::resource::{FieldSpec, ResourceSpec};

/// Raw text typed into the add/edit form, keyed by field name.
///
/// File fields hold a filesystem path as typed; nothing is read from disk
/// until submit. Fields the user never touched are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing record for editing. Only text inputs are
    /// seeded; file fields start empty so an untouched one means "keep the
    /// stored file".
    pub fn seeded_from(spec: &ResourceSpec, record: &Record) -> Self {
        let mut draft = Self::new();
        for field in spec.input_fields() {
            if field.kind.is_file() {
                continue;
            }
            let value = record.display(field.name);
            if !value.is_empty() {
                draft.values.insert(field.name.to_string(), value);
            }
        }
        draft
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn push_char(&mut self, name: &str, c: char) {
        self.values.entry(name.to_string()).or_default().push(c);
    }

    pub fn pop_char(&mut self, name: &str) {
        if let Some(value) = self.values.get_mut(name) {
            value.pop();
            if value.is_empty() {
                self.values.remove(name);
            }
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First required field with no input, or None when the draft is ready
    /// to submit. File fields are only required when creating.
    pub fn first_missing<'s>(
        &self,
        spec: &'s ResourceSpec,
        creating: bool,
    ) -> Option<&'s FieldSpec> {
        spec.input_fields().find(|field| {
            if !field.required {
                return false;
            }
            if field.kind.is_file() && !creating {
                return false;
            }
            self.value(field.name).trim().is_empty()
        })
    }
}
