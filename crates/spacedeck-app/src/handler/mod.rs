//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the table and form modes

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use spacedeck_core::{Draft, ResourceSpec};

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch a page's collection in the background
    StartList {
        page: usize,
        spec: &'static ResourceSpec,
    },

    /// Create a record from the draft in the background
    StartCreate {
        page: usize,
        spec: &'static ResourceSpec,
        draft: Draft,
    },

    /// Overwrite a record with the draft in the background
    StartUpdate {
        page: usize,
        spec: &'static ResourceSpec,
        id: String,
        draft: Draft,
    },

    /// Delete a record in the background
    StartDelete {
        page: usize,
        spec: &'static ResourceSpec,
        id: String,
    },

    /// Flip a record's approval flag in the background
    StartApprove {
        page: usize,
        spec: &'static ResourceSpec,
        id: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
