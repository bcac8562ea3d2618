//! spacedeck-app - Application state and orchestration for Spacedeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: messages flow through a pure `update` function, which hands
//! background work (HTTP calls against the backend) to the action dispatcher.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, MutationKind, Notice, NoticeLevel, PageState};

// Re-export API types for the TUI and binary
pub use spacedeck_api::ApiClient;
