//! spacedeck-tui - Terminal UI for Spacedeck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! lifecycle, event polling, theming, and the widget tree rendered from
//! `spacedeck-app` state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export the main entry point
pub use runner::run;
