//! Configuration types for Spacedeck
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections for the API endpoint, UI timing, and behavior

use serde::{Deserialize, Serialize};

/// Application settings (.spacedeck/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the Book My Space backend, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://book-my-space-eta.vercel.app".to_string()
}

/// UI timing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long status-bar notices stay on screen, in seconds
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_ttl_secs: default_notice_ttl_secs(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_notice_ttl_secs() -> u64 {
    4
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask for a confirming keypress before deleting a record
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

fn default_true() -> bool {
    true
}
