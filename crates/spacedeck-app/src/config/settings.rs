//! Settings parser for .spacedeck/config.toml

use std::path::{Path, PathBuf};

use spacedeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const SPACEDECK_DIR: &str = ".spacedeck";

/// Path of the settings file under a base directory.
pub fn settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SPACEDECK_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.spacedeck/config.toml`, falling back to defaults.
///
/// A missing file is normal; unreadable or unparseable files are reported
/// and also fall back so a bad config never blocks startup.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = settings_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
