//! Spacedeck - a terminal admin console for the Book My Space backend
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use spacedeck_core::prelude::*;

/// Keyboard-driven admin console for the Book My Space backend
#[derive(Parser, Debug)]
#[command(name = "spacedeck")]
#[command(about = "A terminal admin console for the Book My Space backend", long_about = None)]
struct Args {
    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory holding .spacedeck/config.toml (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Error reports and file logging; the TUI owns stdout
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    spacedeck_core::logging::init()?;

    let config_dir = args
        .config
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut settings = spacedeck_app::config::load_settings(&config_dir);
    if let Some(url) = args.api_url {
        settings.api.base_url = url;
    }
    if !settings.api.base_url.starts_with("http://")
        && !settings.api.base_url.starts_with("https://")
    {
        return Err(Error::config_invalid(format!(
            "Backend URL {:?} is not an absolute http(s) URL",
            settings.api.base_url
        )));
    }
    info!("Backend: {}", settings.api.base_url);

    let result = spacedeck_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Spacedeck exiting");
    result
}
