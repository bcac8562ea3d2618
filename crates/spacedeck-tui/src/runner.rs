//! TUI entry point and main loop
//!
//! Owns the terminal lifecycle and drives the TEA cycle: drain completed
//! async work, draw, poll for input, feed messages back through `update`.

use std::sync::Arc;
use std::time::Duration;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use spacedeck_api::ApiClient;
use spacedeck_app::config::Settings;
use spacedeck_app::message::Message;
use spacedeck_app::state::AppState;
use spacedeck_app::{process_message, signals};
use spacedeck_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the channel carrying completions from spawned tasks.
const CHANNEL_CAPACITY: usize = 256;

/// Run the console until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings).await;
    ratatui::restore();
    result
}

async fn run_loop(terminal: &mut DefaultTerminal, settings: Settings) -> Result<()> {
    let client = Arc::new(ApiClient::new(&settings.api.base_url));
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let mut state = AppState::with_settings(settings);

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    signals::spawn_signal_handler(msg_tx.clone());

    // Fetch every page on startup so tab switches land on data
    for page in 0..state.pages.len() {
        process_message(&mut state, Message::Refresh { page }, &msg_tx, &client);
    }

    info!("Entering main loop");
    while !state.should_quit() {
        // Drain completed async work before drawing
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, &client);
        }

        if state.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &state))
            .context("Frame draw failed")?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(&mut state, message, &msg_tx, &client);
        }
    }
    info!("Main loop exited");

    Ok(())
}
