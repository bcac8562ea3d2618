//! Message processing - drives the TEA update loop
//!
//! Each incoming message runs through `handler::update`, any resulting
//! action is dispatched to a background task, and follow-up messages are
//! drained in the same call so state transitions stay atomic per event.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use spacedeck_api::ApiClient;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<ApiClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(client));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
