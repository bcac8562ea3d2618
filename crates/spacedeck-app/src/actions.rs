//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::MutationKind;
use spacedeck_api::ApiClient;

/// Execute an action by spawning a background task
///
/// Every task reports back through `msg_tx`; send failures mean the event
/// loop is gone, so they are ignored.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<ApiClient>) {
    match action {
        UpdateAction::StartList { page, spec } => {
            tokio::spawn(async move {
                let message = match client.list(spec).await {
                    Ok(records) => Message::RecordsLoaded { page, records },
                    Err(e) => Message::LoadFailed {
                        page,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::StartCreate { page, spec, draft } => {
            spawn_mutation(msg_tx, page, MutationKind::Create, async move {
                client.create(spec, &draft).await
            });
        }

        UpdateAction::StartUpdate {
            page,
            spec,
            id,
            draft,
        } => {
            spawn_mutation(msg_tx, page, MutationKind::Update, async move {
                client.update(spec, &id, &draft).await
            });
        }

        UpdateAction::StartDelete { page, spec, id } => {
            spawn_mutation(msg_tx, page, MutationKind::Delete, async move {
                client.delete(spec, &id).await
            });
        }

        UpdateAction::StartApprove { page, spec, id } => {
            spawn_mutation(msg_tx, page, MutationKind::Approve, async move {
                client.approve(spec, &id).await
            });
        }
    }
}

/// Run one write against the backend and post its completion message.
fn spawn_mutation<F>(msg_tx: mpsc::Sender<Message>, page: usize, kind: MutationKind, fut: F)
where
    F: std::future::Future<Output = spacedeck_core::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        let message = match fut.await {
            Ok(()) => Message::MutationCompleted { page, kind },
            Err(e) => Message::MutationFailed {
                page,
                kind,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}
