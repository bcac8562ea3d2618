//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;

use crate::message::Message;
use crate::state::{AppState, EditMode, MutationKind};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Rows a PageUp/PageDown press moves the selection by.
const ROW_JUMP: usize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.clear_expired_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab / Row Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.next_tab();
            refresh_active(state)
        }

        Message::PrevTab => {
            state.prev_tab();
            refresh_active(state)
        }

        Message::SelectTab { index } => {
            if state.select_tab(index) {
                refresh_active(state)
            } else {
                UpdateResult::none()
            }
        }

        Message::NextRow => {
            state.active_page_mut().select_next();
            UpdateResult::none()
        }

        Message::PrevRow => {
            state.active_page_mut().select_prev();
            UpdateResult::none()
        }

        Message::FirstRow => {
            state.active_page_mut().select_first();
            UpdateResult::none()
        }

        Message::LastRow => {
            state.active_page_mut().select_last();
            UpdateResult::none()
        }

        Message::JumpRowsUp => {
            state.active_page_mut().select_back(ROW_JUMP);
            UpdateResult::none()
        }

        Message::JumpRowsDown => {
            state.active_page_mut().select_forward(ROW_JUMP);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Data Loading
        // ─────────────────────────────────────────────────────────
        Message::Refresh { page } => {
            let Some(page_state) = state.page_mut(page) else {
                return UpdateResult::none();
            };
            if page_state.loading {
                return UpdateResult::none();
            }
            page_state.loading = true;
            UpdateResult::action(UpdateAction::StartList {
                page,
                spec: page_state.spec,
            })
        }

        Message::RecordsLoaded { page, records } => {
            let Some(page_state) = state.page_mut(page) else {
                return UpdateResult::none();
            };
            page_state.loading = false;
            page_state.records = records;
            page_state.clamp_selection();
            UpdateResult::none()
        }

        Message::LoadFailed { page, error } => {
            let Some(page_state) = state.page_mut(page) else {
                return UpdateResult::none();
            };
            page_state.loading = false;
            warn!(
                resource = page_state.spec.slug,
                "Collection fetch failed: {error}"
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleForm => {
            let page = state.active_page_mut();
            if !page.spec.has_form() {
                return UpdateResult::none();
            }
            if page.form.is_visible() {
                page.close_form();
            } else {
                page.pending_delete = None;
                page.open_create_form();
            }
            UpdateResult::none()
        }

        Message::EditSelected => {
            let page = state.active_page_mut();
            if !page.spec.actions.edit {
                return UpdateResult::none();
            }
            let record = page.selected_record().cloned();
            if let Some(record) = record {
                page.pending_delete = None;
                page.open_edit_form(&record);
            }
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            let page = state.active_page_mut();
            if page.form.is_visible() {
                if let Some(field) = page.focused_field() {
                    page.form.draft.push_char(field.name, c);
                }
            }
            UpdateResult::none()
        }

        Message::FormBackspace => {
            let page = state.active_page_mut();
            if page.form.is_visible() {
                if let Some(field) = page.focused_field() {
                    page.form.draft.pop_char(field.name);
                }
            }
            UpdateResult::none()
        }

        Message::FormNextField => {
            state.active_page_mut().focus_next_field();
            UpdateResult::none()
        }

        Message::FormPrevField => {
            state.active_page_mut().focus_prev_field();
            UpdateResult::none()
        }

        Message::FormSubmit => handle_form_submit(state),

        Message::FormCancel => {
            state.active_page_mut().close_form();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Row Mutations
        // ─────────────────────────────────────────────────────────
        Message::DeleteSelected => handle_delete_selected(state),

        Message::CancelDelete => {
            state.active_page_mut().pending_delete = None;
            state.notice = None;
            UpdateResult::none()
        }

        Message::ApproveSelected => handle_approve_selected(state),

        // ─────────────────────────────────────────────────────────
        // Mutation Completion
        // ─────────────────────────────────────────────────────────
        Message::MutationCompleted { page, kind } => handle_mutation_completed(state, page, kind),

        Message::MutationFailed { page, kind, error } => {
            handle_mutation_failed(state, page, kind, error)
        }
    }
}

/// Follow up a tab switch with a fetch so the page shows fresh data.
fn refresh_active(state: &AppState) -> UpdateResult {
    UpdateResult::message(Message::Refresh { page: state.active })
}

/// Validate the draft and dispatch the create or update it describes.
///
/// Exactly one write may be in flight per page; a submit while one is
/// pending is dropped. A missing required field refuses the dispatch and
/// names the field in the status bar, without touching the network.
fn handle_form_submit(state: &mut AppState) -> UpdateResult {
    let page_index = state.active;
    let page = state.active_page();
    if !page.form.is_visible() || page.is_busy() {
        return UpdateResult::none();
    }

    let creating = !page.form.is_editing();
    if let Some(missing) = page.form.draft.first_missing(page.spec, creating) {
        let text = format!("{} is required", missing.label);
        state.notify_failure(text);
        return UpdateResult::none();
    }

    let page = state.active_page_mut();
    let spec = page.spec;
    let draft = page.form.draft.clone();
    let mode = page.form.mode.clone();
    match mode {
        EditMode::Editing(id) => {
            page.in_flight = Some(MutationKind::Update);
            UpdateResult::action(UpdateAction::StartUpdate {
                page: page_index,
                spec,
                id,
                draft,
            })
        }
        EditMode::Creating => {
            page.in_flight = Some(MutationKind::Create);
            UpdateResult::action(UpdateAction::StartCreate {
                page: page_index,
                spec,
                draft,
            })
        }
    }
}

/// First press arms the delete and prompts for confirmation; the second
/// press on the same record dispatches it. The confirmation step can be
/// switched off in settings.
fn handle_delete_selected(state: &mut AppState) -> UpdateResult {
    let page_index = state.active;
    let confirm_required = state.settings.behavior.confirm_delete;
    let page = &mut state.pages[page_index];
    if !page.spec.actions.delete || page.is_busy() {
        return UpdateResult::none();
    }
    let Some(record) = page.selected_record() else {
        return UpdateResult::none();
    };
    let id = record.id.clone();
    let spec = page.spec;

    let armed = page.pending_delete.as_deref() == Some(id.as_str());
    if confirm_required && !armed {
        page.pending_delete = Some(id);
        let prompt = format!("Press d again to delete this {}", spec.noun.to_lowercase());
        state.notify_info(prompt);
        return UpdateResult::none();
    }

    page.pending_delete = None;
    page.in_flight = Some(MutationKind::Delete);
    UpdateResult::action(UpdateAction::StartDelete {
        page: page_index,
        spec,
        id,
    })
}

fn handle_approve_selected(state: &mut AppState) -> UpdateResult {
    let page_index = state.active;
    let page = &mut state.pages[page_index];
    if !page.spec.actions.approve || page.is_busy() {
        return UpdateResult::none();
    }
    let Some(record) = page.selected_record() else {
        return UpdateResult::none();
    };
    if record.is_approved() {
        return UpdateResult::none();
    }
    let id = record.id.clone();
    let spec = page.spec;
    page.in_flight = Some(MutationKind::Approve);
    UpdateResult::action(UpdateAction::StartApprove {
        page: page_index,
        spec,
        id,
    })
}

/// Every successful write ends the same way: clear the in-flight guard,
/// close the form if one was open for it, post a success notice, and
/// refetch the page.
fn handle_mutation_completed(state: &mut AppState, page: usize, kind: MutationKind) -> UpdateResult {
    let Some(page_state) = state.page_mut(page) else {
        return UpdateResult::none();
    };
    page_state.in_flight = None;
    page_state.pending_delete = None;
    if matches!(kind, MutationKind::Create | MutationKind::Update) {
        page_state.close_form();
    }
    let noun = page_state.spec.noun;
    state.notify_success(format!("{} {}", noun, kind.past()));
    UpdateResult::message(Message::Refresh { page })
}

/// A failed write keeps the form and draft exactly as they were so the
/// user can retry; only the in-flight guard and notice change.
fn handle_mutation_failed(
    state: &mut AppState,
    page: usize,
    kind: MutationKind,
    error: String,
) -> UpdateResult {
    let Some(page_state) = state.page_mut(page) else {
        return UpdateResult::none();
    };
    page_state.in_flight = None;
    page_state.pending_delete = None;
    warn!(
        resource = page_state.spec.slug,
        "{} failed: {error}",
        kind.verb()
    );
    let noun = page_state.spec.noun.to_lowercase();
    state.notify_failure(format!("Failed to {} {}", kind.verb(), noun));
    UpdateResult::none()
}
