//! Key event handlers for the table and form modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.active_page().form.is_visible() {
        handle_key_form(key)
    } else {
        handle_key_table(state, key)
    }
}

/// Handle key events while the record table has focus
fn handle_key_table(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit only works from the table, never from inside the form
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Refetch the current page
        InputKey::Char('r') => Some(Message::Refresh { page: state.active }),

        // ─────────────────────────────────────────────────────────
        // Tab Navigation
        // ─────────────────────────────────────────────────────────
        // Number keys select a tab by index
        InputKey::Char('1') => Some(Message::SelectTab { index: 0 }),
        InputKey::Char('2') => Some(Message::SelectTab { index: 1 }),
        InputKey::Char('3') => Some(Message::SelectTab { index: 2 }),
        InputKey::Char('4') => Some(Message::SelectTab { index: 3 }),
        InputKey::Char('5') => Some(Message::SelectTab { index: 4 }),
        InputKey::Char('6') => Some(Message::SelectTab { index: 5 }),
        InputKey::Char('7') => Some(Message::SelectTab { index: 6 }),

        InputKey::Tab | InputKey::Right => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevTab),

        // ─────────────────────────────────────────────────────────
        // Row Selection
        // ─────────────────────────────────────────────────────────
        InputKey::Down | InputKey::Char('j') => Some(Message::NextRow),
        InputKey::Up | InputKey::Char('k') => Some(Message::PrevRow),
        InputKey::Home => Some(Message::FirstRow),
        InputKey::End => Some(Message::LastRow),
        InputKey::PageUp => Some(Message::JumpRowsUp),
        InputKey::PageDown => Some(Message::JumpRowsDown),

        // ─────────────────────────────────────────────────────────
        // Row Actions
        // ─────────────────────────────────────────────────────────
        // Open (or close) the create form
        InputKey::Char('n') => Some(Message::ToggleForm),

        // Edit the selected record
        InputKey::Char('e') | InputKey::Enter => Some(Message::EditSelected),

        // Delete the selected record (press twice to confirm)
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelected),

        // y also confirms an armed delete
        InputKey::Char('y') if state.active_page().pending_delete.is_some() => {
            Some(Message::DeleteSelected)
        }

        // Approve the selected record
        InputKey::Char('a') => Some(Message::ApproveSelected),

        // Esc disarms a pending delete; otherwise it does nothing here
        InputKey::Esc => {
            if state.active_page().pending_delete.is_some() {
                Some(Message::CancelDelete)
            } else {
                None
            }
        }

        _ => None,
    }
}

/// Handle key events while the add/edit form is open
fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        // Cancel the form, dropping typed input
        InputKey::Esc => Some(Message::FormCancel),

        // Submit
        InputKey::Enter => Some(Message::FormSubmit),

        // Field focus
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),

        // Editing
        InputKey::Backspace => Some(Message::FormBackspace),

        // Force quit even with the form open
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Everything else types into the focused field
        InputKey::Char(c) => Some(Message::FormInput(c)),

        _ => None,
    }
}
