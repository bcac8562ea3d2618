//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::MutationKind;
use spacedeck_core::Record;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tab / Row Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch to the next tab (wraps)
    NextTab,
    /// Switch to the previous tab (wraps)
    PrevTab,
    /// Switch to a tab by index
    SelectTab { index: usize },
    /// Move the row selection down
    NextRow,
    /// Move the row selection up
    PrevRow,
    /// Jump the row selection to the first row
    FirstRow,
    /// Jump the row selection to the last row
    LastRow,
    /// Move the row selection a page up
    JumpRowsUp,
    /// Move the row selection a page down
    JumpRowsDown,

    // ─────────────────────────────────────────────────────────
    // Data Loading
    // ─────────────────────────────────────────────────────────
    /// Fetch a page's collection from the backend
    Refresh { page: usize },
    /// A page's collection arrived
    RecordsLoaded { page: usize, records: Vec<Record> },
    /// A page's fetch failed
    LoadFailed { page: usize, error: String },

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Open the create form, or close it when already open
    ToggleForm,
    /// Open the form pre-filled with the selected record
    EditSelected,
    /// Type a character into the focused field
    FormInput(char),
    /// Delete the last character of the focused field
    FormBackspace,
    /// Move focus to the next form field
    FormNextField,
    /// Move focus to the previous form field
    FormPrevField,
    /// Submit the form (create or update per the form's mode)
    FormSubmit,
    /// Close the form, dropping typed input
    FormCancel,

    // ─────────────────────────────────────────────────────────
    // Row Mutations
    // ─────────────────────────────────────────────────────────
    /// Delete the selected record (first press arms, second confirms)
    DeleteSelected,
    /// Disarm a pending delete
    CancelDelete,
    /// Approve the selected record
    ApproveSelected,

    // ─────────────────────────────────────────────────────────
    // Mutation Completion
    // ─────────────────────────────────────────────────────────
    /// A write against the backend succeeded
    MutationCompleted { page: usize, kind: MutationKind },
    /// A write against the backend failed
    MutationFailed {
        page: usize,
        kind: MutationKind,
        error: String,
    },
}
