//! Color palette for the console theme.
//!
//! Dark surfaces with the Book My Space teal as the single accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(14, 17, 20); // Terminal background
pub const PANEL_BG: Color = Color::Rgb(20, 24, 28); // Table container background
pub const MODAL_BG: Color = Color::Rgb(26, 31, 36); // Form dialog background
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(38, 46, 52); // Focused input background
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(28, 34, 39); // Unfocused input background
pub const ROW_SELECTED_BG: Color = Color::Rgb(34, 42, 48); // Selected row when table unfocused

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(52, 61, 70); // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Rgb(107, 183, 190); // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(107, 183, 190); // Brand teal (#6BB7BE)
pub const ACCENT_DIM: Color = Color::Rgb(62, 106, 110); // Dimmed accent
pub const CONTRAST_FG: Color = Color::Rgb(10, 12, 14); // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(214, 222, 228); // Primary text
pub const TEXT_SECONDARY: Color = Color::Rgb(139, 148, 158); // Secondary text
pub const TEXT_MUTED: Color = Color::Rgb(88, 96, 105); // Muted text, hints
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252); // Emphasis text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(63, 185, 80); // Success notices, approved rows
pub const STATUS_RED: Color = Color::Rgb(248, 81, 73); // Failure notices, armed delete
pub const STATUS_YELLOW: Color = Color::Rgb(210, 153, 34); // Pending state

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(6, 8, 10); // Modal drop shadow
