//! Semantic style builders for the console theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use spacedeck_app::state::NoticeLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Selection styles ---

/// "Dark on teal" - used for the selected row and the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected row styling while an armed delete is waiting for confirmation
pub fn delete_armed() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::PANEL_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::MODAL_BG))
}

// --- Notice indicator mapping ---

/// Icon and style for a status bar notice.
pub fn notice_indicator(level: NoticeLevel) -> (&'static str, Style) {
    match level {
        NoticeLevel::Info => ("●", accent()),
        NoticeLevel::Success => (
            "✓",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        NoticeLevel::Failure => (
            "✗",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Icon, label, and style for a vendor listing's approval state.
pub fn approval_indicator(approved: bool) -> (&'static str, &'static str, Style) {
    if approved {
        (
            "●",
            "Approved",
            Style::default().fg(palette::STATUS_GREEN),
        )
    } else {
        (
            "○",
            "Pending",
            Style::default().fg(palette::STATUS_YELLOW),
        )
    }
}
