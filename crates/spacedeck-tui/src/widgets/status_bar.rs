//! Status bar widget
//!
//! Single line at the bottom of the screen. Shows the active notice when one
//! is set, context key hints otherwise, and the row position on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use spacedeck_app::state::AppState;
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Status bar widget showing notices and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key hints for the current context. The add hint carries the
    /// resource's own label ("Add Data", "Add Office Tour").
    fn hints(&self) -> String {
        let page = self.state.active_page();
        if page.form.is_visible() {
            return "[Tab] Next  [Enter] Save  [Esc] Cancel".to_string();
        }
        if page.spec.has_form() {
            format!(
                "[q] Quit  [1-7] Page  [↑↓] Row  [r] Refresh  [n] {}  [e] Edit  [d] Delete",
                page.spec.open_form_label
            )
        } else if page.spec.actions.approve {
            "[q] Quit  [1-7] Page  [↑↓] Row  [r] Refresh  [a] Approve".to_string()
        } else {
            "[q] Quit  [1-7] Page  [↑↓] Row  [r] Refresh".to_string()
        }
    }

    fn left_segments(&self) -> Vec<Span<'static>> {
        let mut segments = vec![Span::raw(" ")];

        match &self.state.notice {
            Some(notice) => {
                let (icon, style) = styles::notice_indicator(notice.level);
                segments.push(Span::styled(format!("{} {}", icon, notice.text), style));
            }
            None => {
                segments.push(Span::styled(self.hints(), styles::text_muted()));
            }
        }

        segments
    }

    /// Row position within the visible records, 1-based
    fn position(&self) -> String {
        let page = self.state.active_page();
        let total = page.visible_records().len();
        if total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", page.selected.min(total - 1) + 1, total)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(Line::from(self.left_segments())).render(area, buf);

        let page = self.state.active_page();
        let right = if page.is_busy() {
            format!("↻ {}", self.position())
        } else {
            self.position()
        };

        let right_width = right.width() as u16;
        if area.width > right_width + 1 {
            let x = area.x + area.width - right_width - 1;
            buf.set_string(x, area.y, &right, styles::text_muted());
        }
    }
}
