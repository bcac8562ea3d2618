//! Application header with resource tabs
//!
//! Top container showing the app name, the active page title, the backend
//! host, and one numbered tab per managed resource.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use spacedeck_app::state::AppState;

use crate::theme::styles;

/// Header widget rendered across the top of the screen
pub struct HeaderBar<'a> {
    state: &'a AppState,
}

impl<'a> HeaderBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Build one tab title per page, numbered to match the digit shortcuts
    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.state
            .pages
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                Line::from(vec![
                    Span::styled(format!(" {}", idx + 1), styles::text_muted()),
                    Span::raw(format!(" {} ", page.spec.tab_label)),
                ])
            })
            .collect()
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Spacedeck", styles::accent_bold()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(self.state.active_page().spec.title, styles::text_primary()),
        ]);
        Paragraph::new(title).render(area, buf);

        // Backend host, right-aligned when it fits
        let host = backend_host(&self.state.settings.api.base_url);
        let host_width = host.len() as u16;
        if area.width > host_width + 30 {
            let x = area.x + area.width - host_width - 1;
            buf.set_string(x, area.y, host, styles::text_muted());
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(self.tab_titles())
            .select(self.state.active)
            .highlight_style(styles::focused_selected())
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        tabs.render(padded_area, buf);
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title row
            Constraint::Length(1), // Tab row
        ])
        .split(inner);

        self.render_title(chunks[0], buf);
        if inner.height >= 2 {
            self.render_tabs(chunks[1], buf);
        }
    }
}

/// Strip the scheme from a base URL for compact display
fn backend_host(base_url: &str) -> &str {
    base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url)
}
