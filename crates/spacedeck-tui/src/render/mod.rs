//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use spacedeck_app::state::AppState;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{HeaderBar, RecordForm, RecordTable, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(HeaderBar::new(state), areas.header);

    let page = state.active_page();
    let form_open = page.form.is_visible();
    frame.render_widget(RecordTable::new(page, !form_open), areas.table);
    frame.render_widget(StatusBar::new(state), areas.status);

    // The form dialog overlays and dims the whole screen when open
    if form_open {
        frame.render_widget(RecordForm::new(page), area);
    }
}
