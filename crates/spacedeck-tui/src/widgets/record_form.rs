//! Record form dialog
//!
//! Centered modal for creating and editing records. One label/input pair per
//! editable catalog field; the focused input carries the cursor. File fields
//! take a local path that is uploaded on save.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use spacedeck_app::state::PageState;
use spacedeck_core::{FieldKind, FieldSpec};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::{palette, styles};

/// Dialog width in characters, clamped to the screen.
const FORM_WIDTH: u16 = 56;

/// Modal form widget for the active page.
pub struct RecordForm<'a> {
    page: &'a PageState,
}

impl<'a> RecordForm<'a> {
    pub fn new(page: &'a PageState) -> Self {
        Self { page }
    }

    fn title(&self) -> String {
        format!(" {} ", self.page.spec.submit_label(self.page.form.is_editing()))
    }

    fn label_line(&self, field: &FieldSpec) -> Line<'static> {
        let mut spans = vec![Span::styled(field.label, styles::text_secondary())];
        if field.required {
            spans.push(Span::styled("*", styles::accent()));
        }
        if field.kind == FieldKind::File {
            let hint = if self.page.form.is_editing() {
                "  (path, blank keeps current)"
            } else {
                "  (file path)"
            };
            spans.push(Span::styled(hint, styles::text_muted()));
        }
        Line::from(spans)
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer, field_index: usize, value: &str) {
        let is_active = field_index == self.page.form.focus;
        let style = if is_active {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::INPUT_ACTIVE_BG)
        } else {
            Style::default()
                .fg(palette::TEXT_SECONDARY)
                .bg(palette::INPUT_INACTIVE_BG)
        };

        // The cursor sits at the end of the value; keep that end in view.
        let display = if is_active {
            let tail = super::tail_to_width(value, area.width.saturating_sub(1) as usize);
            format!("{}|", tail)
        } else {
            super::truncate_to_width(value, area.width as usize)
        };

        let padded = format!("{:<width$}", display, width = area.width as usize);
        Paragraph::new(padded).style(style).render(area, buf);
    }
}

impl Widget for RecordForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.page.form.is_visible() {
            return;
        }

        let fields: Vec<&'static FieldSpec> = self.page.spec.input_fields().collect();
        if fields.is_empty() {
            return;
        }

        dim_background(buf, area);

        // Label + input + spacer per field, one hint row, two border rows.
        let height = (fields.len() as u16) * 3 + 3;
        let modal = centered_rect(FORM_WIDTH, height, area);
        clear_area(buf, modal);
        render_shadow(buf, modal);

        let title = self.title();
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let content = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        };

        let mut constraints = Vec::with_capacity(fields.len() * 3 + 1);
        for _ in &fields {
            constraints.push(Constraint::Length(1)); // Label
            constraints.push(Constraint::Length(1)); // Input
            constraints.push(Constraint::Length(1)); // Spacer
        }
        constraints.push(Constraint::Length(1)); // Hints
        let chunks = Layout::vertical(constraints).split(content);

        for (i, field) in fields.iter().enumerate() {
            Paragraph::new(self.label_line(field)).render(chunks[i * 3], buf);
            let value = self.page.form.draft.value(field.name);
            self.render_input(chunks[i * 3 + 1], buf, i, value);
        }

        let hints = "[Enter] Save  [Tab] Next  [Esc] Cancel";
        Paragraph::new(hints)
            .style(styles::text_muted())
            .render(chunks[fields.len() * 3], buf);
    }
}
