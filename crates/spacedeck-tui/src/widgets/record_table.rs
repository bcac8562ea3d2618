//! Record table widget
//!
//! Renders the active resource's collection: a numbered row per record with
//! one column per catalog field, plus an approval column for vendor listings.
//! The widget is pure: selection and scrolling derive from `PageState`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use spacedeck_app::state::PageState;
use spacedeck_core::{FieldKind, Record, ResourceSpec};

use crate::theme::{palette, styles};

// ── Column widths (characters) ────────────────────────────────────────────────

/// Row number column width in characters.
const COL_INDEX: u16 = 5;

/// Approval status column width in characters.
const COL_STATUS: u16 = 11;

/// Narrowest useful field column. Columns that cannot get this much
/// width are dropped from the right.
const MIN_FIELD_WIDTH: u16 = 9;

// ── RecordTable ───────────────────────────────────────────────────────────────

/// Table of the records currently held by one page.
pub struct RecordTable<'a> {
    page: &'a PageState,
    focused: bool,
}

impl<'a> RecordTable<'a> {
    pub fn new(page: &'a PageState, focused: bool) -> Self {
        Self { page, focused }
    }

    fn title(&self) -> String {
        let count = self.page.visible_records().len();
        if self.page.loading {
            format!(" {} ({}) ↻ ", self.page.spec.title, count)
        } else {
            format!(" {} ({}) ", self.page.spec.title, count)
        }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(self.title())
            .title_style(styles::accent_bold());
        let inner = block.inner(area);
        block.render(area, buf);

        // Need the column header row plus at least one data row.
        if inner.height < 2 || inner.width < COL_INDEX + MIN_FIELD_WIDTH {
            return;
        }

        let visible = self.page.visible_records();
        if visible.is_empty() {
            self.render_placeholder(inner, buf);
            return;
        }

        let widths = field_column_widths(inner.width, self.page.spec);

        self.render_column_headers(inner, buf, &widths);

        let data_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        self.render_rows(data_area, buf, &visible, &widths);
    }
}

impl RecordTable<'_> {
    /// Centered text for the loading and no-data states.
    fn render_placeholder(&self, inner: Rect, buf: &mut Buffer) {
        let (text, style) = if self.page.loading {
            ("Loading…", styles::accent())
        } else {
            (self.page.spec.empty_text, styles::text_muted())
        };

        let width = text.chars().count() as u16;
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_string(x, y, text, style);
    }

    fn render_column_headers(&self, area: Rect, buf: &mut Buffer, widths: &[u16]) {
        let style = styles::text_muted().add_modifier(Modifier::BOLD);
        let mut x = area.x;

        buf.set_string(x, area.y, "  #", style);
        x += COL_INDEX;

        for (field, width) in self.page.spec.fields.iter().zip(widths) {
            let label = super::truncate_to_width(field.label, *width as usize - 1);
            buf.set_string(x, area.y, &label, style);
            x += width;
        }

        if self.page.spec.actions.approve {
            buf.set_string(x, area.y, "Status", style);
        }
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer, visible: &[&Record], widths: &[u16]) {
        if area.height == 0 {
            return;
        }

        let visible_rows = area.height as usize;
        let selected = self.page.selected.min(visible.len().saturating_sub(1));

        // Keep the selected row in view without tracking a scroll offset.
        let start = selected.saturating_sub(visible_rows.saturating_sub(1));
        let end = (start + visible_rows).min(visible.len());

        for (row_idx, record_idx) in (start..end).enumerate() {
            let record = visible[record_idx];
            let y = area.y + row_idx as u16;
            let is_selected = record_idx == selected;

            let armed = is_selected
                && self.page.pending_delete.as_deref() == Some(record.id.as_str());
            let row_style = if armed {
                styles::delete_armed()
            } else if is_selected && self.focused {
                styles::focused_selected()
            } else if is_selected {
                Style::default().bg(palette::ROW_SELECTED_BG)
            } else {
                Style::default()
            };

            // Paint the whole row with the row background first.
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(row_style).set_char(' ');
                }
            }

            let mut x = area.x;

            let index_text = format!("{:>3}", record_idx + 1);
            buf.set_string(x, y, &index_text, styles::text_muted().patch(row_style));
            x += COL_INDEX;

            for (col, (field, width)) in
                self.page.spec.fields.iter().zip(widths).enumerate()
            {
                let value = record.display_as(field.name, field.kind);
                let text = super::truncate_to_width(&value, *width as usize - 1);
                let cell_style = if field.kind == FieldKind::File {
                    styles::text_muted()
                } else if col == 0 {
                    styles::text_primary()
                } else {
                    styles::text_secondary()
                };
                buf.set_string(x, y, &text, cell_style.patch(row_style));
                x += width;
            }

            if self.page.spec.actions.approve {
                let (icon, label, style) = styles::approval_indicator(record.is_approved());
                let text = format!("{} {}", icon, label);
                buf.set_string(x, y, &text, style.patch(row_style));
            }
        }
    }
}

// ── Column sizing ─────────────────────────────────────────────────────────────

/// Split the width remaining after the fixed columns evenly across the
/// resource's fields. Fields that cannot get `MIN_FIELD_WIDTH` are dropped
/// from the right; the last surviving column absorbs the remainder.
fn field_column_widths(total: u16, spec: &ResourceSpec) -> Vec<u16> {
    let status = if spec.actions.approve { COL_STATUS } else { 0 };
    let avail = total.saturating_sub(COL_INDEX + status);
    let field_count = spec.fields.len() as u16;
    if field_count == 0 || avail == 0 {
        return Vec::new();
    }

    let shown = if avail / field_count >= MIN_FIELD_WIDTH {
        field_count
    } else {
        (avail / MIN_FIELD_WIDTH).max(1)
    };

    let per = avail / shown;
    let mut widths = vec![per; shown as usize];
    if let Some(last) = widths.last_mut() {
        *last += avail - per * shown;
    }
    widths
}

// ── Tests ─────────────────────────────────────────────────────────────────────
