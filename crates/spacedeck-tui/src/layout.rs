//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header container height: top border + title row + tab row + bottom border.
const HEADER_HEIGHT: u16 = 4;

/// Status line height.
const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (app title + resource tabs)
    pub header: Rect,

    /// Record table area
    pub table: Rect,

    /// Status line (notices + key hints)
    pub status: Rect,
}

/// Split the screen into header, table, and status areas
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        table: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.table.height, 19); // 24 - 4 - 1
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.table.y, 4);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.table.height + layout.status.height,
            area.height
        );
        assert_eq!(layout.table.y, layout.header.y + layout.header.height);
        assert_eq!(layout.status.y, layout.table.y + layout.table.height);
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_panic() {
        let area = Rect::new(0, 0, 20, 5);
        let layout = create(area);

        // Header wins the fight for rows; table may shrink below its minimum
        assert!(layout.header.height <= 4);
        assert_eq!(
            layout.header.height + layout.table.height + layout.status.height,
            area.height
        );
    }
}
