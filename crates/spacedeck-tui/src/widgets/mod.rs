//! Custom widget components

pub mod modal_overlay;

mod header;
mod record_form;
mod record_table;
mod status_bar;

pub use header::HeaderBar;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, appending `…` when
/// truncated. Width-aware so CJK record values cannot overflow their column.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis.
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Return the longest suffix of `s` that fits in `max_width` terminal columns.
/// Used by form inputs, which keep the cursor (end of the value) in view.
pub(crate) fn tail_to_width(s: &str, max_width: usize) -> &str {
    if s.width() <= max_width {
        return s;
    }

    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width_short_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_to_width_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 5), "hell…");
    }

    #[test]
    fn test_truncate_to_width_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_to_width_cjk() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("日本語テスト", 12), "日本語テスト");
        assert_eq!(truncate_to_width("日本語テスト", 7), "日本語…");
        // Budget of 6 leaves 5 columns for chars; only two fit.
        assert_eq!(truncate_to_width("日本語テスト", 6), "日本…");
    }

    #[test]
    fn test_tail_to_width_short_unchanged() {
        assert_eq!(tail_to_width("hello", 10), "hello");
        assert_eq!(tail_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_tail_to_width_keeps_suffix() {
        assert_eq!(tail_to_width("hello world", 5), "world");
        assert_eq!(tail_to_width("abcdef", 1), "f");
    }

    #[test]
    fn test_tail_to_width_cjk() {
        assert_eq!(tail_to_width("日本語", 4), "本語");
        // An odd budget cannot split a double-width char.
        assert_eq!(tail_to_width("日本語", 3), "語");
    }
}
