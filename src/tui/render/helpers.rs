use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::model::input::InputBuffer;
use crate::util::unicode;

/// Checkbox symbol for a task (markdown style)
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Center a fixed-size rect inside `area`, clamped to fit
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Spans for an input buffer with a visible cursor, windowed from the
/// left so the cursor stays inside `max_cells`. Mid-text the cursor is
/// the reversed grapheme under it; at end-of-text it is a ▌ block.
pub(super) fn buffer_spans(
    buf: &InputBuffer,
    max_cells: usize,
    text_style: Style,
    cursor_block_style: Style,
) -> Vec<Span<'static>> {
    if max_cells == 0 {
        return Vec::new();
    }
    let text = buf.text();
    let cursor = buf.cursor();

    // Drop graphemes from the front until the cursor cell fits
    let mut start = 0;
    while unicode::display_width(&text[start..cursor]) + 1 > max_cells {
        match unicode::next_grapheme_boundary(text, start) {
            Some(next) if next <= cursor => start = next,
            _ => break,
        }
    }

    let before = &text[start..cursor];
    let cursor_g = unicode::grapheme_at(text, cursor);

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    let used;
    if cursor_g.is_empty() {
        spans.push(Span::styled("\u{258C}".to_string(), cursor_block_style));
        used = unicode::display_width(before) + 1;
    } else {
        spans.push(Span::styled(
            cursor_g.to_string(),
            text_style.add_modifier(Modifier::REVERSED),
        ));
        used = unicode::display_width(before) + unicode::display_width(cursor_g).max(1);
    }

    let after_full = if cursor_g.is_empty() {
        ""
    } else {
        &text[cursor + cursor_g.len()..]
    };
    let remaining = max_cells.saturating_sub(used);
    if !after_full.is_empty() && remaining > 0 {
        spans.push(Span::styled(
            unicode::truncate_to_width(after_full, remaining),
            text_style,
        ));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn checkbox_symbols() {
        assert_eq!(checkbox(false), "[ ]");
        assert_eq!(checkbox(true), "[x]");
    }

    #[test]
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 10, 4);
        let r = centered_rect(20, 10, area);
        assert_eq!((r.width, r.height), (10, 4));
        let r = centered_rect(4, 2, area);
        assert_eq!((r.x, r.y, r.width, r.height), (3, 1, 4, 2));
    }

    #[test]
    fn buffer_spans_end_cursor_is_block() {
        let buf = InputBuffer::from_text("ab");
        let spans = buffer_spans(&buf, 10, Style::default(), Style::default());
        assert_eq!(concat(&spans), "ab\u{258C}");
    }

    #[test]
    fn buffer_spans_mid_cursor_reverses_grapheme() {
        let mut buf = InputBuffer::from_text("abc");
        buf.move_left();
        let spans = buffer_spans(&buf, 10, Style::default(), Style::default());
        assert_eq!(concat(&spans), "abc");
        assert!(
            spans
                .iter()
                .any(|s| s.content == "c" && s.style.add_modifier.contains(Modifier::REVERSED))
        );
    }

    #[test]
    fn buffer_spans_windows_long_text() {
        let buf = InputBuffer::from_text("abcdefghij");
        let spans = buffer_spans(&buf, 5, Style::default(), Style::default());
        // only the tail fits, cursor block included
        assert_eq!(concat(&spans), "ghij\u{258C}");
    }
}
