use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::buffer_spans;

/// Render the pending-input row. Focused in Insert mode; otherwise shows
/// the retained buffer dimmed, or a short hint when there is nothing.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Insert => {
            let mut spans = vec![Span::styled(
                " \u{203A} ".to_string(),
                Style::default().fg(app.theme.highlight).bg(bg),
            )];
            spans.extend(buffer_spans(
                &app.tasks.pending,
                width.saturating_sub(3),
                Style::default().fg(app.theme.text_bright).bg(bg),
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            Line::from(spans)
        }
        _ if !app.tasks.pending.is_empty() => Line::from(vec![
            Span::styled(
                " \u{203A} ".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(
                unicode::truncate_to_width(app.tasks.pending.text(), width.saturating_sub(3)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]),
        _ => Line::from(Span::styled(
            " \u{203A} a to add".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
