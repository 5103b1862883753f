use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::SortMode;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

/// Render the header row: app name, counts, active view badges
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(
            " jot ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} open \u{B7} {} done",
                app.tasks.open_count(),
                app.tasks.done_count()
            ),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    let mut badges: Vec<&str> = Vec::new();
    if app.tasks.sort_mode() == SortMode::ByName {
        badges.push("sorted by name");
    }
    if !app.tasks.show_completed() {
        badges.push("done hidden");
    }
    if !badges.is_empty() {
        let right = format!("{} ", badges.join("  "));
        let left_width = spans_width(&spans);
        let right_width = unicode::display_width(&right);
        if left_width + right_width < width {
            spans.push(Span::styled(
                " ".repeat(width - left_width - right_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                right,
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
