use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen) with mode-specific key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let hints = match app.mode {
        Mode::Navigate => {
            if app.show_key_hints {
                " a add  e edit  space done  d delete  f filter  s sort  ? help  q quit"
            } else {
                ""
            }
        }
        Mode::Insert => " Enter add  Esc back",
        Mode::Edit => " Enter save  Esc cancel",
    };

    let line = Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
