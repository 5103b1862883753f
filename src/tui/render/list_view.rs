use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::TaskId;
use crate::ops::list_ops;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{buffer_spans, checkbox, spans_width};

/// Width of the created-time column ("HH:MM")
const TIME_COLS: usize = 5;

struct Row {
    id: TaskId,
    text: String,
    completed: bool,
    time: String,
}

/// Render the task list with cursor highlight and scrolling
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let rows: Vec<Row> = list_ops::display_rows(&app.tasks)
        .iter()
        .map(|t| Row {
            id: t.id,
            text: t.text.clone(),
            completed: t.completed,
            time: t.created.format("%H:%M").to_string(),
        })
        .collect();

    app.clamp_cursor();
    app.ensure_cursor_visible(area.height as usize);

    if rows.is_empty() {
        let message = if app.tasks.is_empty() {
            "no tasks \u{2014} press a to add one"
        } else {
            "everything here is done \u{2014} f shows completed tasks"
        };
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let show_time = width >= 48;
    let end = (app.scroll_offset + area.height as usize).min(rows.len());
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in rows[app.scroll_offset..end].iter().enumerate() {
        let selected = app.scroll_offset + i == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let fill = Style::default().bg(row_bg);

        let marker = if selected { "\u{258C}" } else { " " };
        let box_color = if row.completed {
            app.theme.done
        } else {
            app.theme.highlight
        };
        let mut text_style = Style::default()
            .fg(if row.completed {
                app.theme.done
            } else if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        if row.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }

        // marker + space + checkbox + space
        let mut avail = width.saturating_sub(6);
        if show_time {
            avail = avail.saturating_sub(TIME_COLS + 2);
        }

        let mut spans = vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(app.theme.selection_border).bg(row_bg),
            ),
            Span::styled(" ".to_string(), fill),
            Span::styled(
                checkbox(row.completed).to_string(),
                Style::default().fg(box_color).bg(row_bg),
            ),
            Span::styled(" ".to_string(), fill),
        ];

        let editing_this =
            app.mode == Mode::Edit && app.tasks.editing().map(|e| e.target) == Some(row.id);
        if editing_this {
            // the row becomes the editor while its text is being changed
            let draft = app.tasks.editing().map(|e| e.draft.clone()).unwrap_or_default();
            spans.extend(buffer_spans(
                &draft,
                avail,
                Style::default().fg(app.theme.text_bright).bg(row_bg),
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(
                unicode::truncate_to_width(&row.text, avail),
                text_style,
            ));
        }

        let used = spans_width(&spans);
        if show_time {
            let target = width.saturating_sub(TIME_COLS + 1);
            if used < target {
                spans.push(Span::styled(" ".repeat(target - used), fill));
            }
            spans.push(Span::styled(
                row.time.clone(),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
            spans.push(Span::styled(" ".to_string(), fill));
        } else if used < width {
            spans.push(Span::styled(" ".repeat(width - used), fill));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
