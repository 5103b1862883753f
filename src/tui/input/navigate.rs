use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::SortMode;
use crate::ops::list_ops;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.displayed_len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.displayed_len().saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                list_ops::toggle_completed(&mut app.tasks, id);
                // the row may have just left a filtered view
                app.clamp_cursor();
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_id() {
                list_ops::delete_task(&mut app.tasks, id);
                app.clamp_cursor();
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Insert,
        KeyCode::Char('e') | KeyCode::Enter => {
            // long-press equivalent: begin editing the selected task
            if let Some(id) = app.selected_id()
                && list_ops::begin_edit(&mut app.tasks, id)
            {
                app.mode = Mode::Edit;
            }
        }
        KeyCode::Char('f') => {
            list_ops::toggle_show_completed(&mut app.tasks);
            app.clamp_cursor();
        }
        KeyCode::Char('s') => list_ops::set_sort_mode(&mut app.tasks, SortMode::ByName),
        _ => {}
    }
}
