use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::list_ops;
use crate::tui::app::{App, Mode};

use super::common::handle_buffer_key;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    // Edit state only vanishes out from under us if the task was deleted
    if app.tasks.editing().is_none() {
        app.mode = Mode::Navigate;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            list_ops::cancel_edit(&mut app.tasks);
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            if let Some(id) = list_ops::commit_edit(&mut app.tasks) {
                app.select_task(id);
            }
            app.mode = Mode::Navigate;
        }
        _ => {
            if let Some(editing) = app.tasks.editing_mut() {
                handle_buffer_key(&mut editing.draft, key);
            }
        }
    }
}
