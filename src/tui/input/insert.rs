use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::list_ops;
use crate::tui::app::{App, Mode};

use super::common::handle_buffer_key;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        // Back to navigate; the pending buffer only clears on an add
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            if let Some(id) = list_ops::commit_pending(&mut app.tasks) {
                app.select_task(id);
            }
        }
        _ => {
            handle_buffer_key(&mut app.tasks.pending, key);
        }
    }
}
