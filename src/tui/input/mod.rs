mod common;
mod edit;
mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use edit::handle_edit;
use insert::handle_insert;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event. Only meaningful while a buffer is
/// focused; newlines collapse to spaces since tasks are single-line.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    let text = text.replace(['\r', '\n'], " ");
    match app.mode {
        Mode::Insert => app.tasks.pending.insert_str(&text),
        Mode::Edit => {
            if let Some(editing) = app.tasks.editing_mut() {
                editing.draft.insert_str(&text);
            }
        }
        Mode::Navigate => {}
    }
}
