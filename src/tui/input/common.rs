use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::input::InputBuffer;

/// Apply a line-editing key to a buffer. Returns false for keys that are
/// not editing keys so the caller can handle them.
pub(super) fn handle_buffer_key(buf: &mut InputBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('w') if ctrl => buf.delete_word_back(),
        KeyCode::Char('a') if ctrl => buf.move_home(),
        KeyCode::Char('e') if ctrl => buf.move_end(),
        KeyCode::Char(c) if !ctrl && !alt => buf.insert_char(c),
        KeyCode::Backspace if ctrl || alt => buf.delete_word_back(),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete_forward(),
        KeyCode::Left if ctrl || alt => buf.move_word_left(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right if ctrl || alt => buf.move_word_right(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_home(),
        KeyCode::End => buf.move_end(),
        _ => return false,
    }
    true
}
