use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::form::{Field, Gender};
use crate::app::state::*;
use crate::app::validate;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Paste(text) => {
            // Single-line inputs drop line breaks from pasted text
            let multiline = state.focused_field() == Some(Field::Message);
            state.edit_focused(|buf| {
                for c in text.chars() {
                    if multiline || !matches!(c, '\r' | '\n') {
                        buf.insert_char(c);
                    }
                }
            });
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Validate the current form. On failure the message becomes the error
/// state; on success the error is cleared and the form is handed on.
/// Never quits and never resets the form.
pub fn on_submit(state: &mut AppState) -> Vec<Action> {
    tracing::debug!(form = ?state.form, "submit requested");
    state.dirty = true;
    match validate::validate(&state.form) {
        Err(e) => {
            tracing::debug!(error = %e, "validation failed");
            state.error = Some(e.to_string());
            vec![]
        }
        Ok(()) => {
            state.error = None;
            vec![Action::Submit {
                form: state.form.clone(),
            }]
        }
    }
}

/// Ctrl without Alt. AltGr characters arrive as Ctrl+Alt on Windows and
/// must be typed, not treated as shortcuts.
fn is_ctrl_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if is_ctrl_shortcut(&key) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('s') => return on_submit(state),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::Field(Field::Gender) => handle_gender_key(state, key),
        Focus::Field(field) => handle_text_key(state, field, key),
        Focus::Submit => handle_button_key(state, key),
    }
}

fn handle_button_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => on_submit(state),
        KeyCode::Up => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Down => {
            state.focus_next();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_gender_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left => state.cycle_gender(false),
        KeyCode::Right | KeyCode::Char(' ') => state.cycle_gender(true),
        KeyCode::Char('f') | KeyCode::Char('F') => state.select_gender(Gender::Female),
        KeyCode::Char('m') | KeyCode::Char('M') => state.select_gender(Gender::Male),
        KeyCode::Enter => return on_submit(state),
        KeyCode::Up => state.focus_prev(),
        KeyCode::Down => state.focus_next(),
        _ => {}
    }
    vec![]
}

fn handle_text_key(state: &mut AppState, field: Field, key: KeyEvent) -> Vec<Action> {
    let multiline = field == Field::Message;
    match key.code {
        KeyCode::Enter => {
            if multiline {
                state.edit_focused(|buf| buf.insert_char('\n'));
            } else {
                // Enter in a single-line input submits, like a browser form
                return on_submit(state);
            }
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.edit_focused(EditBuffer::delete_word_back);
            } else {
                state.edit_focused(EditBuffer::delete_back);
            }
        }
        KeyCode::Delete => state.edit_focused(EditBuffer::delete_forward),
        KeyCode::Left => state.editor.move_left(),
        KeyCode::Right => state.editor.move_right(),
        KeyCode::Home => state.editor.move_home(),
        KeyCode::End => state.editor.move_end(),
        KeyCode::Up if !multiline => state.focus_prev(),
        KeyCode::Down if !multiline => state.focus_next(),
        KeyCode::Char(c) => {
            if is_ctrl_shortcut(&key) {
                match c {
                    'a' => state.editor.move_home(),
                    'e' => state.editor.move_end(),
                    'w' => state.edit_focused(EditBuffer::delete_word_back),
                    'u' => state.edit_focused(EditBuffer::clear),
                    _ => {}
                }
            } else {
                state.edit_focused(|buf| buf.insert_char(c));
            }
        }
        _ => {}
    }
    vec![]
}
