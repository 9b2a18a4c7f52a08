use crate::app::form::{Field, FormState, Gender};
use crate::config::AppConfig;

/// Cursor-tracked copy of the focused text field. Every edit produces the
/// field's full new value, which is fed back through `on_field_change`.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a field value with the cursor at its end.
    pub fn load(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && matches!(self.text.as_bytes().get(pos - 1), Some(b' ' | b'\n')) {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && !matches!(self.text.as_bytes().get(pos - 1), Some(b' ' | b'\n')) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Email),
        Focus::Field(Field::Gender),
        Focus::Field(Field::Message),
        Focus::Submit,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Focus {
        let idx = self.index();
        if idx == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[idx - 1]
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormState,
    /// Current validation diagnostic; `None` is the empty error state.
    pub error: Option<String>,
    pub focus: Focus,
    pub editor: EditBuffer,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub submissions: usize,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            form: FormState::new(),
            error: None,
            focus: Focus::Field(Field::Name),
            editor: EditBuffer::new(),
            should_quit: false,
            dirty: true,
            status_message: None,
            submissions: 0,
        }
    }

    /// Replace exactly one field value. Does not touch the error state.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        self.form = self.form.with_field(field, value);
        if self.focus == Focus::Field(field) && field.is_text() && self.editor.text != self.form.get(field) {
            self.editor.load(self.form.get(field));
        }
        self.dirty = true;
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Field(field) if field.is_text() => self.editor.load(self.form.get(field)),
            _ => self.editor.clear(),
        }
        self.dirty = true;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Apply an edit to the focused text field and publish the result.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut EditBuffer)) {
        let Some(field) = self.focused_field().filter(|f| f.is_text()) else {
            return;
        };
        edit(&mut self.editor);
        let value = self.editor.text.clone();
        self.on_field_change(field, value);
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.on_field_change(Field::Gender, gender.value().to_string());
    }

    /// Move the gender selection one option left or right. With nothing
    /// selected yet, the first press picks the option on that side.
    pub fn cycle_gender(&mut self, forward: bool) {
        let options = Gender::OPTIONS;
        let next = match self.form.selected_gender() {
            Some(current) => {
                let idx = options.iter().position(|g| *g == current).unwrap_or(0);
                if forward {
                    options[(idx + 1) % options.len()]
                } else {
                    options[(idx + options.len() - 1) % options.len()]
                }
            }
            None if forward => options[options.len() - 1],
            None => options[0],
        };
        self.select_gender(next);
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let filled = Field::ALL
            .iter()
            .filter(|f| !self.form.get(**f).is_empty())
            .count();
        let mut s = format!("Fields: {}/{}", filled, Field::ALL.len());
        if self.submissions > 0 {
            s.push_str(&format!(" | Sent: {}", self.submissions));
        }
        s
    }
}
