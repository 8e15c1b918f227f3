use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// A single-line editable field with a character limit.
///
/// The caret is a byte offset into `value` and always sits on a grapheme
/// boundary. Keys are ignored unless the field is focused.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    caret: usize,
    focused: bool,
    char_limit: usize,
    placeholder: &'static str,
}

impl TextInput {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        TextInput {
            value: String::new(),
            caret: 0,
            focused: false,
            char_limit,
            placeholder,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the contents (flattened to one line, clipped to the limit) and
    /// put the caret at the end
    pub fn set_value(&mut self, text: &str) {
        let flat = unicode::flatten_line(text);
        self.value = unicode::truncate_chars(&flat, self.char_limit).to_string();
        self.caret = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = 0;
    }

    fn remaining(&self) -> usize {
        self.char_limit
            .saturating_sub(unicode::char_len(&self.value))
    }

    /// Insert text at the caret. Newlines become spaces; anything past the
    /// limit is dropped. Returns true if the value changed.
    pub fn insert_str(&mut self, text: &str) -> bool {
        if !self.focused {
            return false;
        }
        let clean = unicode::flatten_line(text);
        let fitted = unicode::truncate_chars(&clean, self.remaining());
        if fitted.is_empty() {
            return false;
        }
        self.value.insert_str(self.caret, fitted);
        self.caret += fitted.len();
        true
    }

    fn insert_char(&mut self, c: char) {
        if self.remaining() == 0 {
            return;
        }
        self.value.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    fn delete_back(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.caret) {
            self.value.drain(prev..self.caret);
            self.caret = prev;
        }
    }

    fn delete_forward(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.caret) {
            self.value.drain(self.caret..next);
        }
    }

    fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.value, self.caret);
        self.value.drain(start..self.caret);
        self.caret = start;
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        let m = key.modifiers;
        match key.code {
            // Home / End and readline equivalents
            KeyCode::Home => self.caret = 0,
            KeyCode::End => self.caret = self.value.len(),
            KeyCode::Char('a') if m.contains(KeyModifiers::CONTROL) => self.caret = 0,
            KeyCode::Char('e') if m.contains(KeyModifiers::CONTROL) => {
                self.caret = self.value.len();
            }
            // Kill to start / end of line
            KeyCode::Char('u') if m.contains(KeyModifiers::CONTROL) => {
                self.value.drain(..self.caret);
                self.caret = 0;
            }
            KeyCode::Char('k') if m.contains(KeyModifiers::CONTROL) => {
                self.value.truncate(self.caret);
            }
            KeyCode::Char('w') if m.contains(KeyModifiers::CONTROL) => self.delete_word_back(),
            // Word movement: Alt+arrow, or Alt+B / Alt+F as some terminals send
            KeyCode::Left if m.contains(KeyModifiers::ALT) => {
                self.caret = unicode::word_boundary_left(&self.value, self.caret);
            }
            KeyCode::Right if m.contains(KeyModifiers::ALT) => {
                self.caret = unicode::word_boundary_right(&self.value, self.caret);
            }
            KeyCode::Char('b') if m.contains(KeyModifiers::ALT) => {
                self.caret = unicode::word_boundary_left(&self.value, self.caret);
            }
            KeyCode::Char('f') if m.contains(KeyModifiers::ALT) => {
                self.caret = unicode::word_boundary_right(&self.value, self.caret);
            }
            KeyCode::Left => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.caret) {
                    self.caret = prev;
                }
            }
            KeyCode::Right => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.caret) {
                    self.caret = next;
                }
            }
            KeyCode::Backspace
                if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
            {
                self.delete_word_back();
            }
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Char(c)
                if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
            {
                self.insert_char(c);
            }
            _ => return false,
        }
        true
    }
}
