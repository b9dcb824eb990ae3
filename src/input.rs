//! Single-line search field.
//!
//! The field stores its value as a string and its cursor as a grapheme index,
//! so combining marks and emoji sequences move and delete as one unit.
//!
//! ```rust
//! use listsearch::input::Model;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut field = Model::new();
//! field.focus();
//! for c in "red".chars() {
//!     field.update(&KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
//! }
//! assert_eq!(field.value(), "red");
//! assert_eq!(field.position(), 3);
//! ```

use crate::key::{new_binding, with_keys_str, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Editing keys understood by the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one grapheme right.
    pub character_forward: Binding,
    /// Move one grapheme left.
    pub character_backward: Binding,
    /// Delete the grapheme before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the grapheme under the cursor.
    pub delete_character_forward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Delete everything from the cursor on.
    pub delete_after_cursor: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
            character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
            delete_character_backward: new_binding(vec![with_keys_str(&[
                "backspace",
                "ctrl+h",
            ])]),
            delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
            delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
            delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
            delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
            line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
            line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        }
    }
}

/// The search field.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text rendered before the value.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the value.
    pub text_style: Style,
    /// Shown while the value is empty.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the cell under the cursor while focused.
    pub cursor_style: Style,
    /// Editing keys.
    pub key_map: KeyMap,
    /// Maximum length in graphemes. Zero means unlimited.
    pub char_limit: usize,

    value: String,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty, unfocused field with a `"> "` prompt.
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            key_map: KeyMap::default(),
            char_limit: 0,
            value: String::new(),
            pos: 0,
            focus: false,
        }
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = self.truncate(value.graphemes(true)).concat();
        self.pos = self.len();
    }

    /// Cursor position in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.len();
    }

    /// Gives the field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns `true` if the field has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn truncate<'a>(&self, graphemes: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        if self.char_limit == 0 {
            graphemes.collect()
        } else {
            graphemes.take(self.char_limit).collect()
        }
    }

    /// Replaces the value, keeping the cursor in range.
    fn replace(&mut self, value: String, pos: usize) {
        self.value = value;
        self.pos = pos.min(self.len());
    }

    fn insert(&mut self, text: &str) {
        let current: Vec<&str> = self.value.graphemes(true).collect();
        let mut inserted: Vec<&str> = text.graphemes(true).collect();
        if self.char_limit > 0 {
            let avail = self.char_limit.saturating_sub(current.len());
            if avail == 0 {
                return;
            }
            inserted.truncate(avail);
        }

        let mut next: Vec<&str> = current[..self.pos].to_vec();
        next.extend(inserted);
        let pos = next.len();
        next.extend_from_slice(&current[self.pos..]);
        self.replace(next.concat(), pos);
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        let current: Vec<&str> = self.value.graphemes(true).collect();
        let end = end.min(current.len());
        let start = start.min(end);
        let value = [&current[..start], &current[end..]].concat().concat();
        self.replace(value, start);
    }

    fn word_start_before_cursor(&self) -> usize {
        let current: Vec<&str> = self.value.graphemes(true).collect();
        let mut i = self.pos;
        while i > 0 && current[i - 1].trim().is_empty() {
            i -= 1;
        }
        while i > 0 && !current[i - 1].trim().is_empty() {
            i -= 1;
        }
        i
    }

    /// Applies a key press. Returns `true` if the value changed.
    ///
    /// Unfocused fields ignore all input.
    pub fn update(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }

        let before = self.value.clone();

        if self.key_map.delete_word_backward.matches(msg) {
            let start = self.word_start_before_cursor();
            self.delete_range(start, self.pos);
        } else if self.key_map.delete_character_backward.matches(msg) {
            if self.pos > 0 {
                self.delete_range(self.pos - 1, self.pos);
            }
        } else if self.key_map.delete_character_forward.matches(msg) {
            self.delete_range(self.pos, self.pos + 1);
        } else if self.key_map.delete_before_cursor.matches(msg) {
            self.delete_range(0, self.pos);
        } else if self.key_map.delete_after_cursor.matches(msg) {
            let len = self.len();
            self.delete_range(self.pos, len);
        } else if self.key_map.character_backward.matches(msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if self.key_map.character_forward.matches(msg) {
            self.set_cursor(self.pos + 1);
        } else if self.key_map.line_start.matches(msg) {
            self.cursor_start();
        } else if self.key_map.line_end.matches(msg) {
            self.cursor_end();
        } else if let KeyCode::Char(c) = msg.key {
            let held = msg.modifiers.difference(KeyModifiers::SHIFT);
            if held.is_empty() && !c.is_control() {
                self.insert(c.encode_utf8(&mut [0; 4]));
            }
        }

        self.value != before
    }

    /// Renders the prompt followed by the value, or the placeholder when empty.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            let mut graphemes = self.placeholder.graphemes(true);
            let first = graphemes.next().unwrap_or(" ");
            let rest: String = graphemes.collect();
            let cursor = if self.focus {
                self.cursor_style.render(first)
            } else {
                self.placeholder_style.render(first)
            };
            return format!("{prompt}{cursor}{}", self.placeholder_style.render(&rest));
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let before = graphemes[..self.pos].concat();
        let mut view = format!("{prompt}{}", self.text_style.render(&before));

        let under = graphemes.get(self.pos).copied().unwrap_or(" ");
        if self.focus {
            view.push_str(&self.cursor_style.render(under));
        } else if self.pos < graphemes.len() {
            view.push_str(&self.text_style.render(under));
        }

        if self.pos + 1 < graphemes.len() {
            let after = graphemes[self.pos + 1..].concat();
            view.push_str(&self.text_style.render(&after));
        }
        view
    }
}
