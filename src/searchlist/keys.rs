//! Key bindings for the search list.
//!
//! Printable characters always go to the search field, so navigation uses
//! arrow keys and control chords only:
//!
//! - **Cursor Movement**: `↑/ctrl+p` (up), `↓/ctrl+n` (down)
//! - **Page Navigation**: `pgup`, `pgdown`
//! - **Selection**: `enter`
//! - **Clearing**: `esc` clears the query, restoring every item's baseline visibility
//! - **Quit**: `ctrl+c`

use crate::key::{self, new_binding, with_keys_str};
use crossterm::event::KeyCode;
use once_cell::sync::Lazy;

static DEFAULT_KEYMAP: Lazy<SearchKeyMap> = Lazy::new(|| SearchKeyMap {
    cursor_up: new_binding(vec![with_keys_str(&["up", "ctrl+p"])]).with_help("↑", "up"),
    cursor_down: new_binding(vec![with_keys_str(&["down", "ctrl+n"])]).with_help("↓", "down"),
    prev_page: key::Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
    next_page: key::Binding::new(vec![KeyCode::PageDown]).with_help("pgdown", "next page"),
    select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
    clear_query: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear"),
    quit: new_binding(vec![with_keys_str(&["ctrl+c"])]).with_help("ctrl+c", "quit"),
});

/// Bindings used by [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct SearchKeyMap {
    /// Move the cursor to the previous shown item.
    pub cursor_up: key::Binding,
    /// Move the cursor to the next shown item.
    pub cursor_down: key::Binding,
    /// Move the cursor up by one page.
    pub prev_page: key::Binding,
    /// Move the cursor down by one page.
    pub next_page: key::Binding,
    /// Select the item under the cursor.
    pub select: key::Binding,
    /// Clear the query.
    pub clear_query: key::Binding,
    /// Quit the program.
    pub quit: key::Binding,
}

impl Default for SearchKeyMap {
    fn default() -> Self {
        DEFAULT_KEYMAP.clone()
    }
}

impl key::KeyMap for SearchKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.select,
            &self.clear_query,
            &self.quit,
        ]
    }
}
