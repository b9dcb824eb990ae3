//! A search field bound to a filterable list.
//!
//! [`Model`] owns a [`crate::input::Model`] and a sequence of
//! [`ListItem`](crate::search::ListItem)s. Each key message that edits the
//! field re-runs [`crate::search::filter`] over every item, so the list always
//! reflects the current query. Navigation keys move a cursor over the shown
//! items, and `enter` selects the item under it.
//!
//! ## Example
//!
//! ```rust
//! use listsearch::searchlist::Model;
//! use listsearch::search::ListItem;
//! use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut list = Model::new(vec![
//!     ListItem::visible("Red Apple"),
//!     ListItem::visible("Green Pear"),
//! ]);
//!
//! list.update(Box::new(KeyMsg {
//!     key: KeyCode::Char('p'),
//!     modifiers: KeyModifiers::NONE,
//! }) as Msg);
//!
//! let labels: Vec<_> = list.shown_items().map(|(_, item)| item.label()).collect();
//! assert_eq!(labels, ["Red Apple", "Green Pear"]);
//!
//! list.set_query("pear");
//! assert_eq!(list.shown_items().count(), 1);
//! ```

pub mod keys;
pub mod style;

mod model;
mod rendering;

pub use keys::SearchKeyMap;
pub use model::{Model, SelectedMsg};
pub use style::ListStyles;

use crate::key::{self, KeyMap as _};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::time::Duration;

impl key::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }
}

impl Model {
    /// Handles a single key press.
    ///
    /// Quit, navigation, selection and clearing are checked first; any other
    /// key goes to the search field, and the list is re-filtered if the field
    /// changed.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.move_cursor_up(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.move_cursor_down(1);
        } else if self.keymap.prev_page.matches(key_msg) {
            self.move_cursor_up(self.height);
        } else if self.keymap.next_page.matches(key_msg) {
            self.move_cursor_down(self.height);
        } else if self.keymap.select.matches(key_msg) {
            let index = self.select()?;
            tracing::debug!(index, "selected item");
            return Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(SelectedMsg { index }) as Msg
            }));
        } else if self.keymap.clear_query.matches(key_msg) {
            if !self.query().is_empty() {
                self.clear_query();
            }
        } else if self.input.update(key_msg) {
            self.refilter();
        }
        None
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    fn view(&self) -> String {
        [self.view_header(), self.view_items(), self.view_footer()].join("\n")
    }
}

#[cfg(test)]
mod tests;
