#![warn(missing_docs)]

//! # listsearch
//!
//! Show or hide list entries by search terms, with a search list component for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! Every entry exposes a label (the visible text of its first link) and a
//! prior visibility assigned before any search happens. A filter pass
//! uppercases the query, splits it on whitespace and then:
//!
//! - with no terms, shows the entries classified `Visible` and hides the rest
//! - otherwise, shows exactly the entries whose label contains every term
//!
//! ```rust
//! use listsearch::search::{filter, ListItem};
//!
//! let mut items = vec![
//!     ListItem::visible("Red Apple"),
//!     ListItem::hidden("Blue Apple"),
//!     ListItem::visible("Red Banana"),
//! ];
//!
//! filter("RED", &mut items);
//! let shown: Vec<_> = items.iter().filter(|i| i.is_shown()).map(|i| i.label()).collect();
//! assert_eq!(shown, ["Red Apple", "Red Banana"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`search`] | The filter pass, queries and list items |
//! | [`page`] | Binding a search to an input field and a list container looked up by id |
//! | [`searchlist`] | A bubbletea-rs component that re-filters on every keystroke |
//! | [`input`] | The single-line search field used by `searchlist` |
//! | [`key`] | Key bindings matched against `KeyMsg` |
//!
//! ## Logging
//!
//! Filter passes and failed lookups are reported through [`tracing`]. The
//! crate never installs a subscriber.

pub mod error;
pub mod input;
pub mod key;
pub mod page;
pub mod search;
pub mod searchlist;

pub use error::{Error, Result};

/// Commonly used types.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::page::{ListSearch, Page};
    pub use crate::search::{filter, DisplayState, FilterOutcome, ListItem, Query, Visibility};
    pub use crate::searchlist::{Model as SearchList, SelectedMsg};
}
