//! Term filtering over list items.
//!
//! Each item exposes a label (the visible text of its first link) and a prior
//! [`Visibility`]. A filter pass uppercases the query, splits it into
//! whitespace-separated terms and rewrites every item's [`DisplayState`]:
//!
//! - no terms: items classified `Visible` are shown, all others are hidden
//! - otherwise: an item is shown iff its uppercased label contains every term
//!
//! Matching is plain substring containment, so `cat` matches `concatenate`.
//! Filtering never reorders items.

mod filtering;
mod query;
mod types;

pub use filtering::{filter, filter_with, FilterOutcome};
pub use query::Query;
pub use types::{DisplayState, Link, ListItem, Visibility};

#[cfg(test)]
mod tests;
