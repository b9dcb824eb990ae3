//! The filter pass.

use super::query::Query;
use super::types::{DisplayState, ListItem};

/// Summary of one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// The parsed query the pass ran with.
    pub query: Query,
    /// Number of items left shown.
    pub shown: usize,
    /// Number of items left not shown.
    pub not_shown: usize,
}

impl FilterOutcome {
    /// Total number of items the pass visited.
    pub fn total(&self) -> usize {
        self.shown + self.not_shown
    }
}

impl ListItem {
    /// Display state this item gets under `query`.
    ///
    /// With no terms the prior classification decides. Otherwise the item is
    /// shown iff its label contains every term, whatever its classification.
    pub fn matches(&self, query: &Query) -> DisplayState {
        if query.is_empty() {
            self.visibility().baseline()
        } else {
            DisplayState::from(query.matches(self.label()))
        }
    }
}

/// Sets the display state of every item in `items` according to `query`.
///
/// Items are never reordered and their classification is left untouched, so
/// running the same query twice yields the same display states.
///
/// ```
/// use listsearch::search::{filter, ListItem};
///
/// let mut items = vec![
///     ListItem::visible("Red Apple"),
///     ListItem::hidden("Blue Apple"),
///     ListItem::visible("Red Banana"),
/// ];
///
/// filter("red apple", &mut items);
/// let shown: Vec<_> = items.iter().map(|i| i.is_shown()).collect();
/// assert_eq!(shown, [true, false, false]);
///
/// filter("", &mut items);
/// let shown: Vec<_> = items.iter().map(|i| i.is_shown()).collect();
/// assert_eq!(shown, [true, false, true]);
/// ```
pub fn filter(query: &str, items: &mut [ListItem]) -> FilterOutcome {
    filter_with(Query::from(query), items)
}

/// Like [`filter`], for a query that is already parsed.
pub fn filter_with(query: Query, items: &mut [ListItem]) -> FilterOutcome {
    let mut shown = 0;
    for item in items.iter_mut() {
        let display = item.matches(&query);
        if display.is_shown() {
            shown += 1;
        }
        item.set_display(display);
    }

    let not_shown = items.len() - shown;
    tracing::debug!(
        terms = ?query.terms(),
        shown,
        not_shown,
        "filtered list"
    );

    FilterOutcome {
        query,
        shown,
        not_shown,
    }
}
