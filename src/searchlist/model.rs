//! State and navigation for the search list.

use super::keys::SearchKeyMap;
use super::style::ListStyles;
use crate::input;
use crate::search::{self, FilterOutcome, ListItem};

/// Message sent when the user selects an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMsg {
    /// Index of the selected item in the full item sequence.
    pub index: usize,
}

/// A search field bound to a list of items.
///
/// Every edit of the field re-runs the filter over all items. The cursor and
/// viewport are positions within the shown items only.
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) items: Vec<ListItem>,
    pub(super) input: input::Model,
    pub(super) outcome: FilterOutcome,
    pub(super) cursor: usize,
    pub(super) viewport_start: usize,
    pub(super) height: usize,
    pub(super) width: usize,
    pub(super) title: String,
    pub(super) item_singular: String,
    pub(super) item_plural: String,
    pub(super) selected: Option<usize>,

    /// Styles used by `view`.
    pub styles: ListStyles,
    /// Key bindings.
    pub keymap: SearchKeyMap,
}

impl Model {
    /// Creates a search list over `items` with an empty, focused query.
    ///
    /// ```
    /// use listsearch::searchlist::Model;
    /// use listsearch::search::ListItem;
    ///
    /// let list = Model::new(vec![
    ///     ListItem::visible("Red Apple"),
    ///     ListItem::hidden("Blue Apple"),
    /// ]);
    /// assert_eq!(list.shown_items().count(), 1);
    /// assert_eq!(list.query(), "");
    /// ```
    pub fn new(items: Vec<ListItem>) -> Self {
        let styles = ListStyles::default();
        let mut input = input::Model::new();
        input.prompt_style = styles.prompt.clone();
        input.focus();

        let mut model = Self {
            items,
            input,
            outcome: FilterOutcome::default(),
            cursor: 0,
            viewport_start: 0,
            height: 10,
            width: 0,
            title: String::new(),
            item_singular: "item".to_string(),
            item_plural: "items".to_string(),
            selected: None,
            styles,
            keymap: SearchKeyMap::default(),
        };
        model.refilter();
        model
    }

    /// Sets the title rendered above the search field.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the placeholder shown while the query is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    /// Sets the nouns used by the status line.
    pub fn with_item_names(
        mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.item_singular = singular.into();
        self.item_plural = plural.into();
        self
    }

    /// Sets how many item rows are rendered at once. At least one row is kept.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self.sync_viewport();
        self
    }

    /// Sets the width labels are truncated to. Zero disables truncation.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.input.prompt_style = styles.prompt.clone();
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: SearchKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// All items in their original order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Shown items with their indices in the full sequence.
    pub fn shown_items(&self) -> impl Iterator<Item = (usize, &ListItem)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_shown())
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Replaces the query and re-runs the filter.
    pub fn set_query(&mut self, query: &str) {
        self.input.set_value(query);
        self.refilter();
    }

    /// Clears the query, restoring every item's baseline visibility.
    pub fn clear_query(&mut self) {
        self.input.reset();
        self.refilter();
    }

    /// Result of the latest filter pass.
    pub fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// The search field.
    pub fn input(&self) -> &input::Model {
        &self.input
    }

    /// Cursor position among the shown items.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index, in the full sequence, of the shown item under the cursor.
    pub fn cursor_index(&self) -> Option<usize> {
        self.shown_items().nth(self.cursor).map(|(index, _)| index)
    }

    /// Index of the most recently selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The most recently selected item.
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Re-runs the filter with the current query.
    pub(super) fn refilter(&mut self) {
        self.outcome = search::filter(self.input.value(), &mut self.items);
        self.cursor = self.cursor.min(self.outcome.shown.saturating_sub(1));
        self.sync_viewport();
    }

    pub(super) fn move_cursor_up(&mut self, by: usize) {
        self.cursor = self.cursor.saturating_sub(by);
        self.sync_viewport();
    }

    pub(super) fn move_cursor_down(&mut self, by: usize) {
        let last = self.outcome.shown.saturating_sub(1);
        self.cursor = (self.cursor + by).min(last);
        self.sync_viewport();
    }

    /// Marks the item under the cursor as selected.
    pub(super) fn select(&mut self) -> Option<usize> {
        self.selected = self.cursor_index();
        self.selected
    }

    /// Scrolls the viewport so the cursor stays visible.
    pub(super) fn sync_viewport(&mut self) {
        if self.cursor < self.viewport_start {
            self.viewport_start = self.cursor;
        } else if self.cursor >= self.viewport_start + self.height {
            self.viewport_start = self.cursor + 1 - self.height;
        }

        let max_start = self.outcome.shown.saturating_sub(self.height);
        self.viewport_start = self.viewport_start.min(max_start);
    }
}
