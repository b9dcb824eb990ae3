//! Entry types the filter operates on.
//!
//! A [`ListItem`] carries three things:
//! - the links it embeds, whose first entry provides the label matched against the query
//! - its prior [`Visibility`], assigned by the caller and never changed by filtering
//! - its current [`DisplayState`], rewritten by every filter pass

/// Baseline visibility of an item, assigned before any filtering happens.
///
/// Only consulted when the query has no terms: `Visible` items are shown and
/// everything else is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Shown whenever the query is empty.
    Visible,
    /// Hidden whenever the query is empty.
    Hidden,
    /// Carries neither classification. Treated like `Hidden` for an empty query.
    Unclassified,
}

/// Presentation flag written by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// The item is rendered.
    Shown,
    /// The item is not rendered.
    NotShown,
}

impl DisplayState {
    /// Returns `true` for [`DisplayState::Shown`].
    pub fn is_shown(self) -> bool {
        self == DisplayState::Shown
    }
}

impl From<bool> for DisplayState {
    fn from(shown: bool) -> Self {
        if shown {
            DisplayState::Shown
        } else {
            DisplayState::NotShown
        }
    }
}

impl Visibility {
    /// Display state an item gets when the query has no terms.
    pub fn baseline(self) -> DisplayState {
        match self {
            Visibility::Visible => DisplayState::Shown,
            Visibility::Hidden | Visibility::Unclassified => DisplayState::NotShown,
        }
    }
}

/// A link embedded in a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Text of the link as supplied, possibly carrying terminal styling.
    pub text: String,
    /// Link target, if any.
    pub href: Option<String>,
}

impl Link {
    /// Creates a link with text and no target.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }

    /// Sets the link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// The text a reader actually sees, with escape sequences removed.
    pub fn visible_text(&self) -> String {
        let stripped = strip_ansi_escapes::strip(self.text.as_bytes());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

/// An entry in a filterable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    links: Vec<Link>,
    label: String,
    visibility: Visibility,
    display: DisplayState,
}

impl ListItem {
    /// Creates an item whose only link has the given text.
    ///
    /// The display state starts out as the classification's baseline.
    ///
    /// ```
    /// use listsearch::search::{DisplayState, ListItem, Visibility};
    ///
    /// let item = ListItem::new("Red Apple", Visibility::Visible);
    /// assert_eq!(item.label(), "Red Apple");
    /// assert_eq!(item.display(), DisplayState::Shown);
    /// ```
    pub fn new(label: impl Into<String>, visibility: Visibility) -> Self {
        Self::with_links(vec![Link::new(label)], visibility)
    }

    /// Creates an item from its links. Only the first link provides the label;
    /// an item without links has an empty label.
    pub fn with_links(links: Vec<Link>, visibility: Visibility) -> Self {
        let label = links.first().map(Link::visible_text).unwrap_or_default();
        Self {
            links,
            label,
            visibility,
            display: visibility.baseline(),
        }
    }

    /// Shorthand for a [`Visibility::Visible`] item.
    pub fn visible(label: impl Into<String>) -> Self {
        Self::new(label, Visibility::Visible)
    }

    /// Shorthand for a [`Visibility::Hidden`] item.
    pub fn hidden(label: impl Into<String>) -> Self {
        Self::new(label, Visibility::Hidden)
    }

    /// Visible text of the first link.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Links embedded in this item, in order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Prior visibility classification.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Current display state.
    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Returns `true` if the item is currently shown.
    pub fn is_shown(&self) -> bool {
        self.display.is_shown()
    }

    pub(crate) fn set_display(&mut self, display: DisplayState) {
        self.display = display;
    }
}
