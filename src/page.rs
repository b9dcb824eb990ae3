//! Binding a search to named elements.
//!
//! A [`Page`] registers elements under string ids: input fields holding a
//! query and list containers holding [`ListItem`]s. A [`ListSearch`] names one
//! of each and, on every [`run`](ListSearch::run), reads the query and the
//! items afresh and filters them.
//!
//! ```
//! use listsearch::page::{ListSearch, Page};
//! use listsearch::search::ListItem;
//!
//! let mut page = Page::new()
//!     .with_input("filter", "red")
//!     .with_list(
//!         "list-to-search",
//!         vec![ListItem::visible("Red Apple"), ListItem::visible("Green Pear")],
//!     );
//!
//! let outcome = ListSearch::default().run(&mut page)?;
//! assert_eq!(outcome.shown, 1);
//! # Ok::<(), listsearch::Error>(())
//! ```

use std::collections::HashMap;

use crate::error::{ElementKind, Error, Result};
use crate::search::{self, FilterOutcome, ListItem};

/// Default id of the query field.
pub const DEFAULT_INPUT_ID: &str = "filter";

/// Default id of the list container.
pub const DEFAULT_LIST_ID: &str = "list-to-search";

/// An element registered on a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A text field and its current value.
    InputField(String),
    /// A container of list entries.
    ListContainer(Vec<ListItem>),
}

impl Element {
    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::InputField(_) => ElementKind::InputField,
            Element::ListContainer(_) => ElementKind::ListContainer,
        }
    }
}

/// Elements addressable by id.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an input field with an initial value.
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(id, Element::InputField(value.into()));
        self
    }

    /// Registers a list container.
    pub fn with_list(mut self, id: impl Into<String>, items: Vec<ListItem>) -> Self {
        self.insert(id, Element::ListContainer(items));
        self
    }

    /// Registers `element` under `id`, returning whatever was there before.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) -> Option<Element> {
        self.elements.insert(id.into(), element)
    }

    /// Removes the element registered under `id`.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    /// Looks up any element by id.
    pub fn element(&self, id: &str) -> Result<&Element> {
        tracing::trace!(id, "looking up element");
        self.elements.get(id).ok_or_else(|| not_found(id))
    }

    /// Current value of the input field `id`.
    pub fn input_value(&self, id: &str) -> Result<&str> {
        match self.element(id)? {
            Element::InputField(value) => Ok(value.as_str()),
            other => Err(unexpected(id, ElementKind::InputField, other)),
        }
    }

    /// Replaces the value of the input field `id`.
    pub fn set_input_value(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        match self.elements.get_mut(id) {
            Some(Element::InputField(current)) => {
                *current = value.into();
                Ok(())
            }
            Some(other) => Err(unexpected(id, ElementKind::InputField, other)),
            None => Err(not_found(id)),
        }
    }

    /// Entries of the list container `id`.
    pub fn items(&self, id: &str) -> Result<&[ListItem]> {
        match self.element(id)? {
            Element::ListContainer(items) => Ok(items.as_slice()),
            other => Err(unexpected(id, ElementKind::ListContainer, other)),
        }
    }

    /// Mutable entries of the list container `id`.
    pub fn items_mut(&mut self, id: &str) -> Result<&mut [ListItem]> {
        match self.elements.get_mut(id) {
            Some(Element::ListContainer(items)) => Ok(items.as_mut_slice()),
            Some(other) => Err(unexpected(id, ElementKind::ListContainer, other)),
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: &str) -> Error {
    tracing::warn!(id, "element not found");
    Error::ElementNotFound { id: id.to_string() }
}

fn unexpected(id: &str, expected: ElementKind, found: &Element) -> Error {
    let found = found.kind();
    tracing::warn!(id, %expected, %found, "element has the wrong kind");
    Error::UnexpectedElement {
        id: id.to_string(),
        expected,
        found,
    }
}

/// A search bound to one input field and one list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSearch {
    input_id: String,
    list_id: String,
}

impl Default for ListSearch {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_string(),
            list_id: DEFAULT_LIST_ID.to_string(),
        }
    }
}

impl ListSearch {
    /// Creates a search bound to the default ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the query from a different input field.
    pub fn with_input_id(mut self, id: impl Into<String>) -> Self {
        self.input_id = id.into();
        self
    }

    /// Filters a different list container.
    pub fn with_list_id(mut self, id: impl Into<String>) -> Self {
        self.list_id = id.into();
        self
    }

    /// Id of the query field.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// Id of the list container.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Filters the list container with the current value of the input field.
    ///
    /// Both elements are looked up on every call. If either is missing, or is
    /// not the expected kind, an error is returned and no item is modified.
    pub fn run(&self, page: &mut Page) -> Result<FilterOutcome> {
        let query = search::Query::from(page.input_value(&self.input_id)?);
        let items = page.items_mut(&self.list_id)?;
        Ok(search::filter_with(query, items))
    }
}
