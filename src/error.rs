//! Error type for page lookups.

use std::fmt;

/// The kind of element registered under an id on a [`Page`](crate::page::Page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A text field holding the query.
    InputField,
    /// A container holding the list entries.
    ListContainer,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::InputField => f.write_str("input field"),
            ElementKind::ListContainer => f.write_str("list container"),
        }
    }
}

/// Errors raised when a search cannot be bound to its elements.
///
/// Both variants are integration errors: the page does not contain what the
/// [`ListSearch`](crate::page::ListSearch) was configured to look for. They are
/// reported before any entry is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Nothing is registered under `id`.
    #[error("no element with id `{id}`")]
    ElementNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Something is registered under `id`, but not the expected kind of element.
    #[error("element `{id}` is not a {expected} (found {found})")]
    UnexpectedElement {
        /// The id that was looked up.
        id: String,
        /// The kind the caller needed.
        expected: ElementKind,
        /// The kind actually registered.
        found: ElementKind,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
