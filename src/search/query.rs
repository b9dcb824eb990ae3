//! Query parsing.

/// A parsed search query.
///
/// The raw text is uppercased and split on whitespace; empty pieces are
/// dropped, so `"  red   apple "` yields the terms `RED` and `APPLE`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    terms: Vec<String>,
}

impl<T: AsRef<str>> From<T> for Query {
    fn from(query: T) -> Self {
        let normalized = query.as_ref().to_uppercase();
        let terms = normalized
            .split_whitespace()
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();
        Self { terms }
    }
}

impl Query {
    /// Parses `query` into uppercase terms.
    ///
    /// ```
    /// use listsearch::search::Query;
    ///
    /// let query = Query::parse("Red  apple");
    /// assert_eq!(query.terms(), ["RED", "APPLE"]);
    /// assert!(Query::parse("   ").is_empty());
    /// ```
    pub fn parse(query: &str) -> Self {
        Self::from(query)
    }

    /// The uppercase terms, in query order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns `true` when the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns `true` if the uppercased `label` contains every term.
    ///
    /// An empty query matches every label.
    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_uppercase();
        self.terms.iter().all(|term| label.contains(term.as_str()))
    }
}
