//! Product search input.

use serde::{Deserialize, Serialize};

/// The single input of a product search.
///
/// `name` is handed to Shopify verbatim as its product search query, so
/// Shopify's search syntax applies (e.g., `title:shirt`, `tag:sale`). An empty
/// name is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text product name or Shopify search expression.
    pub name: String,
}

impl SearchRequest {
    /// Create a new search request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The upstream search string for this request.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.name
    }
}
