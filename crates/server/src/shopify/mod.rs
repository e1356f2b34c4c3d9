//! Shopify Admin API client for product search.
//!
//! # Security
//!
//! This module holds the Shopify Admin API access token. Errors produced here
//! carry upstream detail (status codes, GraphQL messages) and are meant for
//! operators only; the search pipeline replaces them with a generic error
//! before anything reaches a GraphQL caller.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL queries
//! - Direct API calls to Shopify (no local cache)
//! - One request per search, no retries
//!
//! # Example
//!
//! ```rust,ignore
//! use shopsearch_server::shopify::ShopifyClient;
//!
//! let client = ShopifyClient::new(&config.shopify);
//! let raw = client.search_products("shirt").await?;
//! ```

mod client;
pub mod conversions;
pub mod queries;

pub use client::ShopifyClient;
pub use queries::search_products;

use thiserror::Error;

/// Errors that can occur when calling the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Shopify answered with a non-success status.
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
