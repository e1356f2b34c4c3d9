//! Core types for shopsearch.
//!
//! This module provides the request-scoped records of a product search.

pub mod price;
pub mod product;
pub mod search;

pub use price::{compare_prices, numeric_price};
pub use product::{Product, ProductVariant};
pub use search::SearchRequest;
