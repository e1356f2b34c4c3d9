//! shopsearch server library.
//!
//! A GraphQL façade over the Shopify Admin API exposing a single query,
//! `getProductsByName`, which returns matching products with their variants
//! sorted by ascending price.
//!
//! # Security
//!
//! This crate holds the Shopify Admin API access token. Upstream failure
//! detail is logged but never returned to GraphQL callers.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`shopify`] - Admin API client and response conversion
//! - [`search`] - Product search resolution
//! - [`graphql`] - Public GraphQL schema
//! - [`routes`] - HTTP routes and server lifecycle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod search;
pub mod shopify;
pub mod state;
