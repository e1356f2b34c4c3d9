//! shopsearch core - shared types library.
//!
//! This crate provides the types shared by all shopsearch components:
//! - `server` - GraphQL façade over the Shopify Admin API
//! - `cli` - Command-line product search
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product and variant records, search requests, price ordering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
