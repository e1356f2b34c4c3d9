//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::{ProductSchema, build_schema};
use crate::search::ProductSearch;
use crate::shopify::ShopifyClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    schema: ProductSchema,
}

impl AppState {
    /// Build the Shopify client and GraphQL schema from configuration.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        let client = ShopifyClient::new(&config.shopify);
        let schema = build_schema(ProductSearch::new(client));

        Self {
            inner: Arc::new(AppStateInner { schema }),
        }
    }

    /// Get the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &ProductSchema {
        &self.inner.schema
    }
}
