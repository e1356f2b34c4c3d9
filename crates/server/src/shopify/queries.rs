//! GraphQL query definitions for Shopify Admin API.
//!
//! Uses `graphql_client` to generate type-safe Rust code from GraphQL queries.

use graphql_client::GraphQLQuery;

/// Money amount as decimal string (preserves precision).
type Money = String;

/// Number of products requested per search.
pub const PRODUCT_PAGE_SIZE: i64 = 10;

/// Number of variants requested per product.
pub const VARIANT_PAGE_SIZE: i64 = 10;

/// Product search by Shopify query string.
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/admin/schema.graphql",
    query_path = "graphql/admin/queries/products.graphql",
    response_derives = "Debug, Clone"
)]
pub struct SearchProducts;

impl search_products::Variables {
    /// Variables for a search with the fixed page sizes.
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            first: PRODUCT_PAGE_SIZE,
            variant_count: VARIANT_PAGE_SIZE,
        }
    }
}
