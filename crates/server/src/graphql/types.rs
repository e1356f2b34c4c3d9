//! GraphQL output types.

use async_graphql::{ID, SimpleObject};
use shopsearch_core as core;

/// A purchasable variant of a product.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "ProductVariant")]
pub struct ProductVariantObject {
    pub id: ID,
    pub title: String,
    /// Decimal price as returned by Shopify, e.g. "19.99".
    pub price: String,
}

/// A product and its variants, cheapest first.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductObject {
    pub id: ID,
    pub title: String,
    pub variants: Vec<ProductVariantObject>,
}

impl From<core::ProductVariant> for ProductVariantObject {
    fn from(variant: core::ProductVariant) -> Self {
        Self {
            id: ID(variant.id),
            title: variant.title,
            price: variant.price,
        }
    }
}

impl From<core::Product> for ProductObject {
    fn from(product: core::Product) -> Self {
        Self {
            id: ID(product.id),
            title: product.title,
            variants: product.variants.into_iter().map(Into::into).collect(),
        }
    }
}
