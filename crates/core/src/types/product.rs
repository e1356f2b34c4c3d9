//! Product and variant records returned by a product search.

use serde::{Deserialize, Serialize};

use super::price::compare_prices;

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Shopify global ID (e.g., `gid://shopify/ProductVariant/123`).
    pub id: String,
    /// Variant title (e.g., "Small / Red").
    pub title: String,
    /// Price as the decimal string returned by Shopify (e.g., "19.99").
    pub price: String,
}

impl ProductVariant {
    /// Create a new variant.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
        }
    }
}

/// A product with its variants ordered from cheapest to most expensive.
///
/// Identity is the Shopify `id`; two products may share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Shopify global ID (e.g., `gid://shopify/Product/123`).
    pub id: String,
    /// Product title.
    pub title: String,
    /// Variants in ascending price order.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a product, ordering `variants` by ascending numeric price.
    ///
    /// The sort is stable: variants with equal prices keep the order they
    /// were given in.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        variants: Vec<ProductVariant>,
    ) -> Self {
        let mut product = Self {
            id: id.into(),
            title: title.into(),
            variants,
        };
        product.sort_variants_by_price();
        product
    }

    /// Stable-sort the variants by ascending numeric price.
    pub fn sort_variants_by_price(&mut self) {
        self.variants.sort_by(|a, b| compare_prices(&a.price, &b.price));
    }
}
