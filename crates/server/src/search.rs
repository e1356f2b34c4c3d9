//! Product search resolution.
//!
//! Turns a [`SearchRequest`] into price-ordered [`Product`]s: one upstream
//! call, then an in-memory reshape. Upstream failures are logged here with
//! full detail and replaced by [`SearchError::FetchFailed`], which is all a
//! GraphQL caller ever sees.

use std::future::Future;

use shopsearch_core::{Product, SearchRequest};
use thiserror::Error;
use tracing::instrument;

use crate::shopify::conversions::convert_products;
use crate::shopify::{ShopifyClient, ShopifyError, search_products};

/// Error returned to callers of [`ProductSearch`].
///
/// Deliberately carries no upstream detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The upstream product search failed.
    #[error("Failed to fetch products")]
    FetchFailed,
}

/// Source of raw product search results.
///
/// Implemented by [`ShopifyClient`]; tests substitute canned payloads.
pub trait ProductSource: Send + Sync {
    /// Run one product search against the upstream catalog.
    fn fetch_products(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<search_products::ResponseData, ShopifyError>> + Send;
}

impl ProductSource for ShopifyClient {
    async fn fetch_products(
        &self,
        query: &str,
    ) -> Result<search_products::ResponseData, ShopifyError> {
        self.search_products(query).await
    }
}

/// Resolves product searches against a [`ProductSource`].
///
/// Holds no per-request state; one instance serves all concurrent queries.
#[derive(Clone)]
pub struct ProductSearch<S> {
    source: S,
}

impl<S: ProductSource> ProductSearch<S> {
    /// Create a resolver over `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Find products matching `request.name`.
    ///
    /// Products come back in upstream order with variants sorted by ascending
    /// price. No matches is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FetchFailed`] for any upstream failure.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn products_by_name(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Product>, SearchError> {
        let response = self
            .source
            .fetch_products(request.query())
            .await
            .map_err(|error| {
                tracing::error!(error = %error, "Error fetching products");
                SearchError::FetchFailed
            })?;

        let products = convert_products(response);
        tracing::debug!(count = products.len(), "Resolved products");

        Ok(products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    /// Upstream stand-in returning one canned payload and recording queries.
    struct StubSource {
        payload: serde_json::Value,
        fail_with: Option<fn() -> ShopifyError>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl StubSource {
        fn returning(payload: serde_json::Value) -> Self {
            Self {
                payload,
                fail_with: None,
                queries: Arc::default(),
            }
        }

        fn failing(error: fn() -> ShopifyError) -> Self {
            Self {
                payload: serde_json::Value::Null,
                fail_with: Some(error),
                queries: Arc::default(),
            }
        }

        /// Handle on the recorded queries that outlives moving the stub.
        fn recorded_queries(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.queries)
        }
    }

    impl ProductSource for StubSource {
        async fn fetch_products(
            &self,
            query: &str,
        ) -> Result<search_products::ResponseData, ShopifyError> {
            self.queries.lock().unwrap().push(query.to_string());
            if let Some(error) = self.fail_with {
                return Err(error());
            }
            Ok(serde_json::from_value(self.payload.clone()).unwrap())
        }
    }

    fn variant(id: &str, title: &str, price: &str) -> serde_json::Value {
        json!({"node": {"id": id, "title": title, "price": price}})
    }

    fn product(id: &str, title: &str, variants: &[serde_json::Value]) -> serde_json::Value {
        json!({"node": {"id": id, "title": title, "variants": {"edges": variants}}})
    }

    fn payload(products: &[serde_json::Value]) -> serde_json::Value {
        json!({"products": {"edges": products}})
    }

    async fn search(source: StubSource, name: &str) -> Result<Vec<Product>, SearchError> {
        ProductSearch::new(source)
            .products_by_name(&SearchRequest::new(name))
            .await
    }

    fn variant_titles(product: &Product) -> Vec<&str> {
        product.variants.iter().map(|v| v.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_variants_sorted_by_price_with_stable_ties() {
        let source = StubSource::returning(payload(&[product(
            "gid://shopify/Product/1",
            "Tee",
            &[
                variant("gid://shopify/ProductVariant/1", "A", "19.99"),
                variant("gid://shopify/ProductVariant/2", "B", "5.00"),
                variant("gid://shopify/ProductVariant/3", "C", "5.00"),
                variant("gid://shopify/ProductVariant/4", "D", "100.00"),
            ],
        )]));

        let products = search(source, "tee").await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(variant_titles(&products[0]), vec!["B", "C", "A", "D"]);
    }

    #[tokio::test]
    async fn test_name_is_passed_through_verbatim() {
        let source = StubSource::returning(payload(&[]));
        let queries = source.recorded_queries();

        search(source, "title:shirt* AND -tag:\"sold out\"")
            .await
            .unwrap();

        assert_eq!(
            *queries.lock().unwrap(),
            vec!["title:shirt* AND -tag:\"sold out\"".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let products = search(StubSource::returning(payload(&[])), "").await.unwrap();
        assert!(products.is_empty());

        let products = search(StubSource::returning(payload(&[])), "no-such-product")
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_product_without_variants() {
        let source = StubSource::returning(payload(&[product(
            "gid://shopify/Product/7",
            "Gift Card",
            &[],
        )]));

        let products = search(source, "gift").await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Gift Card");
        assert!(products[0].variants.is_empty());
    }

    #[tokio::test]
    async fn test_identical_titles_are_distinct_products() {
        let source = StubSource::returning(payload(&[
            product("gid://shopify/Product/1", "Mug", &[]),
            product("gid://shopify/Product/2", "Mug", &[]),
        ]));

        let products = search(source, "mug").await.unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["gid://shopify/Product/1", "gid://shopify/Product/2"]);
    }

    #[tokio::test]
    async fn test_shirt_search() {
        let source = StubSource::returning(payload(&[
            product(
                "gid://shopify/Product/1",
                "Red Shirt",
                &[
                    variant("gid://shopify/ProductVariant/11", "Large", "25.00"),
                    variant("gid://shopify/ProductVariant/12", "Small", "20.00"),
                ],
            ),
            product(
                "gid://shopify/Product/2",
                "Blue Shirt",
                &[variant("gid://shopify/ProductVariant/21", "Medium", "15.00")],
            ),
        ]));

        let products = search(source, "shirt").await.unwrap();

        let summary: Vec<(&str, Vec<&str>)> = products
            .iter()
            .map(|p| {
                (
                    p.title.as_str(),
                    p.variants.iter().map(|v| v.price.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Red Shirt", vec!["20.00", "25.00"]),
                ("Blue Shirt", vec!["15.00"]),
            ]
        );
    }

    /// Log sink shared between the test and a scoped `fmt` subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_upstream_error_detail_is_logged_not_returned() {
        const DETAIL: &str = "Access denied for products field. Required access: read_products";

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::ERROR)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = StubSource::failing(|| {
            ShopifyError::GraphQL(vec![crate::shopify::GraphQLError {
                message: DETAIL.to_string(),
                locations: vec![],
                path: vec![],
            }])
        });
        let err = search(source, "shirt").await.unwrap_err();

        let logged = logs.contents();
        assert!(logged.contains("ERROR"), "{logged}");
        assert!(logged.contains("Error fetching products"), "{logged}");
        assert!(logged.contains(DETAIL), "{logged}");
        assert!(!err.to_string().contains(DETAIL));
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[tokio::test]
    async fn test_upstream_errors_become_generic() {
        let failures: [fn() -> ShopifyError; 4] = [
            || ShopifyError::Unauthorized("Invalid API key or access token".to_string()),
            || ShopifyError::RateLimited(2),
            || ShopifyError::UnexpectedStatus(500),
            || {
                ShopifyError::GraphQL(vec![crate::shopify::GraphQLError {
                    message: "Internal error. Looks like something went wrong on our end."
                        .to_string(),
                    locations: vec![],
                    path: vec![],
                }])
            },
        ];

        for failure in failures {
            let err = search(StubSource::failing(failure), "shirt")
                .await
                .unwrap_err();

            assert_eq!(err, SearchError::FetchFailed);
            assert_eq!(err.to_string(), "Failed to fetch products");
        }
    }
}
