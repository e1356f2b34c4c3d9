//! Shopify Admin API GraphQL client.

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::instrument;
use url::Url;

use crate::config::ShopifyConfig;

use super::queries::{SearchProducts, search_products};
use super::{GraphQLError, GraphQLErrorLocation, ShopifyError};

/// Seconds to wait when Shopify rate limits without a `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 2;

/// Shopify Admin API GraphQL client.
///
/// Authenticates every request with the static Admin API access token.
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ShopifyClient {
    inner: Arc<ShopifyClientInner>,
}

struct ShopifyClientInner {
    client: reqwest::Client,
    endpoint: Url,
    shop_name: String,
    access_token: SecretString,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl ShopifyClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            inner: Arc::new(ShopifyClientInner {
                client,
                endpoint: config.endpoint.clone(),
                shop_name: config.shop_name.clone(),
                access_token: config.access_token.clone(),
            }),
        }
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header("X-Shopify-Access-Token", self.inner.access_token.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after)
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ShopifyError::Unauthorized(
                "Invalid API key or access token".to_string(),
            ));
        }

        if !status.is_success() {
            return Err(ShopifyError::UnexpectedStatus(status.as_u16()));
        }

        let graphql_response: GraphQLResponse<Q::ResponseData> = response.json().await?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                })
                .collect();
            return Err(ShopifyError::GraphQL(converted_errors));
        }

        graphql_response.data.ok_or_else(|| {
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Product search
    // =========================================================================

    /// Search products with a Shopify search query.
    ///
    /// Requests the first 10 matching products with the first 10 variants of
    /// each and returns the raw edge/node payload.
    ///
    /// # Arguments
    ///
    /// * `query` - Shopify search syntax, passed through unescaped
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(shop = %self.inner.shop_name))]
    pub async fn search_products(
        &self,
        query: &str,
    ) -> Result<search_products::ResponseData, ShopifyError> {
        let variables = search_products::Variables::for_query(query);

        let response = self.execute::<SearchProducts>(variables).await?;

        tracing::debug!(
            products = response.products.edges.len(),
            "Shopify product search returned"
        );

        Ok(response)
    }
}

/// Parse a `Retry-After` value in seconds (Shopify sends e.g. `2.0`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Finite and non-negative
fn parse_retry_after(value: &str) -> Option<u64> {
    let secs: f64 = value.trim().parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(secs.ceil() as u64)
}
