//! Product search command.

use std::fmt::Write as _;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;
use serde_json::json;
use shopsearch_core::Product;
use shopsearch_server::config::{ConfigError, ServerConfig};
use shopsearch_server::routes::{GRAPHQL_PATH, app, serve};
use shopsearch_server::state::AppState;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

const PRODUCTS_QUERY: &str = r"
query ProductsByName($name: String!) {
  getProductsByName(name: $name) {
    id
    title
    variants {
      id
      title
      price
    }
  }
}
";

/// Search command errors.
#[derive(Debug, Error)]
pub enum SearchCommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("Query returned {0} GraphQL error(s)")]
    GraphQL(usize),
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    get_products_by_name: Option<Vec<Product>>,
}

/// Run a product search and print the results.
///
/// # Errors
///
/// Returns an error if the server cannot be reached or started, or if the
/// query comes back with GraphQL errors.
#[allow(clippy::print_stdout)]
pub async fn run(name: &str, endpoint: Option<Url>) -> Result<(), SearchCommandError> {
    let products = match endpoint {
        Some(endpoint) => query_products(&endpoint, name).await?,
        None => query_embedded(name).await?,
    };

    print!("{}", render_products(name, &products));
    Ok(())
}

/// Start the server on an ephemeral local port, query it, then shut it down.
async fn query_embedded(name: &str) -> Result<Vec<Product>, SearchCommandError> {
    let config = ServerConfig::from_env()?;

    let listener = TcpListener::bind(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)).await?;
    let addr = listener.local_addr()?;
    let endpoint = Url::parse(&format!("http://{addr}{GRAPHQL_PATH}"))?;
    tracing::debug!(%endpoint, "Started in-process server");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app(AppState::new(&config)), async move {
        shutdown_rx.await.ok();
    }));

    let result = query_products(&endpoint, name).await;

    shutdown_tx.send(()).ok();
    server.await??;

    result
}

#[allow(clippy::print_stderr)]
async fn query_products(endpoint: &Url, name: &str) -> Result<Vec<Product>, SearchCommandError> {
    let response: GraphQLResponse = reqwest::Client::new()
        .post(endpoint.clone())
        .json(&json!({
            "query": PRODUCTS_QUERY,
            "variables": {"name": name},
        }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if !response.errors.is_empty() {
        match serde_json::to_string_pretty(&response.errors) {
            Ok(pretty) => eprintln!("{pretty}"),
            Err(_) => eprintln!("{:?}", response.errors),
        }
        return Err(SearchCommandError::GraphQL(response.errors.len()));
    }

    Ok(response
        .data
        .and_then(|data| data.get_products_by_name)
        .unwrap_or_default())
}

/// Render products as one title line followed by one line per variant.
fn render_products(name: &str, products: &[Product]) -> String {
    if products.is_empty() {
        return format!("No products found matching \"{name}\"\n");
    }

    let mut out = String::new();
    for product in products {
        let _ = writeln!(out, "{}", product.title);
        for variant in &product.variants {
            let _ = writeln!(out, "- {} - price ${}", variant.title, variant.price);
        }
    }
    out
}
