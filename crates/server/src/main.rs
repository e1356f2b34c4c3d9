//! shopsearch server - GraphQL product search over Shopify.
//!
//! This binary serves the GraphQL API on port 4000 by default.
//!
//! # Architecture
//!
//! - Axum web framework
//! - async-graphql for the public schema
//! - Shopify Admin API for product data (no local cache)
//!
//! # Endpoints
//!
//! - `POST /graphql` - GraphQL queries
//! - `GET /graphql` - GraphiQL explorer
//! - `GET /health` - Liveness check

#![cfg_attr(not(test), forbid(unsafe_code))]

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopsearch_server::config::{ConfigError, ServerConfig};
use shopsearch_server::error::AppError;
use shopsearch_server::routes::{app, serve, shutdown_signal};
use shopsearch_server::state::AppState;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            send_default_pii: false,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(config: &ServerConfig) {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopsearch_server=info,tower_http=debug".into());

    let json_layer = config
        .json_logs
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!config.json_logs).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Report a configuration error before logging is set up.
#[allow(clippy::print_stderr)]
fn report_config_error(error: &ConfigError) {
    eprintln!("Failed to load configuration: {error}");
}

#[tokio::main]
async fn main() {
    // Missing or invalid configuration is fatal before anything starts
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&e);
            std::process::exit(1);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.socket_addr();

    tracing::info!(
        shop = %config.shopify.shop_name,
        endpoint = %config.shopify.endpoint,
        "Using Shopify Admin API"
    );

    let state = AppState::new(&config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("GraphQL server listening on http://{}/graphql", addr);

    serve(listener, app(state), shutdown_signal()).await?;
    Ok(())
}
