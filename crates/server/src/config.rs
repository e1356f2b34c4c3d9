//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_DOMAIN` - Admin API base URL (e.g., `https://your-store.myshopify.com/admin/api/2024-07`)
//!   or store host (e.g., `your-store.myshopify.com`)
//! - `SHOP_NAME` - Shopify store name (e.g., `your-store`)
//! - `SHOPIFY_ACCESS_TOKEN` - Admin API access token. A supplied token is still
//!   rejected (startup fails with `ConfigError::InsecureSecret`) when it matches a
//!   placeholder pattern such as `your-` or `changeme`, or when its Shannon
//!   entropy is below 3.3 bits per character.
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 4000)
//! - `SHOPIFY_API_VERSION` - API version used when `SHOPIFY_DOMAIN` has no
//!   `/admin/api/...` path (default: 2024-07)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_VERSION: &str = "2024-07";
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
    /// Emit JSON logs instead of text
    pub json_logs: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Store domain as configured (`SHOPIFY_DOMAIN`)
    pub domain: String,
    /// Store name (`SHOP_NAME`)
    pub shop_name: String,
    /// Shopify API version (e.g., 2024-07)
    pub api_version: String,
    /// Admin API access token
    pub access_token: SecretString,
    /// Resolved Admin GraphQL endpoint
    pub endpoint: Url,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("domain", &self.domain)
            .field("shop_name", &self.shop_name)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the access token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get_env_or_default(&var, "HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(&var, "PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let shopify = ShopifyConfig::from_vars(&var)?;
        let json_logs = var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));
        let sentry_dsn = var("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = var("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = var("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = var("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            shopify,
            json_logs,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyConfig {
    /// Build a Shopify configuration, resolving the GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `domain` is empty or not a
    /// valid http(s) URL or host.
    pub fn new(
        domain: impl Into<String>,
        shop_name: impl Into<String>,
        api_version: impl Into<String>,
        access_token: SecretString,
    ) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let api_version = api_version.into();
        let endpoint = resolve_graphql_endpoint(&domain, &api_version)?;

        Ok(Self {
            domain,
            shop_name: shop_name.into(),
            api_version,
            access_token,
            endpoint,
        })
    }

    fn from_vars<F>(var: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = get_required_env(var, "SHOPIFY_DOMAIN")?;
        let access_token = get_validated_secret(var, "SHOPIFY_ACCESS_TOKEN")?;
        let shop_name = get_required_env(var, "SHOP_NAME")?;
        let api_version = get_env_or_default(var, "SHOPIFY_API_VERSION", DEFAULT_API_VERSION);

        Self::new(domain, shop_name, api_version, access_token)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required, non-empty environment variable.
fn get_required_env<F>(var: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default<F>(var: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var(key).unwrap_or_else(|| default.to_string())
}

/// Load and validate a secret from environment.
fn get_validated_secret<F>(var: &F, key: &str) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get_required_env(var, key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

/// Resolve the Admin GraphQL endpoint from `SHOPIFY_DOMAIN`.
///
/// - `https://shop.myshopify.com/admin/api/2024-07` is used as the API base.
/// - `shop.myshopify.com` or `https://shop.myshopify.com` get
///   `/admin/api/{api_version}` appended.
/// - A URL already ending in `graphql.json` is used unchanged.
fn resolve_graphql_endpoint(domain: &str, api_version: &str) -> Result<Url, ConfigError> {
    let invalid =
        |reason: String| ConfigError::InvalidEnvVar("SHOPIFY_DOMAIN".to_string(), reason);

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }

    // Scheme is detected before trimming so "https://" cannot collapse into a host
    let with_scheme = match domain.split_once("://") {
        Some((_, rest)) if rest.trim_matches('/').is_empty() => {
            return Err(invalid("missing host".to_string()));
        }
        Some(_) => domain.to_string(),
        None => format!("https://{}", domain.trim_end_matches('/')),
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    let base_path = url.path().trim_end_matches('/').to_string();
    if base_path.ends_with("/graphql.json") {
        return Ok(url);
    }

    let api_path = if base_path.contains("/admin/api/") {
        base_path
    } else {
        format!("{base_path}/admin/api/{api_version}")
    };
    url.set_path(&format!("{api_path}/graphql.json"));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Real access tokens (shpat_...) are long random hex strings
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the token issued by Shopify."
            ),
        ));
    }

    Ok(())
}
