//! Process-level error handling for the server binary.
//!
//! Per-request failures never surface here; they are resolved into GraphQL
//! errors by the search pipeline. These are the errors that stop the server.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal server error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
