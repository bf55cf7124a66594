//! Error types for the command line front end.

use thiserror::Error;

/// Errors raised while configuring or running the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A descriptor could not be serialised.
    #[error("failed to serialise descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
