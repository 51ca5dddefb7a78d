//! CLI error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request could not be priced.
    #[error("{0}")]
    Pricing(#[from] optionpricer::core::Error),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
