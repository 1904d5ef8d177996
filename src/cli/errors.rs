//! CLI-specific error types
//!
//! Every CLI failure aborts the process; there is nothing to retry at
//! this layer.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Seed file unreadable, invalid, or rejected by validation
    #[error("seed error: {0}")]
    Seed(String),

    /// Runtime construction or server failure
    #[error("server error: {0}")]
    Server(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}
