//! Error types for the runbox server.

use thiserror::Error;

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that can occur while configuring or running the server.
///
/// Request handling itself never produces these: execution failures travel
/// in-band inside the result body, and malformed request bodies are rejected
/// by the extractor layer.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Server configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while binding or serving
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create a new configuration error.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
