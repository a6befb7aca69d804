//! Error types for Modelport.

use thiserror::Error;

/// Primary error type for all Modelport operations.
#[derive(Error, Debug)]
pub enum ModelportError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ModelportError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ModelportError>;
