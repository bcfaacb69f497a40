//! Error types for the gateway
//!
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed client request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Backend unreachable or unreadable
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl GatewayError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::BadRequest(_) => 400,
            GatewayError::Upstream(_) => 502,
            GatewayError::Config(_) | GatewayError::Worker(_) => 500,
        }
    }
}

impl From<worker::Error> for GatewayError {
    fn from(err: worker::Error) -> Self {
        GatewayError::Worker(err.to_string())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

impl From<GatewayError> for worker::Error {
    fn from(err: GatewayError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}
