//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Fetch failures never escape a page: they end up as the `Failed` load state.

use thiserror::Error;

/// Custom Result type for UI setup
pub type Result<T> = std::result::Result<T, UiError>;

/// Failure of a single backend request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network, DNS or timeout failure; carries the transport's own text
    #[error("{0}")]
    Transport(String),

    /// Backend answered with a non-success status.
    /// The message is the endpoint's fixed text, the body is discarded.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Body could not be read as the expected document
    #[error("{0}")]
    Shape(String),
}

impl FetchError {
    /// Human-readable text shown in the error panel
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Dashboard setup errors
#[derive(Error, Debug)]
pub enum UiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser DOM errors (missing window, element, ...)
    #[error("DOM error: {0}")]
    Dom(String),
}
