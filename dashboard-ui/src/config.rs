//! Configuration management for the dashboard
//!
//! The gateway embeds a JSON blob in every page shell
//! (`<script id="ui-config" type="application/json">`). Every field has a
//! default so an empty or partial blob still yields a usable config.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Id of the shell element carrying the serialized [`UiConfig`]
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level for the console logger
    pub log_level: String,

    /// Backend base URL for direct endpoints and documentation links
    pub api_base: String,

    /// Origin the page was served from; proxied endpoints resolve against it.
    /// Empty means "ask the browser".
    pub origin: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            origin: String::new(),
        }
    }
}

impl UiConfig {
    /// Parse the embedded config blob; blank input gives the defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Fill the origin from the browser when the shell left it empty
    #[must_use]
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.origin.is_empty() {
            self.origin = origin.trim_end_matches('/').to_string();
        }
        self
    }

    /// Backend base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Level filter for the `log` facade; unknown names fall back to info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !is_http_url(&self.api_base) {
            return Err(UiError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        if !self.origin.is_empty() && !is_http_url(&self.origin) {
            return Err(UiError::Config(format!(
                "origin must be an http(s) URL, got '{}'",
                self.origin
            )));
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
