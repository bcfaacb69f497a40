//! Configuration management for the gateway

use dashboard_ui::UiConfig;
use worker::Env;

use crate::error::{GatewayError, Result};

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level, handed to the browser logger
    pub log_level: String,

    /// Backend base URL (direct endpoints and proxy target)
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            api_base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let config = Self {
            environment: env
                .var("ENVIRONMENT")
                .map_or_else(|_| "production".to_string(), |v| v.to_string()),

            log_level: env
                .var("LOG_LEVEL")
                .map_or_else(|_| "info".to_string(), |v| v.to_string()),

            api_base_url: env
                .var("API_BASE_URL")
                .map_or_else(|_| DEFAULT_API_BASE.to_string(), |v| v.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(GatewayError::Config("API_BASE_URL is empty".to_string()));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(GatewayError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got '{base}'"
            )));
        }
        Ok(())
    }

    /// Backend base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }

    /// Config embedded in every shell; the browser fills in its own origin
    pub fn ui_config(&self) -> UiConfig {
        UiConfig {
            environment: self.environment.clone(),
            log_level: self.log_level.clone(),
            api_base: self.api_base().to_string(),
            origin: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_base() {
        let empty = Config {
            api_base_url: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(empty.validate(), Err(GatewayError::Config(_))));

        let ftp = Config {
            api_base_url: "ftp://backend".to_string(),
            ..Config::default()
        };
        assert!(ftp.validate().is_err());
    }

    #[test]
    fn test_ui_config_carries_trimmed_base() {
        let config = Config {
            environment: "staging".to_string(),
            api_base_url: "https://api.example.com/".to_string(),
            ..Config::default()
        };
        let ui = config.ui_config();
        assert_eq!(ui.api_base, "https://api.example.com");
        assert_eq!(ui.environment, "staging");
        assert!(ui.origin.is_empty());
        assert!(ui.validate().is_ok());
    }
}
