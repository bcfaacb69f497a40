//! Backend API client
//!
//! One GET per call against a read-only endpoint:
//! - direct endpoints resolve against the configured backend base
//! - proxied endpoints go through the same-origin `/api/proxy`
//!
//! No retry, no caching, no explicit timeout.

use serde_json::Value;

use crate::config::UiConfig;
use crate::error::FetchError;

/// Path of the same-origin proxy served by the gateway
pub const PROXY_PATH: &str = "/api/proxy";

/// How an endpoint is reached from the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `{api_base}{path}`
    Direct,
    /// `{origin}/api/proxy?endpoint={path}`
    Proxied,
}

/// A read-only backend resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Backend path, e.g. `/tickers`
    pub path: &'static str,
    pub route: Route,
    /// Fixed text shown when the backend answers with a non-success status
    pub failure_message: &'static str,
}

impl Endpoint {
    pub const STRATEGIES: Endpoint = Endpoint {
        path: "/strategies",
        route: Route::Direct,
        failure_message: "Failed to fetch strategies",
    };

    pub const TICKERS: Endpoint = Endpoint {
        path: "/tickers",
        route: Route::Proxied,
        failure_message: "Failed to fetch tickers",
    };

    pub const RISK_PROFILES: Endpoint = Endpoint {
        path: "/risk-profiles",
        route: Route::Direct,
        failure_message: "Failed to fetch risk profiles",
    };

    pub const HELP: Endpoint = Endpoint {
        path: "/help",
        route: Route::Direct,
        failure_message: "Failed to fetch help info",
    };

    /// Absolute URL for this endpoint under the given config
    pub fn url(&self, config: &UiConfig) -> String {
        match self.route {
            Route::Direct => format!("{}{}", config.api_base(), self.path),
            Route::Proxied => format!(
                "{}{PROXY_PATH}?endpoint={}",
                config.origin.trim_end_matches('/'),
                self.path
            ),
        }
    }
}

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: UiConfig,
}

impl ApiClient {
    /// Create new client for the given config
    pub fn new(config: UiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Fetch an endpoint and return its body as untyped JSON
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let url = endpoint.url(&self.config);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(endpoint, response).await
    }

    /// Map status to the endpoint's fixed message, otherwise parse the body
    async fn handle_response(
        endpoint: &Endpoint,
        response: reqwest::Response,
    ) -> Result<Value, FetchError> {
        let status = response.status();

        if !status.is_success() {
            log::warn!("{} answered HTTP {status}", endpoint.path);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: endpoint.failure_message.to_string(),
            });
        }

        response.json().await.map_err(FetchError::from)
    }
}
