//! QS Trader UI gateway - Cloudflare Worker in front of the dashboard
//!
//! # Routes
//! - `/`, `/strategies`, `/tickers`, `/risk-profiles`, `/help`: page shell
//! - `/pkg/*`: wasm bundle from the `ASSETS` binding
//! - `/api/proxy?endpoint=/...`: same-origin pass-through to the backend
//! - `/health`: status, version, environment, timestamp
//!
//! Any other GET path gets the shell with a 404 status.

mod config;
mod error;
mod proxy;
mod utils;

use dashboard_ui::{PROXY_PATH, Page, shell_html};
use worker::{Context, Env, Method, Request, Response, console_error, console_log, console_warn, event};

pub use config::Config;
pub use error::{GatewayError, Result};

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

const ASSET_PREFIX: &str = "/pkg/";
const ASSETS_BINDING: &str = "ASSETS";

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    utils::set_panic_hook();

    let path = req.path();
    if path.starts_with(ASSET_PREFIX) {
        return env.assets(ASSETS_BINDING)?.fetch_request(req).await;
    }

    match (req.method(), path.as_str()) {
        (Method::Get, "/health") => health(&env),
        (Method::Get, PROXY_PATH) => proxy_request(&req, &env).await,
        (_, PROXY_PATH) => Response::error("Method Not Allowed", 405),
        (Method::Get | Method::Head, _) => page(&path, &env),
        (method, _) => {
            console_warn!("{method:?} {path} not allowed");
            Response::error("Method Not Allowed", 405)
        }
    }
}

fn health(env: &Env) -> WResult<Response> {
    let config = match Config::from_env(env) {
        Ok(c) => c,
        Err(e) => return Response::error(format!("Config error: {e}"), 500),
    };

    Response::from_json(&serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Shell for `path`; the browser bundle renders the page itself
fn page(path: &str, env: &Env) -> WResult<Response> {
    let config = match Config::from_env(env) {
        Ok(c) => c,
        Err(e) => return Response::error(format!("Config error: {e}"), 500),
    };

    let html = shell_html(path, &config.ui_config())
        .map_err(|e| worker::Error::RustError(e.to_string()))?;

    let status = if Page::from_path(path) == Page::NotFound {
        console_warn!("no page at {path}");
        404
    } else {
        200
    };
    Ok(Response::from_html(html)?.with_status(status))
}

async fn proxy_request(req: &Request, env: &Env) -> WResult<Response> {
    match forward(req, env).await {
        Ok(forwarded) => forwarded.into_response(),
        Err(GatewayError::BadRequest(reason)) => {
            console_warn!("proxy rejected: {reason}");
            Response::error(reason, 400)
        }
        Err(e) => {
            console_error!("proxy failed: {e}");
            Response::error(e.to_string(), e.status())
        }
    }
}

async fn forward(req: &Request, env: &Env) -> Result<proxy::Forwarded> {
    let endpoint = proxy::parse_endpoint(&req.url()?)?;
    let config = Config::from_env(env)?;
    let url = proxy::backend_url(config.api_base(), &endpoint);

    console_log!("proxy GET {url}");
    let forwarded = proxy::fetch_backend(&reqwest::Client::new(), &url).await?;
    console_log!("proxy {url} -> {}", forwarded.status);
    Ok(forwarded)
}
