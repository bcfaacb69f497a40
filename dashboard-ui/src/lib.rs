//! QS Trader UI - browser dashboard for the trading backend's reference data
//!
//! Compiled to WebAssembly and booted by the shell page the gateway serves.
//!
//! # Architecture
//! - `client`: backend endpoints and the fetch wrapper
//! - `state`: per-page load state machine and the one-shot loader
//! - `filter` / `view`: pure search and list rendering
//! - `pages`: strategies, tickers, risk profiles, help, home
//! - `nav` / `dashboard`: navigation bar and the HTML shell
//! - `app`: DOM mounting (browser builds only)
//!
//! Everything except `app` and `logging` is plain Rust and tested natively.

// Clippy configuration for markup-heavy code
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Event closure patterns
#![allow(clippy::too_many_lines)] // Long page templates
#![allow(clippy::if_not_else)] // Readability preference
#![allow(clippy::map_unwrap_or)] // Explicit fallback preference

mod client;
mod config;
mod dashboard;
mod error;
mod filter;
mod nav;
mod pages;
mod state;
mod types;
mod view;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
mod app;
#[cfg(all(feature = "browser", target_arch = "wasm32"))]
mod logging;

pub use client::{ApiClient, Endpoint, PROXY_PATH, Route};
pub use config::{CONFIG_ELEMENT_ID, UiConfig};
pub use dashboard::{BUNDLE_PATH, MOUNT_ID, shell_html};
pub use error::{FetchError, Result, UiError};
pub use filter::{FieldAccessor, filter};
pub use nav::{BRAND, NAV_ITEMS, NavItem, active_index, render_nav};
pub use pages::Page;
pub use state::{LoadState, Resource, Settled, SharedResource, load};
pub use types::*;
pub use view::{Entry, ListConfig, ListOutcome};
