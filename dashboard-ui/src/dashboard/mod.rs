//! Dashboard shell - the HTML document every route is served with
//!
//! Separated into HTML and CSS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: mount point and bootstrap script
//! - `css.rs`: Styling with CSS custom properties
//!
//! Page content is rendered in the browser after mount; the shell only
//! knows the route (for the title and the active navigation entry).

mod css;
mod html;

pub use html::{BUNDLE_PATH, MOUNT_ID};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::Result;
use crate::nav::{NAV_ITEMS, render_nav};
use crate::pages::Page;
use crate::view::escape;

/// Generate the complete HTML document for `location`
pub fn shell_html(location: &str, config: &UiConfig) -> Result<String> {
    let page = Page::from_path(location);
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{nav}
{mount}
    <script id="{CONFIG_ELEMENT_ID}" type="application/json">{config}</script>
    <script type="module">
{bootstrap}
    </script>
</body>
</html>"#,
        title = escape(page.title()),
        css = css::STYLES,
        nav = render_nav(NAV_ITEMS, location),
        mount = html::mount(),
        config = config_json(config)?,
        bootstrap = html::bootstrap(),
    ))
}

/// JSON safe to inline in a script element
fn config_json(config: &UiConfig) -> Result<String> {
    Ok(serde_json::to_string(config)?.replace("</", "<\\/"))
}
