//! Page shell fragments
//!
//! The shell carries no fetched data: the navigation bar, an empty mount
//! point, the serialized UI config and the module script that boots the
//! wasm bundle.

/// Id of the element the page is mounted into
pub const MOUNT_ID: &str = "app";

/// Where the gateway serves the wasm-bindgen output
pub const BUNDLE_PATH: &str = "/pkg/dashboard_ui.js";

pub fn mount() -> String {
    format!(
        r#"
    <main id="{MOUNT_ID}">
        <noscript><div class="container"><div class="empty"><p>This dashboard needs JavaScript and WebAssembly.</p></div></div></noscript>
    </main>
"#
    )
}

pub fn bootstrap() -> String {
    format!(
        r"
    import init from '{BUNDLE_PATH}';
    init();
"
    )
}
