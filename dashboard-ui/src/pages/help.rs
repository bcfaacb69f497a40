//! API help page
//!
//! Single document rather than a collection: documentation links, endpoint
//! reference, example requests and a closing note.

use std::fmt::Write as _;

use super::{ERROR_PREFIX, RESULTS_ID, page_header};
use crate::client::Endpoint;
use crate::state::LoadState;
use crate::types::HelpDoc;
use crate::view::{escape, ready};

pub const ENDPOINT: Endpoint = Endpoint::HELP;

const LOADING_MESSAGE: &str = "Loading API documentation...";
const SUBTITLE: &str = "Interactive API documentation and usage guide";

/// Static part; the header depends on the document so it lives in the results
pub fn frame() -> String {
    format!(r#"<div class="container"><div id="{RESULTS_ID}"></div></div>"#)
}

/// Results region; links to the docs resolve against `api_base`
pub fn results(state: &LoadState<HelpDoc>, api_base: &str) -> String {
    match ready(state, LOADING_MESSAGE, ERROR_PREFIX) {
        Ok(help) => render_help(help, api_base),
        Err(pending) => pending.to_html(),
    }
}

fn render_help(help: &HelpDoc, api_base: &str) -> String {
    let mut docs = String::new();
    for doc in &help.docs {
        let _ = write!(
            docs,
            r#"<a class="doc-link" href="{href}" target="_blank" rel="noopener noreferrer"><h3>{url}</h3><p>{description}</p></a>"#,
            href = escape(&format!("{}{}", api_base.trim_end_matches('/'), doc.url)),
            url = escape(&doc.url),
            description = escape(&doc.description),
        );
    }

    let mut endpoints = String::new();
    for endpoint in &help.endpoints {
        let method_class = if endpoint.method.eq_ignore_ascii_case("GET") {
            "method method-get"
        } else {
            "method method-other"
        };
        let _ = write!(
            endpoints,
            r#"<div class="endpoint"><div class="endpoint-head"><span class="{method_class}">{method}</span><code>{path}</code></div><p>{description}</p></div>"#,
            method = escape(&endpoint.method),
            path = escape(&endpoint.path),
            description = escape(&endpoint.description),
        );
    }

    let mut examples = String::new();
    for (key, example) in &help.examples {
        let _ = write!(
            examples,
            r#"<div class="example"><h3 class="example-title">{title}</h3><span class="method method-example">{method}</span><code class="example-url">{url}</code></div>"#,
            title = escape(&example_title(key)),
            method = escape(&example.method),
            url = escape(&example.url),
        );
    }

    format!(
        r#"{header}<section class="panel"><h2>📚 Documentation</h2><div class="doc-grid">{docs}</div></section><section class="panel"><h2>🔌 API Endpoints</h2><div class="endpoint-list">{endpoints}</div></section><section class="panel"><h2>💡 Example Requests</h2><div class="doc-grid">{examples}</div></section><div class="note"><strong>Note:</strong> {note}</div>"#,
        header = page_header(&help.info, SUBTITLE),
        note = escape(&help.note),
    )
}

/// `list_risk_profiles` -> `list risk profiles`; capitalisation is left to CSS
fn example_title(key: &str) -> String {
    key.replace('_', " ")
}
