//! Pages of the dashboard
//!
//! Every list page is the same pattern (fetch a collection, render a grid,
//! handle empty results) parameterized by a [`ListPage`] impl. The help page
//! renders a single document and the home page fetches nothing.
//!
//! Each page is split in two:
//! - a static frame rendered once on mount (header, search box)
//! - a results region re-rendered on every state or query change

pub mod help;
pub mod home;
pub mod risk_profiles;
pub mod strategies;
pub mod tickers;

use serde::de::DeserializeOwned;

use crate::client::Endpoint;
use crate::state::LoadState;
use crate::view::{ListConfig, ListOutcome, escape, render_list};

/// Id of the element holding the results region
pub const RESULTS_ID: &str = "results";

/// Id of the search input, on pages that have one
pub const SEARCH_ID: &str = "search";

/// Prefix of every error panel
pub const ERROR_PREFIX: &str = "Error:";

/// Routes known to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Strategies,
    Tickers,
    RiskProfiles,
    Help,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Strategies,
        Page::Tickers,
        Page::RiskProfiles,
        Page::Help,
    ];

    /// Exact path match; anything else is `NotFound`
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or(Page::NotFound)
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Strategies => "/strategies",
            Page::Tickers => "/tickers",
            Page::RiskProfiles => "/risk-profiles",
            Page::Help => "/help",
            Page::NotFound => "",
        }
    }

    /// Document title
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "QS Trader UI",
            Page::Strategies => "Strategies · QS Trader UI",
            Page::Tickers => "Tickers · QS Trader UI",
            Page::RiskProfiles => "Risk Profiles · QS Trader UI",
            Page::Help => "API Help · QS Trader UI",
            Page::NotFound => "Not Found · QS Trader UI",
        }
    }

    /// Backend resource the page loads on mount
    pub fn endpoint(self) -> Option<Endpoint> {
        match self {
            Page::Strategies => Some(strategies::StrategiesPage::ENDPOINT),
            Page::Tickers => Some(tickers::TickersPage::ENDPOINT),
            Page::RiskProfiles => Some(risk_profiles::RiskProfilesPage::ENDPOINT),
            Page::Help => Some(help::ENDPOINT),
            Page::Home | Page::NotFound => None,
        }
    }
}

/// A page listing one backend collection
pub trait ListPage {
    type Item: DeserializeOwned + 'static;

    const ENDPOINT: Endpoint;
    const TITLE: &'static str;
    const SUBTITLE: &'static str;

    fn list_config() -> ListConfig<Self::Item>;

    /// Inputs between the header and the results; none by default
    fn controls() -> String {
        String::new()
    }

    /// Wraps the list outcome; pages with extra chrome override this
    fn results(outcome: &ListOutcome) -> String {
        outcome.to_html()
    }
}

/// Static part of a list page
pub fn list_frame<P: ListPage>() -> String {
    format!(
        r#"<div class="container">{header}{controls}<div id="{RESULTS_ID}"></div></div>"#,
        header = page_header(P::TITLE, P::SUBTITLE),
        controls = P::controls(),
    )
}

/// Results region of a list page for the current state and query
pub fn list_results<P: ListPage>(state: &LoadState<Vec<P::Item>>, query: &str) -> String {
    let outcome = render_list(state, query, &P::list_config());
    P::results(&outcome)
}

/// Centered page title and subtitle
pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="page-header"><h1>{}</h1><p class="subtitle">{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

/// Body for routes the dashboard does not know
pub fn not_found_frame() -> String {
    format!(
        r#"<div class="container">{}<div class="empty"><p><a href="/">Back to the dashboard</a></p></div></div>"#,
        page_header("Page not found", "This page does not exist.")
    )
}
