//! Market tickers with client-side search
//!
//! The count header reflects the filtered list. Clicking a ticker copies its
//! symbol (wired up in the browser glue through `data-symbol`).

use super::{ERROR_PREFIX, ListPage, SEARCH_ID};
use crate::client::Endpoint;
use crate::filter::FieldAccessor;
use crate::types::Ticker;
use crate::view::{ListConfig, ListOutcome, escape};

/// Attribute carrying the symbol to copy
pub const SYMBOL_ATTR: &str = "data-symbol";

const SEARCH_FIELDS: &[FieldAccessor<Ticker>] = &[symbol_field, name_field];

pub struct TickersPage;

impl ListPage for TickersPage {
    type Item = Ticker;

    const ENDPOINT: Endpoint = Endpoint::TICKERS;
    const TITLE: &'static str = "Market Tickers";
    const SUBTITLE: &'static str = "Available ticker symbols for trading strategies";

    fn list_config() -> ListConfig<Ticker> {
        ListConfig {
            loading_message: "Loading tickers...",
            empty_message: "No tickers available at the moment.",
            no_match_message: "No tickers found matching your search.",
            error_prefix: ERROR_PREFIX,
            grid_class: "ticker-grid",
            item_key: symbol_field,
            item_template: ticker_card,
            filter_fields: SEARCH_FIELDS,
        }
    }

    fn controls() -> String {
        format!(
            r#"<div class="search"><input type="text" id="{SEARCH_ID}" placeholder="Search tickers..." autocomplete="off"></div>"#
        )
    }

    fn results(outcome: &ListOutcome) -> String {
        let Some(count) = outcome.visible_count() else {
            return outcome.to_html();
        };
        let grid = match outcome {
            ListOutcome::Items { .. } => outcome.to_html(),
            _ => String::new(),
        };
        let empty = match outcome {
            ListOutcome::Empty { .. } => outcome.to_html(),
            _ => String::new(),
        };
        format!(
            r#"<section class="panel"><div class="panel-header"><h2>Available Tickers ({count})</h2></div><div class="panel-body">{grid}</div></section>{empty}"#
        )
    }
}

fn symbol_field(ticker: &Ticker) -> Option<&str> {
    Some(ticker.symbol.as_str())
}

fn name_field(ticker: &Ticker) -> Option<&str> {
    ticker.name.as_deref()
}

fn ticker_card(ticker: &Ticker) -> String {
    let symbol = escape(&ticker.symbol);
    let name = ticker
        .name
        .as_deref()
        .map(|name| format!(r#"<div class="ticker-name">{}</div>"#, escape(name)))
        .unwrap_or_default();
    let exchange = ticker
        .exchange
        .as_deref()
        .map(|exchange| format!(r#"<div class="ticker-exchange">{}</div>"#, escape(exchange)))
        .unwrap_or_default();
    format!(
        r#"<div class="ticker" {SYMBOL_ATTR}="{symbol}" title="Click to copy"><div class="ticker-symbol">{symbol}</div>{name}{exchange}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::list_results;
    use crate::state::LoadState;

    fn loaded(body: serde_json::Value) -> LoadState<Vec<Ticker>> {
        LoadState::Loaded(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn test_empty_collection() {
        let html = list_results::<TickersPage>(&loaded(serde_json::json!([])), "");
        assert!(html.contains("Available Tickers (0)"));
        assert!(html.contains("No tickers available at the moment."));
    }

    #[test]
    fn test_search_narrows_and_counts() {
        let state = loaded(serde_json::json!([{"symbol": "BTCUSD"}, {"symbol": "ETHUSD"}]));
        let html = list_results::<TickersPage>(&state, "btc");
        assert!(html.contains("Available Tickers (1)"));
        assert!(html.contains(r#"data-symbol="BTCUSD""#));
        assert!(!html.contains("ETHUSD"));
    }

    #[test]
    fn test_search_matches_name() {
        let state = loaded(serde_json::json!([
            {"symbol": "AAPL", "name": "Apple Inc.", "exchange": "NASDAQ"},
            {"symbol": "MSFT", "name": "Microsoft"}
        ]));
        let html = list_results::<TickersPage>(&state, "apple");
        assert!(html.contains("Available Tickers (1)"));
        assert!(html.contains(r#"<div class="ticker-exchange">NASDAQ</div>"#));
    }

    #[test]
    fn test_no_match_message() {
        let state = loaded(serde_json::json!([{"symbol": "BTCUSD"}]));
        let html = list_results::<TickersPage>(&state, "doge");
        assert!(html.contains("Available Tickers (0)"));
        assert!(html.contains("No tickers found matching your search."));
    }

    #[test]
    fn test_error_has_no_count_header() {
        let state: LoadState<Vec<Ticker>> = LoadState::Failed("Failed to fetch tickers".into());
        let html = list_results::<TickersPage>(&state, "");
        assert!(!html.contains("Available Tickers"));
        assert!(html.contains("Failed to fetch tickers"));
    }

    #[test]
    fn test_controls_render_search_box() {
        assert!(TickersPage::controls().contains(r#"placeholder="Search tickers...""#));
    }
}
