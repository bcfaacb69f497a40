//! Trading strategies grid

use super::{ERROR_PREFIX, ListPage};
use crate::client::Endpoint;
use crate::types::Strategy;
use crate::view::{ListConfig, escape};

pub struct StrategiesPage;

impl ListPage for StrategiesPage {
    type Item = Strategy;

    const ENDPOINT: Endpoint = Endpoint::STRATEGIES;
    const TITLE: &'static str = "Trading Strategies";
    const SUBTITLE: &'static str = "Available trading strategies for backtesting and analysis";

    fn list_config() -> ListConfig<Strategy> {
        ListConfig {
            loading_message: "Loading strategies...",
            empty_message: "No strategies available at the moment.",
            no_match_message: "No strategies available at the moment.",
            error_prefix: ERROR_PREFIX,
            grid_class: "card-grid",
            item_key: |s| Some(s.id.as_str()),
            item_template: strategy_card,
            filter_fields: &[],
        }
    }
}

fn strategy_card(strategy: &Strategy) -> String {
    format!(
        r#"<div class="card"><h3 class="card-title">{name}</h3><p class="card-text">{description}</p><a class="btn btn-primary" href="{href}">Run Strategy <span class="arrow">›</span></a></div>"#,
        name = escape(&strategy.name),
        description = escape(&strategy.description),
        href = escape(&strategy.run_path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::list_results;
    use crate::state::LoadState;

    fn loaded(body: serde_json::Value) -> LoadState<Vec<Strategy>> {
        LoadState::Loaded(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn test_single_strategy_card() {
        let state = loaded(serde_json::json!([
            {"id": "sma", "name": "SMA Crossover", "description": "..."}
        ]));
        let html = list_results::<StrategiesPage>(&state, "");
        assert_eq!(html.matches(r#"class="card""#).count(), 1);
        assert!(html.contains(r#"<h3 class="card-title">SMA Crossover</h3>"#));
        assert!(html.contains(r#"href="/run-strategy/sma""#));
    }

    #[test]
    fn test_empty_list_message() {
        let html = list_results::<StrategiesPage>(&loaded(serde_json::json!([])), "");
        assert!(html.contains("No strategies available at the moment."));
    }

    #[test]
    fn test_loading_message() {
        let html = list_results::<StrategiesPage>(&LoadState::Loading, "");
        assert!(html.contains("Loading strategies..."));
    }
}
