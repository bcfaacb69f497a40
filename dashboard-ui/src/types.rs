//! Backend document shapes
//!
//! Every field the backend may omit carries a serde default, and display
//! fields accept numbers or null, so a sloppy item still renders instead of
//! being dropped. Keyed sections keep the order the backend sent them in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A trading strategy from `/strategies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

impl Strategy {
    /// Slug used by the run link: the id, else the name lowercased with
    /// every whitespace run (leading and trailing too) replaced by `_`
    pub fn slug(&self) -> String {
        if !self.id.is_empty() {
            return self.id.clone();
        }
        let mut slug = String::with_capacity(self.name.len());
        let mut in_space = false;
        for c in self.name.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('_');
                }
                in_space = true;
            } else {
                slug.push(c);
                in_space = false;
            }
        }
        slug
    }

    pub fn run_path(&self) -> String {
        format!("/run-strategy/{}", self.slug())
    }
}

/// A ticker symbol from `/tickers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub exchange: Option<String>,
}

/// A portfolio risk profile from `/risk-profiles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<String>,
    /// Asset name to percentage, in backend order
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub allocation: Option<Map<String, Value>>,
}

impl RiskProfile {
    /// Risk level text, if non-empty
    pub fn risk_text(&self) -> Option<&str> {
        self.risk_level.as_deref().filter(|text| !text.is_empty())
    }

    pub fn level(&self) -> Option<RiskLevel> {
        self.risk_text().map(RiskLevel::parse)
    }
}

/// Badge bucket for a risk level string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Other,
}

impl RiskLevel {
    /// Case-insensitive; anything unrecognised is `Other`
    pub fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Other,
        }
    }

    /// CSS modifier class for the badge
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "badge-low",
            RiskLevel::Medium => "badge-medium",
            RiskLevel::High => "badge-high",
            RiskLevel::Other => "badge-neutral",
        }
    }
}

/// API help document from `/help`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpDoc {
    pub info: String,
    pub docs: Vec<DocLink>,
    pub endpoints: Vec<ApiEndpoint>,
    /// Example name (e.g. `list_strategies`) to request, in backend order
    #[serde(deserialize_with = "lenient::ordered_examples")]
    pub examples: Vec<(String, ExampleRequest)>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocLink {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoint {
    pub path: String,
    pub method: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleRequest {
    pub method: String,
    pub url: String,
}

/// Forgiving field deserializers for backend display data
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    use super::ExampleRequest;

    /// Strings pass through, numbers and booleans are printed, anything
    /// else (null included) counts as absent
    fn to_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(to_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(to_text(Value::deserialize(deserializer)?))
    }

    pub fn opt_object<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Map<String, Value>>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Some(map)),
            _ => Ok(None),
        }
    }

    /// Entries that are not request objects are skipped
    pub fn ordered_examples<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, ExampleRequest)>, D::Error> {
        let Value::Object(map) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        Ok(map
            .into_iter()
            .filter_map(|(name, raw)| match serde_json::from_value(raw) {
                Ok(example) => Some((name, example)),
                Err(e) => {
                    log::warn!("help example {name} skipped: {e}");
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_slug_prefers_id() {
        let strategy: Strategy = serde_json::from_value(serde_json::json!({
            "id": "sma", "name": "SMA Crossover", "description": "..."
        }))
        .unwrap();
        assert_eq!(strategy.run_path(), "/run-strategy/sma");
    }

    #[test]
    fn test_strategy_slug_from_name() {
        let strategy: Strategy =
            serde_json::from_value(serde_json::json!({"name": "Mean  Reversion\tDaily"})).unwrap();
        assert_eq!(strategy.slug(), "mean_reversion_daily");
    }

    #[test]
    fn test_strategy_slug_keeps_outer_whitespace_runs() {
        let strategy: Strategy =
            serde_json::from_value(serde_json::json!({"name": "  Mean Reversion "})).unwrap();
        assert_eq!(strategy.slug(), "_mean_reversion_");
    }

    #[test]
    fn test_lenient_fields() {
        let profile: RiskProfile = serde_json::from_value(serde_json::json!({
            "id": 7, "name": null, "risk_level": "", "allocation": "n/a"
        }))
        .unwrap();
        assert_eq!(profile.id, "7");
        assert_eq!(profile.name, "");
        assert_eq!(profile.risk_text(), None);
        assert_eq!(profile.level(), None);
        assert!(profile.allocation.is_none());
    }

    #[test]
    fn test_keyed_sections_keep_backend_order() {
        let profile: RiskProfile = serde_json::from_str(
            r#"{"id": "balanced", "allocation": {"stocks": 60, "bonds": 40}}"#,
        )
        .unwrap();
        let assets: Vec<_> = profile.allocation.unwrap().keys().cloned().collect();
        assert_eq!(assets, ["stocks", "bonds"]);

        let help: HelpDoc = serde_json::from_str(
            r#"{"examples": {"run_backtest": {"method": "POST", "url": "/run"},
                             "list_assets": {"method": "GET", "url": "/assets"},
                             "broken": 3}}"#,
        )
        .unwrap();
        let names: Vec<_> = help.examples.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["run_backtest", "list_assets"]);
    }

    #[test]
    fn test_risk_level_buckets() {
        assert_eq!(RiskLevel::parse("LOW"), RiskLevel::Low);
        assert_eq!(RiskLevel::parse("Medium"), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse("high"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("extreme"), RiskLevel::Other);
        assert_eq!(RiskLevel::Other.css_class(), "badge-neutral");
    }

    #[test]
    fn test_help_doc_tolerates_missing_sections() {
        let help: HelpDoc = serde_json::from_value(serde_json::json!({
            "info": "QS Trader API",
            "examples": {"list_tickers": {"method": "GET", "url": "/tickers"}}
        }))
        .unwrap();
        assert_eq!(help.info, "QS Trader API");
        assert!(help.docs.is_empty());
        assert_eq!(help.examples[0].0, "list_tickers");
        assert_eq!(help.examples[0].1.url, "/tickers");
    }
}
