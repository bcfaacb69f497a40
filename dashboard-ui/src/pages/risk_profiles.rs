//! Risk profiles grid

use std::fmt::Write as _;

use super::{ERROR_PREFIX, ListPage};
use crate::client::Endpoint;
use crate::types::RiskProfile;
use crate::view::{ListConfig, escape};

pub struct RiskProfilesPage;

impl ListPage for RiskProfilesPage {
    type Item = RiskProfile;

    const ENDPOINT: Endpoint = Endpoint::RISK_PROFILES;
    const TITLE: &'static str = "Risk Profiles";
    const SUBTITLE: &'static str = "Predefined risk profiles for portfolio allocation strategies";

    fn list_config() -> ListConfig<RiskProfile> {
        ListConfig {
            loading_message: "Loading risk profiles...",
            empty_message: "No risk profiles available at the moment.",
            no_match_message: "No risk profiles available at the moment.",
            error_prefix: ERROR_PREFIX,
            grid_class: "card-grid",
            item_key: |p| Some(p.id.as_str()),
            item_template: profile_card,
            filter_fields: &[],
        }
    }
}

fn profile_card(profile: &RiskProfile) -> String {
    let badge = match (profile.risk_text(), profile.level()) {
        (Some(text), Some(level)) => format!(
            r#"<span class="badge {}">{}</span>"#,
            level.css_class(),
            escape(text)
        ),
        _ => String::new(),
    };

    let allocation = profile
        .allocation
        .as_ref()
        .map(|allocation| {
            let mut rows = String::new();
            for (asset, share) in allocation {
                let _ = write!(
                    rows,
                    r#"<div class="alloc-row"><span>{}:</span><span class="alloc-value">{}%</span></div>"#,
                    escape(asset),
                    escape(&percentage(share))
                );
            }
            format!(r#"<div class="allocation"><h4>Allocation:</h4>{rows}</div>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card"><div class="card-head"><h3 class="card-title">{name}</h3>{badge}</div><p class="card-text">{description}</p>{allocation}<button type="button" class="btn btn-primary btn-block">Use This Profile</button></div>"#,
        name = escape(&profile.name),
        description = escape(&profile.description),
    )
}

/// Allocation shares arrive as numbers or strings
fn percentage(share: &serde_json::Value) -> String {
    match share {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::list_results;
    use crate::state::LoadState;

    #[test]
    fn test_profile_card_with_badge_and_allocation() {
        let profile: RiskProfile = serde_json::from_value(serde_json::json!({
            "id": "conservative",
            "name": "Conservative",
            "description": "Capital preservation",
            "risk_level": "Low",
            "allocation": {"bonds": 70, "stocks": "30"}
        }))
        .unwrap();
        let html = profile_card(&profile);
        assert!(html.contains(r#"<span class="badge badge-low">Low</span>"#));
        assert!(html.contains("<span>bonds:</span><span class=\"alloc-value\">70%</span>"));
        assert!(html.contains("<span>stocks:</span><span class=\"alloc-value\">30%</span>"));
        assert!(html.contains("Use This Profile"));
    }

    #[test]
    fn test_profile_without_optional_fields() {
        let profile: RiskProfile =
            serde_json::from_value(serde_json::json!({"id": "x", "name": "Plain", "description": ""}))
                .unwrap();
        let html = profile_card(&profile);
        assert!(!html.contains("badge"));
        assert!(!html.contains("Allocation:"));
    }

    #[test]
    fn test_blank_risk_level_has_no_badge() {
        let profile: RiskProfile = serde_json::from_value(serde_json::json!({
            "id": "y", "name": "Blank", "description": "", "risk_level": "",
            "allocation": {"stocks": 60, "bonds": 40}
        }))
        .unwrap();
        let html = profile_card(&profile);
        assert!(!html.contains("badge"));
        let stocks = html.find("stocks:").unwrap();
        let bonds = html.find("bonds:").unwrap();
        assert!(stocks < bonds);
    }

    #[test]
    fn test_failed_fetch_shows_message() {
        let state: LoadState<Vec<RiskProfile>> =
            LoadState::Failed("Failed to fetch risk profiles".into());
        let html = list_results::<RiskProfilesPage>(&state, "");
        assert!(html.contains("error-panel"));
        assert!(html.contains("Failed to fetch risk profiles"));
    }

    #[test]
    fn test_empty_list_message() {
        let state: LoadState<Vec<RiskProfile>> = LoadState::Loaded(Vec::new());
        let html = list_results::<RiskProfilesPage>(&state, "");
        assert!(html.contains("No risk profiles available at the moment."));
    }
}
