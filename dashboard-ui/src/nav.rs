//! Navigation bar
//!
//! Static destinations; the active entry is derived from the current
//! location by exact string comparison.

use std::fmt::Write as _;

use crate::view::escape;

/// Product name shown in the brand link
pub const BRAND: &str = "QS Trader UI";

/// One destination in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub destination: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Destinations in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { destination: "/", label: "Dashboard", icon: "🏠" },
    NavItem { destination: "/strategies", label: "Strategies", icon: "📈" },
    NavItem { destination: "/tickers", label: "Tickers", icon: "💹" },
    NavItem { destination: "/risk-profiles", label: "Risk Profiles", icon: "⚖️" },
    NavItem { destination: "/help", label: "Help", icon: "❓" },
];

/// Index of the item whose destination equals `location`, if any
pub fn active_index(items: &[NavItem], location: &str) -> Option<usize> {
    items.iter().position(|item| item.destination == location)
}

/// Render the navigation bar for `location`
pub fn render_nav(items: &[NavItem], location: &str) -> String {
    let active = active_index(items, location);
    let mut links = String::new();
    for (index, item) in items.iter().enumerate() {
        let class = if Some(index) == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        let _ = write!(
            links,
            r#"<a class="{class}" href="{href}"><span class="nav-icon">{icon}</span>{label}</a>"#,
            href = escape(item.destination),
            icon = item.icon,
            label = escape(item.label),
        );
    }

    format!(
        r#"<nav class="navbar"><div class="nav-inner"><a class="brand" href="/">{brand}</a><div class="nav-links">{links}</div></div></nav>"#,
        brand = BRAND
    )
}
