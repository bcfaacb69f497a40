//! Landing page: one card per section, nothing fetched

use std::fmt::Write as _;

use super::page_header;
use crate::nav::{BRAND, NAV_ITEMS};
use crate::view::escape;

pub fn frame() -> String {
    let mut cards = String::new();
    for item in NAV_ITEMS.iter().filter(|item| item.destination != "/") {
        let _ = write!(
            cards,
            r#"<a class="card card-link" href="{href}"><span class="card-icon">{icon}</span><h3 class="card-title">{label}</h3></a>"#,
            href = escape(item.destination),
            icon = item.icon,
            label = escape(item.label),
        );
    }
    format!(
        r#"<div class="container">{header}<div class="card-grid">{cards}</div></div>"#,
        header = page_header(BRAND, "Reference data for the QS Trader backend"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_every_section() {
        let html = frame();
        for path in ["/strategies", "/tickers", "/risk-profiles", "/help"] {
            assert!(html.contains(&format!(r#"href="{path}""#)), "missing {path}");
        }
        assert_eq!(html.matches("card-link").count(), 4);
    }
}
