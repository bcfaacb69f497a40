//! Resource list view
//!
//! Maps a load state, the current query and a per-page [`ListConfig`] to
//! exactly one outcome: spinner, error panel, item grid, or empty message.
//! Pure; the DOM glue only swaps the resulting HTML in.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::filter::{FieldAccessor, filter};
use crate::state::LoadState;

/// Per-page rendering contract
pub struct ListConfig<T: 'static> {
    pub loading_message: &'static str,
    /// Loaded, nothing at all
    pub empty_message: &'static str,
    /// Loaded, but the active query hides everything
    pub no_match_message: &'static str,
    pub error_prefix: &'static str,
    /// CSS class of the grid wrapping the items
    pub grid_class: &'static str,
    pub item_key: fn(&T) -> Option<&str>,
    pub item_template: fn(&T) -> String,
    /// Searchable fields; empty slice disables filtering
    pub filter_fields: &'static [FieldAccessor<T>],
}

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub html: String,
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Loading {
        message: &'static str,
    },
    Error {
        prefix: &'static str,
        message: String,
    },
    Items {
        grid_class: &'static str,
        entries: Vec<Entry>,
    },
    Empty {
        message: &'static str,
    },
}

impl ListOutcome {
    /// Number of visible items once loaded
    pub fn visible_count(&self) -> Option<usize> {
        match self {
            ListOutcome::Items { entries, .. } => Some(entries.len()),
            ListOutcome::Empty { .. } => Some(0),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            ListOutcome::Loading { message } => format!(
                r#"<div class="state state-loading"><div class="spinner"></div><p>{}</p></div>"#,
                escape(message)
            ),
            ListOutcome::Error { prefix, message } => format!(
                r#"<div class="state"><div class="error-panel"><strong>{}</strong> {}</div></div>"#,
                escape(prefix),
                escape(message)
            ),
            ListOutcome::Items {
                grid_class,
                entries,
            } => {
                let mut html = format!(r#"<div class="{grid_class}">"#);
                for entry in entries {
                    let _ = write!(
                        html,
                        r#"<div class="item" data-key="{}">{}</div>"#,
                        escape(&entry.key),
                        entry.html
                    );
                }
                html.push_str("</div>");
                html
            }
            ListOutcome::Empty { message } => {
                format!(r#"<div class="empty"><p>{}</p></div>"#, escape(message))
            }
        }
    }
}

/// The loaded payload, or the spinner/error panel to show instead.
/// Shared by list pages and single-document pages.
pub fn ready<'a, T>(
    state: &'a LoadState<T>,
    loading_message: &'static str,
    error_prefix: &'static str,
) -> Result<&'a T, ListOutcome> {
    match state {
        LoadState::Loaded(value) => Ok(value),
        LoadState::Idle | LoadState::Loading => Err(ListOutcome::Loading {
            message: loading_message,
        }),
        LoadState::Failed(message) => Err(ListOutcome::Error {
            prefix: error_prefix,
            message: message.clone(),
        }),
    }
}

/// Render the list area for the current state and query
pub fn render_list<T: 'static>(
    state: &LoadState<Vec<T>>,
    query: &str,
    config: &ListConfig<T>,
) -> ListOutcome {
    let items = match ready(state, config.loading_message, config.error_prefix) {
        Ok(items) => items,
        Err(pending) => return pending,
    };

    let visible = if config.filter_fields.is_empty() {
        items.iter().collect()
    } else {
        filter(items, query, config.filter_fields)
    };

    if visible.is_empty() {
        let message = if query.is_empty() || config.filter_fields.is_empty() {
            config.empty_message
        } else {
            config.no_match_message
        };
        return ListOutcome::Empty { message };
    }

    let keys = unique_keys(&visible, config.item_key);
    let entries = visible
        .iter()
        .zip(keys)
        .map(|(item, key)| Entry {
            key,
            html: (config.item_template)(item),
        })
        .collect();

    ListOutcome::Items {
        grid_class: config.grid_class,
        entries,
    }
}

/// Identity key per item; missing, empty or repeated keys fall back to the
/// item's position
fn unique_keys<T>(items: &[&T], item_key: fn(&T) -> Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item_key(item) {
            Some(key) if !key.is_empty() && seen.insert(key.to_string()) => key.to_string(),
            _ => format!("#{index}"),
        })
        .collect()
}

/// Escape text for HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id: &'static str,
        label: &'static str,
    }

    fn id(item: &Item) -> Option<&str> {
        Some(item.id)
    }

    fn label(item: &Item) -> Option<&str> {
        Some(item.label)
    }

    fn template(item: &Item) -> String {
        format!("<h3>{}</h3>", escape(item.label))
    }

    const FIELDS: &[FieldAccessor<Item>] = &[label];

    fn config() -> ListConfig<Item> {
        ListConfig {
            loading_message: "Loading items...",
            empty_message: "No items available at the moment.",
            no_match_message: "No items found matching your search.",
            error_prefix: "Error:",
            grid_class: "grid",
            item_key: id,
            item_template: template,
            filter_fields: FIELDS,
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "a", label: "Alpha" },
            Item { id: "b", label: "Beta" },
        ]
    }

    #[test]
    fn test_idle_and_loading_show_spinner() {
        let idle: LoadState<Vec<Item>> = LoadState::Idle;
        let loading: LoadState<Vec<Item>> = LoadState::Loading;
        for state in [idle, loading] {
            let outcome = render_list(&state, "", &config());
            assert_eq!(outcome, ListOutcome::Loading { message: "Loading items..." });
            assert_eq!(outcome.visible_count(), None);
        }
    }

    #[test]
    fn test_failed_shows_prefixed_error() {
        let state: LoadState<Vec<Item>> = LoadState::Failed("Failed to fetch items".into());
        let html = render_list(&state, "", &config()).to_html();
        assert!(html.contains("error-panel"));
        assert!(html.contains("<strong>Error:</strong> Failed to fetch items"));
    }

    #[test]
    fn test_loaded_renders_items_in_order() {
        let state = LoadState::Loaded(items());
        let outcome = render_list(&state, "", &config());
        let ListOutcome::Items { entries, .. } = &outcome else {
            panic!("expected items, got {outcome:?}");
        };
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(entries[0].html, "<h3>Alpha</h3>");
        assert_eq!(outcome.visible_count(), Some(2));
    }

    #[test]
    fn test_empty_vs_no_match() {
        let empty: LoadState<Vec<Item>> = LoadState::Loaded(Vec::new());
        assert_eq!(
            render_list(&empty, "", &config()),
            ListOutcome::Empty { message: "No items available at the moment." }
        );

        let loaded = LoadState::Loaded(items());
        assert_eq!(
            render_list(&loaded, "zeta", &config()),
            ListOutcome::Empty { message: "No items found matching your search." }
        );
    }

    #[test]
    fn test_query_narrows_items() {
        let state = LoadState::Loaded(items());
        let outcome = render_list(&state, "BET", &config());
        assert_eq!(outcome.visible_count(), Some(1));
    }

    #[test]
    fn test_duplicate_and_missing_keys_fall_back_to_position() {
        let state = LoadState::Loaded(vec![
            Item { id: "dup", label: "One" },
            Item { id: "dup", label: "Two" },
            Item { id: "", label: "Three" },
        ]);
        let ListOutcome::Items { entries, .. } = render_list(&state, "", &config()) else {
            panic!("expected items");
        };
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["dup", "#1", "#2"]);
    }

    #[test]
    fn test_backend_text_is_escaped() {
        let state: LoadState<Vec<Item>> =
            LoadState::Failed("<script>alert('x')</script>".into());
        let html = render_list(&state, "", &config()).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
