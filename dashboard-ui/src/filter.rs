//! Client-side search over a loaded collection

/// Reads one searchable field; `None` means the item lacks it
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Items where the query is a case-insensitive substring of at least one
/// field. Empty query keeps everything. Order is preserved and the source
/// slice is never touched.
pub fn filter<'a, T>(items: &'a [T], query: &str, fields: &[FieldAccessor<T>]) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(*item, &needle, fields))
        .collect()
}

fn matches<T>(item: &T, needle: &str, fields: &[FieldAccessor<T>]) -> bool {
    fields
        .iter()
        .filter_map(|field| field(item))
        .any(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ticker;

    fn ticker(symbol: &str, name: Option<&str>) -> Ticker {
        Ticker {
            symbol: symbol.to_string(),
            name: name.map(str::to_string),
            exchange: None,
        }
    }

    fn symbol(t: &Ticker) -> Option<&str> {
        Some(t.symbol.as_str())
    }

    fn name(t: &Ticker) -> Option<&str> {
        t.name.as_deref()
    }

    fn sample() -> Vec<Ticker> {
        vec![
            ticker("BTCUSD", Some("Bitcoin")),
            ticker("ETHUSD", None),
            ticker("AAPL", Some("Apple Inc.")),
            ticker("BTCEUR", Some("Bitcoin Euro")),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = sample();
        let kept = filter(&items, "", &[symbol, name]);
        assert_eq!(kept, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_case_insensitive() {
        let items = vec![ticker("AAPL", None)];
        let kept = filter(&items, "aapl", &[symbol]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].symbol, "AAPL");
    }

    #[test]
    fn test_btc_search_keeps_only_btc() {
        let items = vec![ticker("BTCUSD", None), ticker("ETHUSD", None)];
        let kept = filter(&items, "btc", &[symbol, name]);
        let symbols: Vec<_> = kept.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, ["BTCUSD"]);
    }

    #[test]
    fn test_any_field_matches_and_missing_fields_do_not() {
        let items = sample();
        let kept = filter(&items, "apple", &[symbol, name]);
        assert_eq!(kept.len(), 1);

        // ETHUSD has no name, searching names alone never matches it
        let kept = filter(&items, "eth", &[name]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let items = sample();
        let kept = filter(&items, "BITCOIN", &[symbol, name]);
        let symbols: Vec<_> = kept.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, ["BTCUSD", "BTCEUR"]);
    }

    #[test]
    fn test_idempotent() {
        let items = sample();
        let once: Vec<Ticker> = filter(&items, "usd", &[symbol, name])
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Ticker> = filter(&once, "usd", &[symbol, name])
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
        assert_eq!(items.len(), 4);
    }
}
