//! Data loading utilities for the Cadiz CLI.

use anyhow::{Context, Result};
use cadiz_data::{csv, MemoryStore};
use cadiz_engine::{Selection, SelectionEngine};
use cadiz_traits::Date;
use log::info;

use crate::WindowArgs;

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<Date> {
    Date::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{date_str}', expected YYYY-MM-DD"))
}

/// Load the CSV inputs and run the engine over the requested window.
pub(crate) async fn run_window(window: &WindowArgs) -> Result<Option<Selection>> {
    let start = parse_date(&window.start)?;
    let end = parse_date(&window.end)?;

    let prices = csv::read_prices(&window.prices)
        .with_context(|| format!("failed to load prices from {}", window.prices))?;
    let members = csv::read_memberships(&window.members)
        .with_context(|| format!("failed to load membership from {}", window.members))?;
    let store = MemoryStore::new(prices, members);
    info!(
        "loaded {} price rows, {} membership intervals",
        store.n_prices(),
        store.n_memberships()
    );

    let engine = SelectionEngine::new(store, window.to_config())?;
    Ok(engine.run(start, end).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("15/01/2024").is_err());
        assert!(parse_date("invalid").is_err());
    }
}
