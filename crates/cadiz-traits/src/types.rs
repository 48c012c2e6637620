//! Common types used throughout the Cadiz engine.
//!
//! This module defines the record types the data layer supplies: adjusted
//! close prices keyed by symbol and day, and index-membership intervals.

use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify securities across the Cadiz engine, typically ticker
/// symbols like "AAPL" or "MSFT".
pub type Symbol = String;

/// A single adjusted-close observation.
///
/// Rows are keyed uniquely by `(symbol, date)`; prices are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Security identifier.
    pub symbol: Symbol,
    /// Trading day.
    pub date: Date,
    /// Split- and dividend-adjusted close.
    pub adj_close: f64,
}

impl PriceRow {
    /// Create a new price row.
    pub fn new(symbol: impl Into<Symbol>, date: Date, adj_close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            adj_close,
        }
    }
}

/// One index-membership interval for a symbol.
///
/// A symbol is eligible on day `d` iff some interval has
/// `start_date <= d <= end_date` (an absent `end_date` means the interval
/// is still open). A symbol may carry several intervals; eligibility is
/// their union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    /// Security identifier.
    pub symbol: Symbol,
    /// First day of index membership.
    pub start_date: Date,
    /// Last day of membership, or `None` while the symbol is still a member.
    pub end_date: Option<Date>,
}

impl MembershipRow {
    /// Create a new membership interval.
    pub fn new(symbol: impl Into<Symbol>, start_date: Date, end_date: Option<Date>) -> Self {
        Self {
            symbol: symbol.into(),
            start_date,
            end_date,
        }
    }

    /// Whether this interval covers the given day.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_row_new() {
        let row = PriceRow::new("AAPL", day(2024, 1, 31), 184.4);
        assert_eq!(row.symbol, "AAPL");
        assert_eq!(row.adj_close, 184.4);
    }

    #[test]
    fn test_membership_closed_interval() {
        let row = MembershipRow::new("GE", day(2020, 1, 1), Some(day(2021, 6, 30)));

        assert!(!row.contains(day(2019, 12, 31)));
        assert!(row.contains(day(2020, 1, 1)));
        assert!(row.contains(day(2021, 6, 30)));
        assert!(!row.contains(day(2021, 7, 1)));
    }

    #[test]
    fn test_membership_open_interval() {
        let row = MembershipRow::new("MSFT", day(2015, 3, 2), None);

        assert!(row.contains(day(2015, 3, 2)));
        assert!(row.contains(day(2030, 1, 1)));
        assert!(!row.contains(day(2015, 3, 1)));
    }

    #[test]
    fn test_serde_round_trip() {
        let row = MembershipRow::new("XOM", day(2018, 9, 28), Some(day(2022, 3, 18)));
        let json = serde_json::to_string(&row).unwrap();
        let back: MembershipRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
