//! In-memory data source.

use std::collections::BTreeSet;

use cadiz_traits::{DataSource, Date, MembershipRow, PriceRow, Result, Symbol};

/// A [`DataSource`] backed by plain vectors.
///
/// Rows are sorted by `(symbol, date)` on construction, so query results do
/// not depend on the order rows were supplied in. Suitable for tests and
/// for datasets that fit comfortably in memory (a few decades of daily
/// closes for an index universe).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    prices: Vec<PriceRow>,
    memberships: Vec<MembershipRow>,
}

impl MemoryStore {
    /// Create a store from price and membership rows.
    pub fn new(mut prices: Vec<PriceRow>, memberships: Vec<MembershipRow>) -> Self {
        prices.sort_by(|a, b| a.symbol.cmp(&b.symbol).then(a.date.cmp(&b.date)));
        Self {
            prices,
            memberships,
        }
    }

    /// Number of price rows held.
    pub fn n_prices(&self) -> usize {
        self.prices.len()
    }

    /// Number of membership intervals held.
    pub fn n_memberships(&self) -> usize {
        self.memberships.len()
    }
}

impl DataSource for MemoryStore {
    async fn distinct_dates(&self, start: Date, end: Date) -> Result<Vec<Date>> {
        let days: BTreeSet<Date> = self
            .prices
            .iter()
            .filter(|row| row.date >= start && row.date <= end)
            .map(|row| row.date)
            .collect();
        Ok(days.into_iter().collect())
    }

    async fn members_active_at(&self, date: Date) -> Result<BTreeSet<Symbol>> {
        Ok(self
            .memberships
            .iter()
            .filter(|row| row.contains(date))
            .map(|row| row.symbol.clone())
            .collect())
    }

    async fn prices(&self, symbols: &[Symbol], start: Date, end: Date) -> Result<Vec<PriceRow>> {
        let wanted: BTreeSet<&Symbol> = symbols.iter().collect();
        Ok(self
            .prices
            .iter()
            .filter(|row| {
                row.date >= start && row.date <= end && wanted.contains(&row.symbol)
            })
            .cloned()
            .collect())
    }
}
