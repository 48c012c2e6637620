//! The read-only data-source contract.
//!
//! The engine performs exactly four reads per selection window: the distinct
//! trading days in the window, the index membership at the rebalance date,
//! the lookback prices and the forward prices. All of them go through this
//! trait, so any store that can answer the three queries below can drive the
//! engine. Implementations live in `cadiz-data`.

use std::collections::BTreeSet;
use std::future::Future;

use crate::error::Result;
use crate::types::{Date, PriceRow, Symbol};

/// A read-only source of prices and index membership.
///
/// The engine awaits each read, so dropping the selection future between
/// steps cancels a run cleanly with no partial state. Implementations must
/// answer deterministically: the same query always returns the same rows,
/// regardless of how the underlying data was inserted.
///
/// # Example
///
/// ```no_run
/// use cadiz_traits::{DataSource, Date, PriceRow, Result, Symbol};
/// use std::collections::BTreeSet;
///
/// struct EmptySource;
///
/// impl DataSource for EmptySource {
///     async fn distinct_dates(&self, _start: Date, _end: Date) -> Result<Vec<Date>> {
///         Ok(Vec::new())
///     }
///
///     async fn members_active_at(&self, _date: Date) -> Result<BTreeSet<Symbol>> {
///         Ok(BTreeSet::new())
///     }
///
///     async fn prices(&self, _symbols: &[Symbol], _start: Date, _end: Date) -> Result<Vec<PriceRow>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait DataSource {
    /// Distinct trading days with any price in `[start, end]`, ascending.
    fn distinct_dates(
        &self,
        start: Date,
        end: Date,
    ) -> impl Future<Output = Result<Vec<Date>>> + Send;

    /// Symbols whose membership intervals cover `date`.
    fn members_active_at(
        &self,
        date: Date,
    ) -> impl Future<Output = Result<BTreeSet<Symbol>>> + Send;

    /// All price rows for the given symbols in `[start, end]`, ordered by
    /// `(symbol, date)`.
    fn prices(
        &self,
        symbols: &[Symbol],
        start: Date,
        end: Date,
    ) -> impl Future<Output = Result<Vec<PriceRow>>> + Send;
}
