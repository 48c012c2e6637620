//! Price-to-return conversion with explicit missing values.
//!
//! Missing observations stay missing: there is no forward fill and no
//! smoothing, so a gap in prices produces a gap in returns rather than a
//! phantom zero.

use cadiz_traits::Date;
use std::collections::BTreeMap;

/// Convert a price sequence to simple returns.
///
/// The output has length `max(0, n - 1)`. Position `i` holds
/// `prices[i + 1] / prices[i] - 1` when both prices are present and the
/// denominator is nonzero; otherwise `None`.
pub fn to_returns(prices: &[Option<f64>]) -> Vec<Option<f64>> {
    if prices.len() < 2 {
        return Vec::new();
    }
    prices
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) if prev != 0.0 => Some(curr / prev - 1.0),
            _ => None,
        })
        .collect()
}

/// Sample one symbol's closes on a month-end grid.
///
/// Only exact-date matches count: a symbol that did not trade on a grid
/// date gets `None` for that month. The output is aligned to `grid` and has
/// the same length.
pub fn monthly_closes(prices: &BTreeMap<Date, f64>, grid: &[Date]) -> Vec<Option<f64>> {
    grid.iter().map(|date| prices.get(date).copied()).collect()
}
