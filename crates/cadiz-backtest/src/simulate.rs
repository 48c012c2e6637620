//! Drift-free daily simulation of a fixed-weight portfolio.
//!
//! Each day is weighted by the original portfolio weights restricted to the
//! symbols that traded on both the previous and the current day, then
//! renormalized. Symbols that stop trading simply fall out of the day's
//! weighting; there is no survivorship correction beyond what membership
//! and price availability provide.

use cadiz_traits::{Date, Symbol};
use std::collections::BTreeMap;

/// Per-asset per-day return cap, applied symmetrically.
///
/// Neutralizes data-error spikes (bad splits, stale closes) without
/// touching ordinary moves.
pub const DAILY_RETURN_CLIP: f64 = 0.35;

/// Simulate daily portfolio returns over the forward window.
///
/// `dates` are the sorted distinct forward trading days; `prices` maps each
/// symbol to its dated closes; `weights` is the fixed target allocation.
///
/// For each adjacent day pair, every symbol with prices on both days and a
/// nonzero previous close contributes its clipped return, weighted by its
/// target weight renormalized over the day's participants. Days where no
/// symbol qualifies (or the participating weight is not positive) yield
/// 0.0, not a gap.
///
/// The output holds one `(date, return)` entry per day pair, keyed by the
/// later day.
pub fn daily_returns(
    dates: &[Date],
    prices: &BTreeMap<Symbol, BTreeMap<Date, f64>>,
    weights: &BTreeMap<Symbol, f64>,
) -> Vec<(Date, f64)> {
    let mut out = Vec::with_capacity(dates.len().saturating_sub(1));

    for pair in dates.windows(2) {
        let (prev_day, curr_day) = (pair[0], pair[1]);
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;

        for (symbol, &weight) in weights {
            let Some(series) = prices.get(symbol) else {
                continue;
            };
            let (Some(&prev), Some(&curr)) = (series.get(&prev_day), series.get(&curr_day))
            else {
                continue;
            };
            if prev == 0.0 {
                continue;
            }
            let ret = (curr / prev - 1.0).clamp(-DAILY_RETURN_CLIP, DAILY_RETURN_CLIP);
            weighted_sum += weight * ret;
            weight_sum += weight;
        }

        let portfolio_ret = if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            0.0
        };
        out.push((curr_day, portfolio_ret));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn day(d: u32) -> Date {
        Date::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn series(points: &[(u32, f64)]) -> BTreeMap<Date, f64> {
        points.iter().map(|&(d, p)| (day(d), p)).collect()
    }

    fn weights(entries: &[(&str, f64)]) -> BTreeMap<Symbol, f64> {
        entries
            .iter()
            .map(|&(s, w)| (s.to_string(), w))
            .collect()
    }

    #[test]
    fn test_single_symbol_returns() {
        let mut prices = BTreeMap::new();
        prices.insert(
            "A".to_string(),
            series(&[(3, 100.0), (4, 102.0), (5, 96.9)]),
        );
        let w = weights(&[("A", 1.0)]);

        let out = daily_returns(&[day(3), day(4), day(5)], &prices, &w);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, day(4));
        assert_abs_diff_eq!(out[0].1, 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1].1, -0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_caps_extreme_move() {
        // Raw return 0.8 clips to the cap for a single-symbol portfolio.
        let mut prices = BTreeMap::new();
        prices.insert("A".to_string(), series(&[(3, 100.0), (4, 180.0)]));
        let w = weights(&[("A", 1.0)]);

        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        assert_abs_diff_eq!(out[0].1, DAILY_RETURN_CLIP, epsilon = 1e-12);

        let mut prices = BTreeMap::new();
        prices.insert("A".to_string(), series(&[(3, 100.0), (4, 20.0)]));
        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        assert_abs_diff_eq!(out[0].1, -DAILY_RETURN_CLIP, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_symbol_renormalizes() {
        // B holds 40% but never trades forward; A's return carries the day
        // at full weight after renormalization.
        let mut prices = BTreeMap::new();
        prices.insert("A".to_string(), series(&[(3, 50.0), (4, 51.0)]));
        let w = weights(&[("A", 0.6), ("B", 0.4)]);

        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        assert_abs_diff_eq!(out[0].1, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_gap_renormalizes() {
        // B misses day 4 only: day 4's return comes from A alone, day 5
        // has no valid pair for B either (its previous close is missing).
        let mut prices = BTreeMap::new();
        prices.insert(
            "A".to_string(),
            series(&[(3, 100.0), (4, 101.0), (5, 101.0)]),
        );
        prices.insert("B".to_string(), series(&[(3, 200.0), (5, 210.0)]));
        let w = weights(&[("A", 0.5), ("B", 0.5)]);

        let out = daily_returns(&[day(3), day(4), day(5)], &prices, &w);
        assert_abs_diff_eq!(out[0].1, 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1].1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_qualifying_symbol_emits_zero() {
        let prices: BTreeMap<Symbol, BTreeMap<Date, f64>> = BTreeMap::new();
        let w = weights(&[("A", 1.0)]);

        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        assert_eq!(out, vec![(day(4), 0.0)]);
    }

    #[test]
    fn test_zero_previous_close_skipped() {
        let mut prices = BTreeMap::new();
        prices.insert("A".to_string(), series(&[(3, 0.0), (4, 10.0)]));
        let w = weights(&[("A", 1.0)]);

        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        assert_eq!(out[0].1, 0.0);
    }

    #[test]
    fn test_two_symbol_weighting() {
        let mut prices = BTreeMap::new();
        prices.insert("A".to_string(), series(&[(3, 100.0), (4, 104.0)]));
        prices.insert("B".to_string(), series(&[(3, 100.0), (4, 99.0)]));
        let w = weights(&[("A", 0.75), ("B", 0.25)]);

        let out = daily_returns(&[day(3), day(4)], &prices, &w);
        // 0.75 * 4% + 0.25 * -1% = 2.75%
        assert_abs_diff_eq!(out[0].1, 0.0275, epsilon = 1e-12);
    }

    #[test]
    fn test_fewer_than_two_dates() {
        let prices = BTreeMap::new();
        let w = weights(&[("A", 1.0)]);
        assert!(daily_returns(&[], &prices, &w).is_empty());
        assert!(daily_returns(&[day(3)], &prices, &w).is_empty());
    }
}
