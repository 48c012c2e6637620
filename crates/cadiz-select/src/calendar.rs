//! Month-end derivation from irregular trading days.

use cadiz_traits::Date;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Collapse a set of trading days to one month-end per calendar month.
///
/// The month-end for a `(year, month)` bucket is the maximum input date in
/// that bucket, which for exchange data is the last trading day of the
/// month. Input may contain duplicates and irregular gaps; output is sorted
/// ascending. An empty input yields an empty sequence.
///
/// # Example
///
/// ```rust,ignore
/// let days = vec![jan_30, jan_31, feb_27];
/// assert_eq!(month_ends(&days), vec![jan_31, feb_27]);
/// ```
pub fn month_ends(dates: &[Date]) -> Vec<Date> {
    let mut by_month: BTreeMap<(i32, u32), Date> = BTreeMap::new();
    for &date in dates {
        by_month
            .entry((date.year(), date.month()))
            .and_modify(|cur| {
                if date > *cur {
                    *cur = date;
                }
            })
            .or_insert(date);
    }
    by_month.into_values().collect()
}
