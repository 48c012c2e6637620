//! CSV ingestion for prices and membership intervals.
//!
//! Expected layouts, one header row each:
//!
//! ```text
//! prices:     symbol,date,adj_close
//! membership: symbol,start_date,end_date   (empty end_date = still open)
//! ```
//!
//! Dates are ISO `YYYY-MM-DD`. Rows missing a required field are skipped
//! with a debug log rather than failing the whole load.

use std::path::Path;

use cadiz_traits::{Date, MembershipRow, PriceRow, Result};
use polars::prelude::*;

/// Days from the Common Era to the Unix epoch; Polars stores dates as days
/// since 1970-01-01.
const UNIX_EPOCH_DAYS: i32 = 719_163;

/// Read price rows from a CSV file.
pub fn read_prices(path: impl AsRef<Path>) -> Result<Vec<PriceRow>> {
    let df = read_frame(path.as_ref())?;

    let symbols = df.column("symbol")?.as_materialized_series().clone();
    let symbols = symbols.str()?;
    let dates = date_column(&df, "date")?;
    let closes = df
        .column("adj_close")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let closes = closes.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for ((symbol, date), close) in symbols.into_iter().zip(dates).zip(closes) {
        match (symbol, date, close) {
            (Some(symbol), Some(date), Some(close)) => {
                rows.push(PriceRow::new(symbol, date, close));
            }
            _ => log::debug!("skipping incomplete price row"),
        }
    }
    Ok(rows)
}

/// Read membership intervals from a CSV file.
pub fn read_memberships(path: impl AsRef<Path>) -> Result<Vec<MembershipRow>> {
    let df = read_frame(path.as_ref())?;

    let symbols = df.column("symbol")?.as_materialized_series().clone();
    let symbols = symbols.str()?;
    let starts = date_column(&df, "start_date")?;
    let ends = date_column(&df, "end_date")?;

    let mut rows = Vec::with_capacity(df.height());
    for ((symbol, start), end) in symbols.into_iter().zip(starts).zip(ends) {
        match (symbol, start) {
            (Some(symbol), Some(start)) => {
                rows.push(MembershipRow::new(symbol, start, end));
            }
            _ => log::debug!("skipping incomplete membership row"),
        }
    }
    Ok(rows)
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Extract a date column, casting string columns on the way.
fn date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<Date>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Date)?;
    let dates = series.date()?;
    Ok(dates
        .into_iter()
        .map(|d: Option<i32>| d.and_then(|days| Date::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS)))
        .collect())
}
