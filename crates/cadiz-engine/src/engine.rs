//! The selection pipeline.
//!
//! One `run` = one rebalance. The engine performs four data reads
//! (trading days, membership, lookback prices, forward prices) and keeps
//! everything between them as owned, single-threaded numerics. Dropping the
//! returned future between awaits cancels the run with no partial state.

use std::collections::{BTreeMap, BTreeSet};

use cadiz_backtest::simulate;
use cadiz_select::{calendar, optimize, panel, prune, returns, stats};
use cadiz_traits::{CadizError, DataSource, Date, PriceRow, Result, SelectionConfig, Symbol};
use chrono::Months;
use log::{debug, warn};
use ndarray::Array1;

use crate::selection::Selection;

/// Orchestrates one portfolio selection per evaluation window.
///
/// Holds no mutable state: independent windows can run concurrently against
/// a shareable data source.
#[derive(Debug, Clone)]
pub struct SelectionEngine<D> {
    source: D,
    config: SelectionConfig,
}

/// A symbol that survived the Sharpe pre-screen, with its monthly returns.
struct Candidate {
    symbol: Symbol,
    monthly_returns: Vec<Option<f64>>,
    sharpe: f64,
}

impl<D: DataSource> SelectionEngine<D> {
    /// Create an engine, validating the configuration before any I/O.
    ///
    /// # Errors
    ///
    /// Returns [`CadizError::InvalidConfig`] for configurations the run
    /// could never satisfy; see [`SelectionConfig::validate`].
    pub fn new(source: D, config: SelectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// The active configuration.
    pub const fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Run one selection over the evaluation window `[start, end]`.
    ///
    /// Returns `Ok(None)` when the window cannot support a portfolio: no
    /// trading days, no rebalance date with lookback history, no eligible
    /// members, too few symbols passing the screen, a panel below the
    /// coverage floors, or no forward trading days. Each branch logs a
    /// warning naming the cause.
    ///
    /// # Errors
    ///
    /// Returns [`CadizError::Numerical`] when the covariance matrix stays
    /// singular after the ridge retry, and propagates data-source errors.
    pub async fn run(&self, start: Date, end: Date) -> Result<Option<Selection>> {
        let all_days = self.source.distinct_dates(start, end).await?;
        if all_days.is_empty() {
            warn!("no trading days in {start}..{end}");
            return Ok(None);
        }

        let Some(t0) = self.rebalance_date(&all_days) else {
            warn!("no month-end with lookback history in {start}..{end}");
            return Ok(None);
        };
        debug!("rebalance date {t0}");

        let eligible = self.source.members_active_at(t0).await?;
        if eligible.is_empty() {
            warn!("no index members active at {t0}");
            return Ok(None);
        }

        let eligible: Vec<Symbol> = eligible.into_iter().collect();
        let lookback_start = sub_months(t0, self.config.lookback_months);
        let lookback_rows = self.source.prices(&eligible, lookback_start, t0).await?;

        let candidates = self.screen(&eligible, &lookback_rows);
        if candidates.len() < self.config.portfolio_size {
            warn!(
                "{} symbols pass the Sharpe screen at {t0}, need {}",
                candidates.len(),
                self.config.portfolio_size
            );
            return Ok(None);
        }

        let series: Vec<Vec<Option<f64>>> = candidates
            .iter()
            .map(|c| c.monthly_returns.clone())
            .collect();
        let pan = panel::assemble(&series);
        let min_rows = panel::MIN_PANEL_ROWS.max(self.config.min_history_months.saturating_sub(1));
        if pan.n_rows() < min_rows || pan.n_cols() < self.config.portfolio_size {
            warn!(
                "panel too thin at {t0}: {} months x {} symbols (need {} x {})",
                pan.n_rows(),
                pan.n_cols(),
                min_rows,
                self.config.portfolio_size
            );
            return Ok(None);
        }

        let mu = if self.config.raw_means {
            Array1::from(pan.col_means.clone())
        } else {
            stats::mean_vector(&pan.matrix)
        };
        let sigma = stats::covariance(&pan.matrix, self.config.ridge);

        let with_context = |err: CadizError| match err {
            CadizError::Numerical(msg) => CadizError::Numerical(format!(
                "{msg} (window {start}..{end}, {} months x {} symbols)",
                pan.n_rows(),
                pan.n_cols()
            )),
            other => other,
        };
        let full = optimize::solve(&mu, &sigma, self.config.min_weight, self.config.max_weight)
            .map_err(with_context)?;
        let kept = prune::reduce(
            &full,
            &mu,
            &sigma,
            self.config.portfolio_size,
            self.config.min_weight,
            self.config.max_weight,
        )
        .map_err(with_context)?;

        let symbols: Vec<Symbol> = kept
            .iter()
            .map(|&(col, _)| candidates[pan.kept_cols[col]].symbol.clone())
            .collect();
        let weights: BTreeMap<Symbol, f64> = kept
            .iter()
            .map(|&(col, weight)| (candidates[pan.kept_cols[col]].symbol.clone(), weight))
            .collect();

        let forward_rows = self.source.prices(&symbols, t0, end).await?;
        let forward_days: BTreeSet<Date> = forward_rows
            .iter()
            .map(|row| row.date)
            .filter(|&d| d > t0 && d <= end)
            .collect();
        if forward_days.is_empty() {
            warn!("no forward trading days after {t0}");
            return Ok(None);
        }
        let dates_fwd: Vec<Date> = forward_days.into_iter().collect();
        let forward_prices = index_prices(forward_rows);
        let daily_returns = simulate::daily_returns(&dates_fwd, &forward_prices, &weights);

        debug!(
            "selected {} names at {t0}, {} forward days",
            symbols.len(),
            dates_fwd.len()
        );
        Ok(Some(Selection {
            rebalance_date: t0,
            symbols,
            weights,
            daily_returns,
        }))
    }

    /// The first month-end with at least one trading day in the lookback
    /// window preceding it.
    fn rebalance_date(&self, all_days: &[Date]) -> Option<Date> {
        calendar::month_ends(all_days).into_iter().find(|&d| {
            let from = sub_months(d, self.config.lookback_months);
            all_days.iter().any(|&x| x >= from && x < d)
        })
    }

    /// Build monthly return series per eligible symbol and keep the
    /// top-Sharpe slice.
    ///
    /// Symbols need at least `min_history_months` monthly closes and a
    /// finite Sharpe ratio. Ranking is by Sharpe descending; ties keep the
    /// alphabetical order of the eligibility set.
    fn screen(&self, eligible: &[Symbol], lookback_rows: &[PriceRow]) -> Vec<Candidate> {
        let lookback_days: BTreeSet<Date> = lookback_rows.iter().map(|row| row.date).collect();
        let grid_days: Vec<Date> = lookback_days.into_iter().collect();
        let grid = calendar::month_ends(&grid_days);

        let mut by_symbol: BTreeMap<&Symbol, BTreeMap<Date, f64>> = BTreeMap::new();
        for row in lookback_rows {
            by_symbol
                .entry(&row.symbol)
                .or_default()
                .insert(row.date, row.adj_close);
        }

        let mut candidates: Vec<Candidate> = eligible
            .iter()
            .filter_map(|symbol| {
                let prices = by_symbol.get(symbol)?;
                let closes = returns::monthly_closes(prices, &grid);
                if closes.iter().flatten().count() < self.config.min_history_months {
                    return None;
                }
                let monthly_returns = returns::to_returns(&closes);
                let sharpe = stats::sharpe_ratio(&monthly_returns, self.config.risk_free_rate);
                if !sharpe.is_finite() {
                    return None;
                }
                Some(Candidate {
                    symbol: symbol.clone(),
                    monthly_returns,
                    sharpe,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.sharpe
                .partial_cmp(&a.sharpe)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(self.config.screen_size);
        candidates
    }
}

/// Subtract whole months, saturating at the calendar floor.
fn sub_months(date: Date, months: u32) -> Date {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(Date::MIN)
}

/// Group price rows into per-symbol dated series.
fn index_prices(rows: Vec<PriceRow>) -> BTreeMap<Symbol, BTreeMap<Date, f64>> {
    let mut map: BTreeMap<Symbol, BTreeMap<Date, f64>> = BTreeMap::new();
    for row in rows {
        map.entry(row.symbol)
            .or_default()
            .insert(row.date, row.adj_close);
    }
    map
}
