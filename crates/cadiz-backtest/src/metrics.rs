//! Headline performance metrics over a daily return sequence.

use cadiz_traits::Date;
use serde::{Deserialize, Serialize};

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Summary statistics of a simulated daily return sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Number of daily observations.
    pub n_days: usize,
    /// Compounded total return over the window.
    pub total_return: f64,
    /// Compound annual growth rate.
    pub cagr: f64,
    /// Annualized volatility of daily returns.
    pub annualized_volatility: f64,
    /// Annualized Sharpe ratio (zero risk-free).
    pub sharpe_ratio: f64,
    /// Maximum peak-to-trough drawdown, as a positive fraction.
    pub max_drawdown: f64,
}

impl PerformanceSummary {
    /// Summarize a daily `(date, return)` sequence.
    ///
    /// An empty sequence yields zero days, zero total return and NaN for
    /// the annualized statistics. Fewer than two observations leave
    /// volatility and Sharpe as NaN.
    pub fn from_daily(daily: &[(Date, f64)]) -> Self {
        let n_days = daily.len();

        let mut cumulative = Vec::with_capacity(n_days);
        let mut cum = 0.0;
        for &(_, ret) in daily {
            cum = (1.0 + cum) * (1.0 + ret) - 1.0;
            cumulative.push(cum);
        }
        let total_return = cum;

        let cagr = if n_days > 0 {
            (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / n_days as f64) - 1.0
        } else {
            f64::NAN
        };

        let (annualized_volatility, sharpe_ratio) = if n_days >= 2 {
            let mean = daily.iter().map(|&(_, r)| r).sum::<f64>() / n_days as f64;
            let variance = daily
                .iter()
                .map(|&(_, r)| (r - mean).powi(2))
                .sum::<f64>()
                / (n_days - 1) as f64;
            let std = variance.sqrt();
            let vol = std * TRADING_DAYS_PER_YEAR.sqrt();
            let sharpe = if std > 0.0 {
                mean / std * TRADING_DAYS_PER_YEAR.sqrt()
            } else {
                f64::NAN
            };
            (vol, sharpe)
        } else {
            (f64::NAN, f64::NAN)
        };

        Self {
            n_days,
            total_return,
            cagr,
            annualized_volatility,
            sharpe_ratio,
            max_drawdown: max_drawdown(&cumulative),
        }
    }
}

/// Maximum drawdown of a cumulative return curve.
fn max_drawdown(cumulative: &[f64]) -> f64 {
    let mut max_dd = 0.0;
    let mut peak = 0.0;

    for &cum_ret in cumulative {
        if cum_ret > peak {
            peak = cum_ret;
        }
        let dd = (peak - cum_ret) / (1.0 + peak);
        if dd > max_dd {
            max_dd = dd;
        }
    }

    max_dd
}
