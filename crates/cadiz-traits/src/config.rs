//! Selection engine configuration.
//!
//! All knobs recognized by the engine, with the production defaults. Values
//! that would make a run meaningless are rejected by [`SelectionConfig::validate`]
//! before any data is read.

use serde::{Deserialize, Serialize};

use crate::error::{CadizError, Result};

/// Configuration for one portfolio selection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Length of the historical window for monthly returns, in months.
    pub lookback_months: u32,
    /// Minimum monthly price observations for a symbol to be considered.
    pub min_history_months: usize,
    /// Pre-screen size: how many symbols survive the Sharpe ranking.
    pub screen_size: usize,
    /// Target portfolio cardinality after pruning.
    pub portfolio_size: usize,
    /// Annual risk-free rate used in the Sharpe pre-screen.
    pub risk_free_rate: f64,
    /// Minimum per-asset weight.
    pub min_weight: f64,
    /// Maximum per-asset weight.
    pub max_weight: f64,
    /// Minimum additive diagonal regularizer for the covariance matrix.
    /// The effective value is `max(ridge, 0.05 * |median diagonal|)`.
    pub ridge: f64,
    /// Estimate expected returns from the raw (pre-demeaning) column means
    /// instead of the demeaned panel. The default keeps the demeaned
    /// estimate, under which the optimizer drifts toward bounded
    /// near-equal weights.
    pub raw_means: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            lookback_months: 36,
            min_history_months: 24,
            screen_size: 100,
            portfolio_size: 45,
            risk_free_rate: 0.04,
            min_weight: 0.005,
            max_weight: 0.03,
            ridge: 0.1,
            raw_means: false,
        }
    }
}

impl SelectionConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CadizError::InvalidConfig`] when:
    /// - `portfolio_size` is zero
    /// - `min_weight` exceeds `max_weight`
    /// - `screen_size` is smaller than `portfolio_size`
    /// - `lookback_months` is zero
    pub fn validate(&self) -> Result<()> {
        if self.portfolio_size == 0 {
            return Err(CadizError::InvalidConfig(
                "portfolio_size must be positive".to_string(),
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(CadizError::InvalidConfig(format!(
                "min_weight {} exceeds max_weight {}",
                self.min_weight, self.max_weight
            )));
        }
        if self.screen_size < self.portfolio_size {
            return Err(CadizError::InvalidConfig(format!(
                "screen_size {} is smaller than portfolio_size {}",
                self.screen_size, self.portfolio_size
            )));
        }
        if self.lookback_months == 0 {
            return Err(CadizError::InvalidConfig(
                "lookback_months must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the box constraints admit a weight vector summing to one.
    ///
    /// When infeasible the optimizer still produces a finite best-effort
    /// vector, which may violate a bound.
    pub const fn bounds_feasible(&self) -> bool {
        let k = self.portfolio_size as f64;
        k * self.min_weight <= 1.0 && k * self.max_weight >= 1.0
    }
}
