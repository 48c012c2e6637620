//! Portfolio selection numerics for Cadiz.
//!
//! This crate turns ragged per-symbol price history into a bounded-weight
//! portfolio:
//! - Month-end calendar derivation from irregular trading days
//! - Price-to-return conversion with explicit missing values
//! - Coverage-tolerant assembly of a dense monthly return panel
//! - Sharpe ratios, mean vectors, and ridge-regularized covariance
//! - A box-constrained heuristic weight optimizer
//! - Greedy cardinality pruning with re-optimization
//!
//! Each step is a pure function over owned buffers; orchestration and data
//! access live in `cadiz-engine`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cadiz_select::{calendar, panel, stats, optimize, prune};
//!
//! let grid = calendar::month_ends(&trading_days);
//! let panel = panel::assemble(&monthly_return_series);
//! let sigma = stats::covariance(&panel.matrix, 0.1);
//! let mu = stats::mean_vector(&panel.matrix);
//! let weights = optimize::solve(&mu, &sigma, 0.005, 0.03)?;
//! let kept = prune::reduce(&weights, &mu, &sigma, 45, 0.005, 0.03)?;
//! ```

pub mod calendar;
pub mod optimize;
pub mod panel;
pub mod prune;
pub mod returns;
pub mod stats;

// Re-export main entry points
pub use calendar::month_ends;
pub use optimize::solve;
pub use panel::{assemble, ReturnPanel};
pub use prune::reduce;
pub use returns::{monthly_closes, to_returns};
pub use stats::{covariance, mean_vector, sharpe_ratio};
