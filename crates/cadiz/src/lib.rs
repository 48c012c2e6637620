#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # cadiz
//!
//! Portfolio selection and backtest engine for equity index universes.
//!
//! cadiz is an umbrella crate that re-exports all cadiz sub-crates for
//! convenience. It provides a unified API for selecting a bounded-weight
//! portfolio from an index universe and simulating its forward performance.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadiz::data::{csv, MemoryStore};
//! use cadiz::engine::SelectionEngine;
//! use cadiz::{Date, SelectionConfig};
//!
//! # async fn example() -> cadiz::Result<()> {
//! let store = MemoryStore::new(
//!     csv::read_prices("prices.csv")?,
//!     csv::read_memberships("membership.csv")?,
//! );
//! let engine = SelectionEngine::new(store, SelectionConfig::default())?;
//!
//! let start = Date::from_ymd_opt(2018, 1, 1).unwrap();
//! let end = Date::from_ymd_opt(2018, 12, 31).unwrap();
//! if let Some(selection) = engine.run(start, end).await? {
//!     println!("{} names selected at {}", selection.symbols.len(), selection.rebalance_date);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, configuration, error taxonomy and the
//!   [`DataSource`] contract
//! - [`select`] - Calendar, return panels, statistics, the bounded-weight
//!   optimizer and the cardinality pruner
//! - [`backtest`] - Daily buy-and-hold simulation and performance metrics
//! - [`data`] - In-memory and CSV-backed data sources
//! - [`engine`] - The [`SelectionEngine`] orchestrator
//!
//! ## Architecture
//!
//! cadiz follows a pipeline architecture:
//!
//! 1. **Screening** ranks eligible symbols by annualized Sharpe ratio
//! 2. **Panel assembly** builds a dense demeaned monthly return matrix,
//!    tolerating ragged coverage
//! 3. **Optimization** solves heuristic bounded Markowitz weights over a
//!    ridge-regularized covariance
//! 4. **Pruning** greedily reduces the book to its target cardinality
//! 5. **Simulation** replays daily forward returns with per-day weight
//!    renormalization
//!
//! ## Integration
//!
//! cadiz belongs to the Factor Dynamics ecosystem:
//!
//! - **tarifa**: Alpha model supplying expected-return signals
//! - **perth**: Risk model providing covariance estimates
//! - **Data layer**: Shared market data infrastructure

/// Version information for the cadiz crate.
///
/// This constant contains the current version of cadiz as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core type and contract definitions for cadiz.
///
/// This module re-exports the foundational pieces that define the cadiz API:
///
/// - [`DataSource`] - Read-only price and membership contract
/// - [`SelectionConfig`] - All engine knobs with production defaults
/// - [`CadizError`] / [`Result`] - The error taxonomy
/// - [`PriceRow`], [`MembershipRow`], [`Date`], [`Symbol`] - Record types
pub mod traits {
    pub use cadiz_traits::*;
}

// Re-export core items at top level for convenience
pub use cadiz_traits::{CadizError, DataSource, Result, SelectionConfig};
pub use cadiz_traits::{Date, MembershipRow, PriceRow, Symbol};

// ============================================================================
// Selection Numerics
// ============================================================================

/// Selection numerics: calendar, returns, panel, statistics, optimizer,
/// pruner.
///
/// The pipeline pieces are pure functions over owned buffers:
///
/// - [`month_ends`](select::month_ends) collapses trading days to one
///   month-end per calendar month
/// - [`to_returns`](select::to_returns) converts prices to returns with
///   explicit missing values
/// - [`assemble`](select::assemble) builds the coverage-tolerant demeaned
///   panel
/// - [`sharpe_ratio`](select::sharpe_ratio), [`covariance`](select::covariance)
///   estimate the screening and risk statistics
/// - [`solve`](select::solve) produces bounded heuristic weights
/// - [`reduce`](select::reduce) prunes the book to its target size
pub mod select {
    pub use cadiz_select::*;
}

// ============================================================================
// Backtesting
// ============================================================================

/// Buy-and-hold simulation and performance reporting.
///
/// - [`daily_returns`](backtest::daily_returns) simulates the clipped,
///   per-day renormalized portfolio return sequence
/// - [`PerformanceSummary`](backtest::PerformanceSummary) reports total
///   return, CAGR, volatility, Sharpe and maximum drawdown
pub mod backtest {
    pub use cadiz_backtest::*;
}

// ============================================================================
// Data Sources
// ============================================================================

/// Data-source implementations.
///
/// - [`MemoryStore`](data::MemoryStore) serves sorted in-memory rows
/// - [`csv`](data::csv) loads price and membership CSV files
pub mod data {
    pub use cadiz_data::*;
}

// ============================================================================
// Engine
// ============================================================================

/// The selection orchestrator.
///
/// [`SelectionEngine`](engine::SelectionEngine) sequences the full pipeline
/// for one evaluation window and returns a
/// [`Selection`](engine::Selection) or `None` on data scarcity.
pub mod engine {
    pub use cadiz_engine::*;
}

// Re-export the primary entry points
pub use cadiz_engine::{Selection, SelectionEngine};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// cadiz. Import it with:
///
/// ```ignore
/// use cadiz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{CadizError, DataSource, Result, SelectionConfig};
    pub use crate::{Date, MembershipRow, PriceRow, Symbol};
    pub use crate::{Selection, SelectionEngine};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should be in semver format (x.y.z)
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        // Verify the re-exports compile by using them in signatures.
        fn _accept_config(_config: &SelectionConfig) {}
        fn _accept_selection(_selection: &Selection) {}

        let _result: Result<()> = Ok(());
        let _error: CadizError = CadizError::InvalidConfig("test".to_string());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SelectionConfig::default().validate().is_ok());
    }
}
