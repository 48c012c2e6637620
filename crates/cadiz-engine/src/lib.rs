//! Selection orchestration for Cadiz.
//!
//! The [`SelectionEngine`] sequences the whole pipeline for one evaluation
//! window: trading-day discovery, rebalance-date selection, membership
//! filtering, lookback panel assembly, Sharpe pre-screening, bounded
//! mean-variance optimization, cardinality pruning, and the forward
//! buy-and-hold simulation.
//!
//! Data scarcity at any step produces `Ok(None)` with a warning naming the
//! guard; only configuration mistakes and unrecoverable numerics are
//! errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use cadiz_engine::SelectionEngine;
//! use cadiz_traits::SelectionConfig;
//!
//! let engine = SelectionEngine::new(store, SelectionConfig::default())?;
//! if let Some(selection) = engine.run(start, end).await? {
//!     println!("{} names at {}", selection.symbols.len(), selection.rebalance_date);
//! }
//! ```

pub mod engine;
pub mod selection;

// Re-export main types
pub use engine::SelectionEngine;
pub use selection::Selection;
