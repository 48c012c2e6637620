//! Buy-and-hold simulation and performance reporting for Cadiz.
//!
//! This crate turns a fixed weight mapping and a forward price panel into a
//! daily portfolio return sequence, and summarizes that sequence into the
//! usual headline numbers (total return, CAGR, volatility, Sharpe, maximum
//! drawdown).
//!
//! # Example
//!
//! ```rust,ignore
//! use cadiz_backtest::{simulate, PerformanceSummary};
//!
//! let daily = simulate::daily_returns(&forward_dates, &price_panel, &weights);
//! let summary = PerformanceSummary::from_daily(&daily);
//! println!("CAGR {:.2}%  max drawdown {:.2}%",
//!     summary.cagr * 100.0, summary.max_drawdown * 100.0);
//! ```

pub mod metrics;
pub mod simulate;

// Re-export main types
pub use metrics::PerformanceSummary;
pub use simulate::{daily_returns, DAILY_RETURN_CLIP};
