//! Data-source implementations for the Cadiz engine.
//!
//! Two ways to satisfy the [`cadiz_traits::DataSource`] contract:
//!
//! - [`MemoryStore`]: rows held in memory, sorted on construction so every
//!   query answers deterministically regardless of insertion order. The
//!   backbone of the test suite and of the CSV path.
//! - [`csv::read_prices`] / [`csv::read_memberships`]: Polars-backed CSV
//!   ingestion producing the typed rows a `MemoryStore` is built from.
//!
//! # Example
//!
//! ```rust,ignore
//! use cadiz_data::{csv, MemoryStore};
//!
//! let prices = csv::read_prices("prices.csv")?;
//! let members = csv::read_memberships("membership.csv")?;
//! let store = MemoryStore::new(prices, members);
//! ```

pub mod csv;
pub mod memory;

// Re-export main types
pub use memory::MemoryStore;
