#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cadiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type and contract definitions for the Cadiz portfolio engine.
//!
//! This crate provides the foundational vocabulary for portfolio selection
//! and backtesting: market records, the data-source contract, configuration,
//! and the error taxonomy.

/// The version of the cadiz-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod config;
pub mod error;
pub mod source;
pub mod types;

// Re-exports
pub use config::SelectionConfig;
pub use error::{CadizError, Result};
pub use source::DataSource;
pub use types::{Date, MembershipRow, PriceRow, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
