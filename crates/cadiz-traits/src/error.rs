//! Error types for the Cadiz engine.
//!
//! Data scarcity is deliberately *not* represented here: when a selection
//! window has too little data to produce a portfolio, the engine returns
//! `Ok(None)` and logs the guard that tripped. Errors are reserved for
//! configuration mistakes, broken data stores, and numerical failure.

use thiserror::Error;

/// The main error type for Cadiz operations.
#[derive(Debug, Error)]
pub enum CadizError {
    /// Configuration rejected before any I/O was performed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A date string or date arithmetic result was invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The data store could not satisfy a read.
    #[error("Data store error: {0}")]
    Store(String),

    /// Error from Polars operations while loading data.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Numerical failure the engine could not recover from, such as a
    /// covariance matrix that stays singular after the ridge retry.
    #[error("Numerical failure: {0}")]
    Numerical(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for CadizError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CadizError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Cadiz operations.
///
/// This is a convenience type that uses [`CadizError`] as the error type.
pub type Result<T> = std::result::Result<T, CadizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CadizError::InvalidConfig("portfolio_size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: portfolio_size must be positive"
        );

        let err = CadizError::Numerical("covariance solve failed".to_string());
        assert_eq!(err.to_string(), "Numerical failure: covariance solve failed");
    }

    #[test]
    fn test_error_from_string() {
        let err: CadizError = "something broke".into();
        assert!(matches!(err, CadizError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(CadizError::Store("missing file".to_string()));
        assert!(err_result.is_err());
    }
}
