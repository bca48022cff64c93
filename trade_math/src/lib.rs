//! # Trade Math
//!
//! Mathematical calculations for intraday trading.
//! This crate provides the best single buy-then-sell profit scan over a
//! minute price series, together with a reference single-pass optimum.

use thiserror::Error;

pub mod profit;

pub use profit::{
    best_profit, best_profit_with, optimal_profit, NoopObserver, PricePoint, ProfitScan,
    ScanObserver, TracingObserver,
};

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::InsufficientData("need 2 prices".to_string());
        assert_eq!(
            err.to_string(),
            "Insufficient data for calculation: need 2 prices"
        );
    }
}
