//! # Minute Trade
//!
//! `minute_trade` evaluates a single intraday trading session recorded as one
//! price per minute since the market opened.
//!
//! It turns an opening and closing time into a [`TradingWindow`], checks that
//! the price series fits inside it, runs the best single buy-then-sell scan from
//! `trade_math` and maps the chosen minutes back onto the wall clock.
//!
//! ## Usage Example
//!
//! ```
//! use minute_trade::evaluate_session;
//!
//! let prices = [400.001, 1500.002, 9200.00, 14000.0, 23000.003];
//! let report = evaluate_session(&prices, "10:00", "16:00")?;
//!
//! assert_eq!(report.formatted_profit(), "$22600.002");
//! assert_eq!(report.buy_time.unwrap().to_string(), "10:00:00");
//! assert_eq!(report.sell_time.unwrap().to_string(), "10:04:00");
//! # Ok::<(), minute_trade::TradeError>(())
//! ```

use thiserror::Error;
use trade_math::MathError;

pub mod samples;
pub mod session;
pub mod utils;
pub mod window;

pub use samples::{generate_minute_prices, SampleSeries};
pub use session::{evaluate_in_window, evaluate_session, format_currency, ProfitReport};
pub use trade_math::{PricePoint, ProfitScan, ScanObserver, TracingObserver};
pub use window::{minutes_open, parse_time_of_day, TradingWindow};

/// Errors that can occur while evaluating an intraday session
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("Invalid time of day '{input}': {source}")]
    ParseError {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Data loading error: {0}")]
    DataLoadError(String),

    #[error("Calculation error: {0}")]
    Math(#[from] MathError),
}

/// Result type for intraday session operations
pub type Result<T> = std::result::Result<T, TradeError>;
