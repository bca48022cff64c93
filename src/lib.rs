//! # Max Daily Profit
//!
//! Finds the best single buy-then-sell transaction in a day of minute-by-minute
//! stock prices and reports when to buy and when to sell.
//!
//! The work is split across the workspace:
//!
//! - [`trade_math`] holds the best-profit scan itself
//! - [`minute_trade`] handles trading windows, validation and reports
//! - this crate adds market-hours configuration and the command-line front end
//!
//! ## Example
//!
//! ```
//! use max_daily_profit::evaluate_session;
//!
//! let prices = [5.0, 2.0, 1.0, 4.000, 0.500];
//! let report = evaluate_session(&prices, "10:00", "16:00").unwrap();
//! assert_eq!(report.formatted_profit(), "$3.000");
//! ```

pub mod cli;
pub mod config;

pub use config::MarketHours;
pub use minute_trade::{
    evaluate_in_window, evaluate_session, minutes_open, ProfitReport, SampleSeries, TradeError,
    TradingWindow,
};
pub use trade_math::{best_profit, optimal_profit, MathError, ProfitScan};
