//! Evaluate one trading session end to end
//!
//! A session is a price series plus the window it was recorded in. Evaluation
//! validates the series against the window, runs the best-profit scan and maps
//! the buy and sell minutes onto the wall clock.

use crate::window::TradingWindow;
use crate::Result;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use trade_math::{best_profit_with, NoopObserver, ProfitScan, ScanObserver};

const NOT_APPLICABLE: &str =
    "NOT APPLICABLE - STOCK MARKET WENT DOWN ALL DAY OR THE PRICE DID NOT CHANGE";

/// Format an amount as dollars with 3 decimal places, e.g. `$22600.002`
pub fn format_currency(value: f64) -> String {
    format!("${:.3}", value)
}

/// Outcome of a session, with buy and sell minutes mapped to clock times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Window the prices were recorded in
    pub window: TradingWindow,
    /// Raw scan result
    pub scan: ProfitScan,
    /// When to buy, `None` when there is no profit to be made
    pub buy_time: Option<NaiveTime>,
    /// When to sell, `None` when there is no profit to be made
    pub sell_time: Option<NaiveTime>,
}

impl ProfitReport {
    /// Map a scan onto a window
    pub fn from_scan(window: TradingWindow, scan: ProfitScan) -> Self {
        let (buy_time, sell_time) = if scan.is_degenerate() {
            (None, None)
        } else {
            (
                Some(window.clock_time(scan.buy.index)),
                Some(window.clock_time(scan.sell.index)),
            )
        };

        Self {
            window,
            scan,
            buy_time,
            sell_time,
        }
    }

    /// Best profit, zero when none can be made
    pub fn profit(&self) -> f64 {
        self.scan.profit
    }

    /// True when buying and selling are not applicable
    pub fn is_degenerate(&self) -> bool {
        self.scan.is_degenerate()
    }

    /// Profit formatted as currency
    pub fn formatted_profit(&self) -> String {
        format_currency(self.profit())
    }
}

impl fmt::Display for ProfitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TOTAL PROFIT IS: {}", self.formatted_profit())?;
        match (self.buy_time, self.sell_time) {
            (Some(buy_time), Some(sell_time)) => {
                writeln!(
                    f,
                    "TIME TO BUY: {} BUY AMOUNT: {}",
                    buy_time.format("%H:%M"),
                    self.scan.buy.value
                )?;
                write!(
                    f,
                    "TIME TO SELL: {} SELL AMOUNT: {}",
                    sell_time.format("%H:%M"),
                    self.scan.sell.value
                )
            }
            _ => {
                writeln!(f, "TIME TO BUY: {}", NOT_APPLICABLE)?;
                write!(f, "TIME TO SELL: {}", NOT_APPLICABLE)
            }
        }
    }
}

/// Evaluate a session given its opening and closing times
///
/// # Arguments
/// * `prices` - Price per minute since the open
/// * `open` - Opening time, e.g. `"10:00"`
/// * `close` - Closing time, e.g. `"16:00"`
///
/// # Returns
/// * `Result<ProfitReport>` - The report, or a parse, validation or calculation error
pub fn evaluate_session(prices: &[f64], open: &str, close: &str) -> Result<ProfitReport> {
    let window = TradingWindow::parse(open, close)?;
    evaluate_in_window(prices, &window, &mut NoopObserver)
}

/// Evaluate a session in an existing window, reporting scan progress to `observer`
pub fn evaluate_in_window<O>(
    prices: &[f64],
    window: &TradingWindow,
    observer: &mut O,
) -> Result<ProfitReport>
where
    O: ScanObserver + ?Sized,
{
    window.ensure_fits(prices.len())?;
    let scan = best_profit_with(prices, prices.len(), observer)?;

    tracing::info!(
        window = %window,
        length = prices.len(),
        profit = scan.profit,
        buy_index = scan.buy.index,
        sell_index = scan.sell.index,
        "evaluated trading session"
    );

    Ok(ProfitReport::from_scan(*window, scan))
}
