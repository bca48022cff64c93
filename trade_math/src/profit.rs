//! Best single-transaction profit over a minute price series
//!
//! Index `i` of a series is the price `i` minutes after the market opened.
//! [`best_profit`] finds one buy followed by one sell in two passes:
//!
//! 1. The sell point is the running maximum of the whole series, starting from
//!    the second minute since nothing can be sold at the open.
//! 2. The buy point is the running minimum over the minutes strictly before the
//!    sell point, starting from the opening price.
//!
//! Profit is the difference clamped at zero, so a day that only went down (or
//! never moved) yields a zero-profit scan rather than an error.
//!
//! The scan only ever pairs the running maximum with a minimum that precedes
//! it. [`optimal_profit`] is the single-pass "cheapest so far" optimum, which can
//! report more when the best pair does not involve the global maximum. It is
//! provided for comparison only.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A price observed at a minute offset from the open
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Minutes since the open
    pub index: usize,
    /// Price at that minute
    pub value: f64,
}

impl PricePoint {
    fn at(prices: &[f64], index: usize) -> Self {
        Self {
            index,
            value: prices[index],
        }
    }
}

/// Result of a profit scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitScan {
    /// Where to sell
    pub sell: PricePoint,
    /// Where to buy, always strictly before `sell`
    pub buy: PricePoint,
    /// `sell.value - buy.value`, or zero when that is negative
    pub profit: f64,
}

impl ProfitScan {
    /// True when no profitable transaction exists
    pub fn is_degenerate(&self) -> bool {
        self.profit == 0.0
    }

    /// Number of minutes the position is held
    pub fn holding_minutes(&self) -> usize {
        self.sell.index - self.buy.index
    }
}

/// Diagnostic hook called while a scan runs.
///
/// Every method has an empty default, so implementors only override what they
/// want to see. The scan result never depends on the observer.
pub trait ScanObserver {
    /// A new running maximum became the sell candidate
    fn on_new_maximum(&mut self, _point: PricePoint) {}

    /// A new running minimum became the buy candidate
    fn on_new_minimum(&mut self, _point: PricePoint) {}

    /// The scan finished
    fn on_complete(&mut self, _scan: &ProfitScan) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Observer that forwards scan progress to `tracing`
///
/// Extremum updates are emitted at `trace` level and the final result once at
/// `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_new_maximum(&mut self, point: PricePoint) {
        tracing::trace!(index = point.index, value = point.value, "new maximum price");
    }

    fn on_new_minimum(&mut self, point: PricePoint) {
        tracing::trace!(index = point.index, value = point.value, "new minimum price");
    }

    fn on_complete(&mut self, scan: &ProfitScan) {
        tracing::debug!(
            buy_index = scan.buy.index,
            buy_value = scan.buy.value,
            sell_index = scan.sell.index,
            sell_value = scan.sell.value,
            profit = scan.profit,
            "profit scan complete"
        );
    }
}

/// Check that the first `length` prices can be scanned
fn validate_series(prices: &[f64], length: usize) -> Result<()> {
    if length > prices.len() {
        return Err(MathError::InvalidInput(format!(
            "Requested length {} exceeds the {} prices supplied",
            length,
            prices.len()
        )));
    }

    if length < 2 {
        return Err(MathError::InsufficientData(format!(
            "Need at least 2 prices to buy and then sell, have {}",
            length
        )));
    }

    if let Some((index, value)) = prices[..length]
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(MathError::InvalidInput(format!(
            "Price at minute {} must be a non-negative number, got {}",
            index, value
        )));
    }

    Ok(())
}

/// Find the best buy-then-sell pair within the first `length` prices
///
/// # Arguments
/// * `prices` - Price per minute since the open
/// * `length` - Number of leading prices to scan
///
/// # Returns
/// * `Result<ProfitScan>` - The sell point, the buy point and the clamped profit
pub fn best_profit(prices: &[f64], length: usize) -> Result<ProfitScan> {
    best_profit_with(prices, length, &mut NoopObserver)
}

/// Same as [`best_profit`], reporting progress to `observer`
pub fn best_profit_with<O>(prices: &[f64], length: usize, observer: &mut O) -> Result<ProfitScan>
where
    O: ScanObserver + ?Sized,
{
    validate_series(prices, length)?;
    let prices = &prices[..length];

    // Strict comparison keeps the earliest of equal maxima.
    let mut sell = PricePoint::at(prices, 1);
    for (index, &value) in prices.iter().enumerate().skip(1) {
        if value > sell.value {
            sell = PricePoint { index, value };
            observer.on_new_maximum(sell);
        }
    }

    let mut buy = PricePoint::at(prices, 0);
    for (index, &value) in prices.iter().enumerate().take(sell.index).skip(1) {
        if value < buy.value {
            buy = PricePoint { index, value };
            observer.on_new_minimum(buy);
        }
    }

    let mut profit = sell.value - buy.value;
    if profit < 0.0 {
        profit = 0.0;
    }

    let scan = ProfitScan { sell, buy, profit };
    observer.on_complete(&scan);
    Ok(scan)
}

/// Best buy-then-sell pair by tracking the cheapest price seen so far
///
/// Considers every pair, so its profit is never lower than [`best_profit`].
/// Ties keep the earliest pair.
pub fn optimal_profit(prices: &[f64]) -> Result<ProfitScan> {
    validate_series(prices, prices.len())?;

    let mut cheapest = PricePoint::at(prices, 0);
    let mut best = ProfitScan {
        sell: PricePoint::at(prices, 1),
        buy: cheapest,
        profit: 0.0,
    };
    let mut best_gain = f64::NEG_INFINITY;

    for (index, &value) in prices.iter().enumerate().skip(1) {
        let gain = value - cheapest.value;
        if gain > best_gain {
            best_gain = gain;
            best.buy = cheapest;
            best.sell = PricePoint { index, value };
        }
        if value < cheapest.value {
            cheapest = PricePoint { index, value };
        }
    }

    best.profit = best_gain.max(0.0);
    Ok(best)
}
