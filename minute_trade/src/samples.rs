//! Sample price series
//!
//! Named demo days with known outcomes, and a seeded generator for synthetic
//! minute-by-minute sessions.

use crate::TradeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Demo trading days with a known best profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleSeries {
    /// Price goes up all day
    Rising,
    /// Price goes down all day
    Falling,
    /// Highest price in the middle of the day
    PeakMidday,
    /// Price never changes
    Flat,
    /// Only three prices
    ThreePrices,
    /// Lowest price second, highest price last
    MinSecondMaxLast,
    /// Lowest price is the last one
    LowestLast,
    /// Highest price is the first one
    MaxFirst,
}

impl SampleSeries {
    /// Every sample, in a stable order
    pub const ALL: [SampleSeries; 8] = [
        SampleSeries::Rising,
        SampleSeries::Falling,
        SampleSeries::PeakMidday,
        SampleSeries::Flat,
        SampleSeries::ThreePrices,
        SampleSeries::MinSecondMaxLast,
        SampleSeries::LowestLast,
        SampleSeries::MaxFirst,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SampleSeries::Rising => "rising",
            SampleSeries::Falling => "falling",
            SampleSeries::PeakMidday => "peak-midday",
            SampleSeries::Flat => "flat",
            SampleSeries::ThreePrices => "three-prices",
            SampleSeries::MinSecondMaxLast => "min-second-max-last",
            SampleSeries::LowestLast => "lowest-last",
            SampleSeries::MaxFirst => "max-first",
        }
    }

    /// Prices for each minute since the open
    pub fn prices(&self) -> &'static [f64] {
        match self {
            SampleSeries::Rising => &[400.001, 1500.002, 9200.00, 14000.0, 23000.003],
            SampleSeries::Falling => &[40000.001, 1500.002, 200.00, 14.0, 3.003],
            SampleSeries::PeakMidday => &[400.001, 1500.002, 119200.00, 14000.0, 23000.003],
            SampleSeries::Flat => &[400.001, 400.001, 400.001, 400.001, 400.001],
            SampleSeries::ThreePrices => &[0.023, 1500.002, 0.023],
            SampleSeries::MinSecondMaxLast => &[4400.001, 150.002, 9200.003, 4000.000, 23000.003],
            SampleSeries::LowestLast => &[400.001, 1500.002, 1.500, 20.000, 1.003],
            SampleSeries::MaxFirst => &[5.0, 2.0, 1.0, 4.000, 0.500],
        }
    }

    /// Best profit the scan reports for this day
    pub fn expected_profit(&self) -> f64 {
        match self {
            SampleSeries::Rising => 22600.002,
            SampleSeries::Falling | SampleSeries::Flat => 0.0,
            SampleSeries::PeakMidday => 118799.999,
            SampleSeries::ThreePrices => 1499.979,
            SampleSeries::MinSecondMaxLast => 22850.001,
            SampleSeries::LowestLast => 1100.001,
            SampleSeries::MaxFirst => 3.0,
        }
    }
}

impl fmt::Display for SampleSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleSeries {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleSeries::ALL
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = SampleSeries::ALL.iter().map(|s| s.name()).collect();
                TradeError::InvalidData(format!(
                    "Unknown sample '{}', expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Generate a synthetic session with one price per minute
///
/// Volatility follows a U shape over the day, higher near the open and the
/// close. The same seed always produces the same series.
///
/// # Arguments
/// * `minutes` - Number of prices to generate
/// * `base_price` - Opening price
/// * `volatility` - Price volatility factor (0.0-1.0)
/// * `trend` - Per-minute drift (-0.001 to 0.001 for reasonable values)
/// * `seed` - Random seed
///
/// # Returns
/// * `Vec<f64>` - Generated prices, never negative
pub fn generate_minute_prices(
    minutes: usize,
    base_price: f64,
    volatility: f64,
    trend: f64,
    seed: u64,
) -> Vec<f64> {
    let mut random = StdRng::seed_from_u64(seed);
    let mut prices = Vec::with_capacity(minutes);
    let mut current_price = base_price.max(0.0);

    for minute in 0..minutes {
        prices.push(current_price);

        let minute_factor = minute as f64 / minutes as f64;
        let intraday_volatility = 1.0 + 0.5 * (4.0 * (minute_factor - 0.5).powi(2));

        let price_change =
            current_price * volatility * intraday_volatility * (random.gen::<f64>() - 0.5);
        let drift = current_price * trend;

        current_price = (current_price + price_change + drift).max(0.0);
    }

    prices
}
