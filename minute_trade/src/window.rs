//! Trading window between market open and close
//!
//! Times of day are 24-hour `HH:MM` strings (`HH:MM:SS` is accepted too).
//! A price series index is a whole-minute offset from the opening time.

use crate::{Result, TradeError};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parse a 24-hour time of day such as `"10:00"`
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|source| TradeError::ParseError {
            input: input.to_string(),
            source,
        })
}

/// Whole minutes between `open` and `close`, truncated toward zero
///
/// The order of the two times is not checked, so a close before the open
/// gives a negative count. Use [`TradingWindow::parse`] for a validated window.
///
/// # Arguments
/// * `open` - Opening time, e.g. `"10:00"`
/// * `close` - Closing time, e.g. `"16:00"`
///
/// # Returns
/// * `Result<i64>` - Minutes the market is open, or a parse error
pub fn minutes_open(open: &str, close: &str) -> Result<i64> {
    let open = parse_time_of_day(open)?;
    let close = parse_time_of_day(close)?;
    let minutes = (close - open).num_minutes();
    tracing::debug!(%open, %close, minutes, "computed minutes the market is open");
    Ok(minutes)
}

/// Validated open/close pair for one trading day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingWindow {
    open: NaiveTime,
    close: NaiveTime,
}

impl TradingWindow {
    /// Create a window, rejecting a close that is not after the open
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        if close <= open {
            return Err(TradeError::ValidationError(format!(
                "Market close {} must be after market open {}",
                close.format("%H:%M"),
                open.format("%H:%M")
            )));
        }

        Ok(Self { open, close })
    }

    /// Parse both times and create a window
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Self::new(parse_time_of_day(open)?, parse_time_of_day(close)?)
    }

    /// Opening time
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    /// Closing time
    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Whole minutes the market is open
    pub fn minutes(&self) -> usize {
        usize::try_from((self.close - self.open).num_minutes()).unwrap_or_default()
    }

    /// Wall-clock time `offset` minutes after the open
    pub fn clock_time(&self, offset: usize) -> NaiveTime {
        self.open + Duration::minutes(offset as i64)
    }

    /// Check that a series of `length` minute prices fits in the window
    pub fn ensure_fits(&self, length: usize) -> Result<()> {
        let minutes = self.minutes();
        if length > minutes {
            return Err(TradeError::ValidationError(format!(
                "Price series is too long for the trading window {}. Series length: {}. Minutes open: {}",
                self, length, minutes
            )));
        }
        Ok(())
    }
}

impl Default for TradingWindow {
    /// 10:00 to 16:00
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(10, 0, 0).expect("10:00 is a valid time"),
            close: NaiveTime::from_hms_opt(16, 0, 0).expect("16:00 is a valid time"),
        }
    }
}

impl fmt::Display for TradingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.open.format("%H:%M"),
            self.close.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10:00", "10:02", 2)]
    #[case("10:00", "16:00", 360)]
    #[case("09:30", "16:00", 390)]
    #[case("10:00", "11:02", 62)]
    #[case("10:00:00", "10:02:59", 2)]
    fn test_minutes_open(#[case] open: &str, #[case] close: &str, #[case] expected: i64) {
        assert_eq!(minutes_open(open, close).unwrap(), expected);
    }

    #[test]
    fn test_minutes_open_does_not_check_order() {
        assert_eq!(minutes_open("16:00", "10:00").unwrap(), -360);
    }

    #[rstest]
    #[case("")]
    #[case("ten")]
    #[case("25:00")]
    #[case("10:60")]
    #[case("10-00")]
    fn test_malformed_times(#[case] input: &str) {
        assert!(matches!(
            minutes_open(input, "16:00"),
            Err(TradeError::ParseError { .. })
        ));
        assert!(matches!(
            minutes_open("10:00", input),
            Err(TradeError::ParseError { .. })
        ));
    }

    #[test]
    fn test_window_rejects_close_not_after_open() {
        assert!(matches!(
            TradingWindow::parse("16:00", "10:00"),
            Err(TradeError::ValidationError(_))
        ));
        assert!(matches!(
            TradingWindow::parse("10:00", "10:00"),
            Err(TradeError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_window() {
        let window = TradingWindow::default();

        assert_eq!(window.minutes(), 360);
        assert_eq!(window.to_string(), "10:00-16:00");
        assert_eq!(window, TradingWindow::parse("10:00", "16:00").unwrap());
    }

    #[test]
    fn test_clock_time() {
        let window = TradingWindow::parse("10:00", "11:02").unwrap();

        assert_eq!(window.clock_time(0), window.open());
        assert_eq!(window.clock_time(5).format("%H:%M").to_string(), "10:05");
        assert_eq!(window.clock_time(61).format("%H:%M").to_string(), "11:01");
    }

    #[test]
    fn test_ensure_fits() {
        let window = TradingWindow::parse("10:00", "10:05").unwrap();

        assert!(window.ensure_fits(5).is_ok());
        let err = window.ensure_fits(6).unwrap_err();
        assert!(matches!(err, TradeError::ValidationError(_)));
        assert!(err.to_string().contains("Series length: 6"));
        assert!(err.to_string().contains("Minutes open: 5"));
    }
}
