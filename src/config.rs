//! Market hours configuration
//!
//! Defaults to 10:00-16:00. A JSON file can override either time:
//!
//! ```json
//! { "open": "09:30", "close": "16:00" }
//! ```

use anyhow::Context;
use minute_trade::TradingWindow;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OPEN: &str = "10:00";
pub const DEFAULT_CLOSE: &str = "16:00";

/// Opening and closing times of the exchange, as `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketHours {
    pub open: String,
    pub close: String,
}

impl Default for MarketHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl MarketHours {
    /// Read market hours from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Replace whichever times are given
    pub fn with_overrides(mut self, open: Option<&str>, close: Option<&str>) -> Self {
        if let Some(open) = open {
            self.open = open.to_string();
        }
        if let Some(close) = close {
            self.close = close.to_string();
        }
        self
    }

    /// Validated trading window
    pub fn window(&self) -> minute_trade::Result<TradingWindow> {
        TradingWindow::parse(&self.open, &self.close)
    }
}
