//! Utility functions for loading price series
//!
//! Prices come either from a CSV file or from a comma-separated list typed on
//! the command line.

use crate::{Result, TradeError};
use std::path::Path;

/// Load one price per minute from a CSV file
///
/// The file must have a header row. Prices are read from the column named
/// `price` or `close` (case-insensitive), or from the last column when neither
/// exists:
///
/// ```text
/// minute,price
/// 0,400.001
/// 1,1500.002
/// ```
///
/// # Arguments
/// * `file_path` - Path to the CSV file
///
/// # Returns
/// * `Result<Vec<f64>>` - Prices in file order, or error
pub fn load_price_series<P: AsRef<Path>>(file_path: P) -> Result<Vec<f64>> {
    let file_path = file_path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(file_path)
        .map_err(|e| {
            TradeError::DataLoadError(format!(
                "Failed to open {}: {}",
                file_path.display(),
                e
            ))
        })?;

    let headers = reader
        .headers()
        .map_err(|e| TradeError::DataLoadError(format!("Error reading header row: {}", e)))?
        .clone();
    let column = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("price") || h.eq_ignore_ascii_case("close"))
        .or_else(|| headers.len().checked_sub(1))
        .ok_or_else(|| TradeError::DataLoadError("CSV header row is empty".to_string()))?;

    let mut prices = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let line = i + 2;
        let record = record
            .map_err(|e| TradeError::DataLoadError(format!("Error reading line {}: {}", line, e)))?;

        let field = record.get(column).ok_or_else(|| {
            TradeError::DataLoadError(format!("Missing price column at line {}", line))
        })?;

        let price = field.parse::<f64>().map_err(|e| {
            TradeError::DataLoadError(format!("Invalid price at line {}: {}", line, e))
        })?;
        prices.push(price);
    }

    if prices.is_empty() {
        return Err(TradeError::DataLoadError(
            "No prices found in file".to_string(),
        ));
    }

    tracing::debug!(path = %file_path.display(), count = prices.len(), "loaded price series");
    Ok(prices)
}

/// Parse a comma-separated list of prices, e.g. `"5.0, 2.0, 1.0"`
pub fn parse_price_list(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse::<f64>().map_err(|e| {
                TradeError::InvalidData(format!("Invalid price '{}' at position {}: {}", s, i, e))
            })
        })
        .collect()
}
