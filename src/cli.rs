//! Command-line front end
//!
//! Resolves the price source and market hours, evaluates the session and
//! renders the report as text or JSON.

use crate::config::MarketHours;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use minute_trade::utils::{load_price_series, parse_price_list};
use minute_trade::{
    evaluate_in_window, format_currency, generate_minute_prices, ProfitReport, ProfitScan,
    SampleSeries, TracingObserver,
};
use serde::Serialize;
use std::path::PathBuf;
use trade_math::optimal_profit;

/// Sample shown when no price source is given
pub const DEFAULT_SAMPLE: SampleSeries = SampleSeries::Falling;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "max-daily-profit")]
#[command(about = "Best single buy-then-sell profit over a day of minute prices", long_about = None)]
pub struct Args {
    /// Comma-separated prices, one per minute since the open
    #[arg(long, group = "source")]
    pub prices: Option<String>,

    /// CSV file with a header row; reads the `price` or `close` column
    #[arg(long, group = "source")]
    pub csv: Option<PathBuf>,

    /// Named demo day: rising, falling, peak-midday, flat, three-prices,
    /// min-second-max-last, lowest-last, max-first
    #[arg(long, group = "source")]
    pub sample: Option<SampleSeries>,

    /// Generate a synthetic day with this many minutes
    #[arg(long, group = "source")]
    pub synthetic: Option<usize>,

    /// Seed for --synthetic
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// JSON file with market hours
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Market opening time (HH:MM)
    #[arg(long, env = "MARKET_OPEN")]
    pub open: Option<String>,

    /// Market closing time (HH:MM)
    #[arg(long, env = "MARKET_CLOSE")]
    pub close: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also compute the single-pass optimum and warn when it is higher
    #[arg(long)]
    pub compare: bool,

    /// More logging (-v info, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    report: &'a ProfitReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimal: Option<ProfitScan>,
}

/// Install the stderr log subscriber
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn market_hours(args: &Args) -> anyhow::Result<MarketHours> {
    let hours = match &args.config {
        Some(path) => MarketHours::load(path)?,
        None => MarketHours::default(),
    };
    Ok(hours.with_overrides(args.open.as_deref(), args.close.as_deref()))
}

fn load_prices(args: &Args) -> anyhow::Result<Vec<f64>> {
    if let Some(list) = &args.prices {
        return parse_price_list(list).context("failed to parse --prices");
    }
    if let Some(path) = &args.csv {
        return load_price_series(path)
            .with_context(|| format!("failed to load prices from {}", path.display()));
    }
    if let Some(minutes) = args.synthetic {
        return Ok(generate_minute_prices(minutes, 100.0, 0.02, 0.0, args.seed));
    }

    let sample = args.sample.unwrap_or(DEFAULT_SAMPLE);
    tracing::info!(sample = %sample, "using sample prices");
    Ok(sample.prices().to_vec())
}

/// Evaluate the session described by `args` and render the output
pub fn run(args: &Args) -> anyhow::Result<String> {
    let hours = market_hours(args)?;
    let window = hours
        .window()
        .with_context(|| format!("invalid market hours {}-{}", hours.open, hours.close))?;
    let prices = load_prices(args)?;

    let report = evaluate_in_window(&prices, &window, &mut TracingObserver)
        .context("failed to evaluate trading session")?;

    let optimal = if args.compare {
        let optimal = optimal_profit(&prices)?;
        if optimal.profit > report.profit() {
            tracing::warn!(
                two_pass = report.profit(),
                single_pass = optimal.profit,
                "single-pass optimum is higher than the reported profit"
            );
        }
        Some(optimal)
    } else {
        None
    };

    match args.format {
        OutputFormat::Text => {
            let mut output = report.to_string();
            if let Some(optimal) = optimal {
                output.push_str(&format!(
                    "\nBEST POSSIBLE PROFIT (SINGLE PASS): {}",
                    format_currency(optimal.profit)
                ));
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                report: &report,
                optimal,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
