use approx::assert_abs_diff_eq;
use minute_trade::utils::{load_price_series, parse_price_list};
use minute_trade::{
    evaluate_in_window, evaluate_session, generate_minute_prices, minutes_open, PricePoint,
    SampleSeries, ScanObserver, TradeError, TradingWindow,
};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[rstest]
#[case(SampleSeries::Rising, Some(("10:00", "10:04")))]
#[case(SampleSeries::Falling, None)]
#[case(SampleSeries::PeakMidday, Some(("10:00", "10:02")))]
#[case(SampleSeries::Flat, None)]
#[case(SampleSeries::ThreePrices, Some(("10:00", "10:01")))]
#[case(SampleSeries::MinSecondMaxLast, Some(("10:01", "10:04")))]
#[case(SampleSeries::LowestLast, Some(("10:00", "10:01")))]
#[case(SampleSeries::MaxFirst, Some(("10:02", "10:03")))]
fn test_sample_sessions(#[case] sample: SampleSeries, #[case] times: Option<(&str, &str)>) {
    let report = evaluate_session(sample.prices(), "10:00", "11:02").unwrap();

    assert_abs_diff_eq!(report.profit(), sample.expected_profit(), epsilon = 1e-9);
    let formatted = |t: Option<chrono::NaiveTime>| t.map(|t| t.format("%H:%M").to_string());
    assert_eq!(
        (formatted(report.buy_time), formatted(report.sell_time)),
        times
            .map(|(buy, sell)| (Some(buy.to_string()), Some(sell.to_string())))
            .unwrap_or((None, None))
    );
}

#[test]
fn test_profitable_reports_buy_before_sell() {
    for seed in 0..50 {
        let prices = generate_minute_prices(360, 100.0, 0.05, 0.0, seed);
        let report = evaluate_session(&prices, "10:00", "16:00").unwrap();

        assert!(report.profit() >= 0.0);
        if let (Some(buy), Some(sell)) = (report.buy_time, report.sell_time) {
            assert!(buy < sell);
        }
    }
}

#[test]
fn test_full_day_must_fit_window() {
    let prices = generate_minute_prices(361, 100.0, 0.01, 0.0, 3);

    assert_eq!(minutes_open("10:00", "16:00").unwrap(), 360);
    assert!(matches!(
        evaluate_session(&prices, "10:00", "16:00"),
        Err(TradeError::ValidationError(_))
    ));
    assert!(evaluate_session(&prices[..360], "10:00", "16:00").is_ok());
}

#[derive(Default)]
struct CountingObserver {
    updates: usize,
    completions: usize,
}

impl ScanObserver for CountingObserver {
    fn on_new_maximum(&mut self, _point: PricePoint) {
        self.updates += 1;
    }

    fn on_new_minimum(&mut self, _point: PricePoint) {
        self.updates += 1;
    }

    fn on_complete(&mut self, _scan: &minute_trade::ProfitScan) {
        self.completions += 1;
    }
}

#[test]
fn test_observer_is_injected() {
    let window = TradingWindow::default();
    let mut observer = CountingObserver::default();
    let prices = SampleSeries::MaxFirst.prices();

    let report = evaluate_in_window(prices, &window, &mut observer).unwrap();

    assert_eq!(observer.completions, 1);
    assert_eq!(observer.updates, 3);
    assert_eq!(report, evaluate_session(prices, "10:00", "16:00").unwrap());
}

#[test]
fn test_load_price_series_by_header() {
    let file = write_csv("minute,price,volume\n0,5.0,100\n1,2.0,120\n2,1.0,90\n3,4.0,80\n");
    let prices = load_price_series(file.path()).unwrap();

    assert_eq!(prices, vec![5.0, 2.0, 1.0, 4.0]);
}

#[test]
fn test_load_price_series_uses_last_column() {
    let file = write_csv("time,value\n10:00,400.001\n10:01,1500.002\n");
    let prices = load_price_series(file.path()).unwrap();

    assert_eq!(prices, vec![400.001, 1500.002]);
}

#[test]
fn test_load_price_series_errors() {
    let empty = write_csv("minute,price\n");
    assert!(matches!(
        load_price_series(empty.path()),
        Err(TradeError::DataLoadError(_))
    ));

    let bad = write_csv("minute,price\n0,1.0\n1,oops\n");
    let err = load_price_series(bad.path()).unwrap_err();
    assert!(err.to_string().contains("line 3"));

    assert!(matches!(
        load_price_series("/definitely/not/here.csv"),
        Err(TradeError::DataLoadError(_))
    ));
}

#[test]
fn test_loaded_prices_evaluate() {
    let file = write_csv("price\n0.023\n1500.002\n0.023\n");
    let prices = load_price_series(file.path()).unwrap();
    let report = evaluate_session(&prices, "09:30", "16:00").unwrap();

    assert_eq!(report.formatted_profit(), "$1499.979");
    assert_eq!(
        parse_price_list("0.023, 1500.002, 0.023").unwrap(),
        prices
    );
}
