//! Unit tests for the pivot trendline channel

use auriga::models::{Bar, ChannelType};
use auriga::strategies::{AnalysisParams, ChannelStrategy, PivotTrendlineChannel};
use chrono::{Duration, TimeZone, Utc};

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, c)| Bar::new(*c, c + 0.3, c - 0.2, *c, 1000.0, t0 + Duration::hours(i as i64)))
        .collect()
}

/// Upward drift with a strong oscillation: pivots every ten bars
fn zigzag_bars(count: usize) -> Vec<Bar> {
    let closes: Vec<f64> = (0..count)
        .map(|i| 100.0 + i as f64 * 0.3 + 5.0 * (std::f64::consts::PI * i as f64 / 5.0).sin())
        .collect();
    bars_from_closes(&closes)
}

fn params() -> AnalysisParams {
    AnalysisParams::new(60, 20, 60)
}

#[test]
fn test_insufficient_data_returns_error_variant() {
    let strategy = PivotTrendlineChannel::default();
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert!(strategy.analyze(&bars_from_closes(&closes), &params()).is_error());
}

#[test]
fn test_monotone_series_has_insufficient_pivots() {
    let strategy = PivotTrendlineChannel::default();
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64 * 0.5).collect();
    let result = strategy.analyze(&bars_from_closes(&closes), &params());
    let reading = result.as_reading().unwrap();
    assert_eq!(reading.channel_type, ChannelType::Sideways);
    assert_eq!(reading.note, "insufficient pivots");
    assert_eq!(reading.position_pct, 50.0);
    // bounds fall back to the window extremes
    assert!(reading.upper_band >= reading.lower_band);
    assert_eq!(reading.details["high_pivots"].as_u64().unwrap(), 0);
}

#[test]
fn test_zigzag_uptrend_fits_ascending_channel() {
    let strategy = PivotTrendlineChannel::default();
    let bars = zigzag_bars(80);
    let result = strategy.analyze(&bars, &params());
    let reading = result.as_reading().unwrap();

    assert!(reading.details["high_pivots"].as_u64().unwrap() >= 3);
    assert!(reading.details["low_pivots"].as_u64().unwrap() >= 3);
    assert_eq!(reading.details["pattern"], "ascending channel");
    assert!(reading.details["high_slope"].as_f64().unwrap() > 0.0);
    assert!(reading.details["low_slope"].as_f64().unwrap() > 0.0);
    // drifting pivots never classify against the drift
    assert!(matches!(
        reading.channel_type,
        ChannelType::Up | ChannelType::Transitioning
    ));
    assert!(reading.position_pct >= 0.0 && reading.position_pct <= 100.0);
}

#[test]
fn test_zigzag_downtrend_fits_descending_channel() {
    let strategy = PivotTrendlineChannel::default();
    let closes: Vec<f64> = (0..80)
        .map(|i| 200.0 - i as f64 * 0.3 + 5.0 * (std::f64::consts::PI * i as f64 / 5.0).sin())
        .collect();
    let result = strategy.analyze(&bars_from_closes(&closes), &params());
    let reading = result.as_reading().unwrap();
    assert_eq!(reading.details["pattern"], "descending channel");
    assert!(matches!(
        reading.channel_type,
        ChannelType::Down | ChannelType::Transitioning
    ));
}

#[test]
fn test_analyze_is_idempotent() {
    let strategy = PivotTrendlineChannel::default();
    let bars = zigzag_bars(80);
    assert_eq!(
        strategy.analyze(&bars, &params()),
        strategy.analyze(&bars, &params())
    );
}
