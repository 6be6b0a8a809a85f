//! Unit tests for the linear regression channel

use auriga::models::{Bar, ChannelResult, ChannelType};
use auriga::strategies::{AnalysisParams, ChannelStrategy, RegressionChannel};
use chrono::{Duration, TimeZone, Utc};

fn trending_bars(count: usize, start: f64, step: f64) -> Vec<Bar> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let price = start + i as f64 * step;
            Bar::new(
                price,
                price + 0.3,
                price - 0.2,
                price,
                1000.0,
                t0 + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn params() -> AnalysisParams {
    AnalysisParams::new(60, 20, 60)
}

#[test]
fn test_insufficient_data_returns_error_variant() {
    let strategy = RegressionChannel::default();
    let bars = trending_bars(30, 100.0, 0.5);
    let result = strategy.analyze(&bars, &params());
    match result {
        ChannelResult::Error(e) => {
            assert!(e.error.contains("insufficient data"));
            assert_eq!(e.strategy_name, "linear regression");
        }
        ChannelResult::Reading(_) => panic!("expected error variant"),
    }
}

#[test]
fn test_perfect_ascending_line_is_never_down() {
    let strategy = RegressionChannel::default();
    let bars = trending_bars(200, 100.0, 0.5);
    let result = strategy.analyze(&bars, &params());
    let reading = result.as_reading().expect("expected a reading");

    let r_squared = reading.details["r_squared"].as_f64().unwrap();
    assert!(r_squared > 0.99, "zero-noise line should fit, got {r_squared}");
    assert_ne!(reading.channel_type, ChannelType::Down);
    assert!(matches!(
        reading.channel_type,
        ChannelType::Up | ChannelType::Transitioning
    ));
}

#[test]
fn test_zero_residual_band_collapses_to_midpoint() {
    // exactly representable halves keep the residuals at exactly zero
    let strategy = RegressionChannel::default();
    let bars = trending_bars(200, 100.0, 0.5);
    let result = strategy.analyze(&bars, &params());
    let reading = result.as_reading().unwrap();
    assert_eq!(reading.upper_band, reading.lower_band);
    assert_eq!(reading.position_pct, 50.0);
}

#[test]
fn test_descending_line_is_down() {
    let strategy = RegressionChannel::default();
    let bars = trending_bars(200, 300.0, -0.5);
    let result = strategy.analyze(&bars, &params());
    let reading = result.as_reading().unwrap();
    assert_eq!(reading.channel_type, ChannelType::Down);
    assert_eq!(reading.note, "bearish alignment");
}

#[test]
fn test_analyze_is_idempotent() {
    let strategy = RegressionChannel::default();
    let bars = trending_bars(200, 100.0, 0.5);
    let first = strategy.analyze(&bars, &params());
    let second = strategy.analyze(&bars, &params());
    assert_eq!(first, second);
}

#[test]
fn test_position_pct_in_range_on_noisy_series() {
    let strategy = RegressionChannel::default();
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bars: Vec<Bar> = (0..200)
        .map(|i| {
            let price = 100.0 + i as f64 * 0.5 + 4.0 * ((i as f64) * 0.7).sin();
            Bar::new(
                price,
                price + 0.5,
                price - 0.5,
                price,
                1000.0,
                t0 + Duration::hours(i as i64),
            )
        })
        .collect();
    let result = strategy.analyze(&bars, &params());
    let reading = result.as_reading().unwrap();
    assert!(reading.position_pct >= 0.0 && reading.position_pct <= 100.0);
    assert!(reading.lower_band <= reading.center && reading.center <= reading.upper_band);
}
