//! Unit tests for channel result entities

use auriga::models::channel::position_pct;
use auriga::models::{ChannelReading, ChannelResult, ChannelType};
use std::collections::BTreeMap;

#[test]
fn test_position_pct_interior() {
    assert_eq!(position_pct(105.0, 110.0, 100.0), 50.0);
    assert_eq!(position_pct(102.5, 110.0, 100.0), 25.0);
}

#[test]
fn test_position_pct_clamps() {
    assert_eq!(position_pct(120.0, 110.0, 100.0), 100.0);
    assert_eq!(position_pct(90.0, 110.0, 100.0), 0.0);
}

#[test]
fn test_position_pct_degenerate_band() {
    assert_eq!(position_pct(105.0, 100.0, 100.0), 50.0);
    // inverted band also collapses to the midpoint
    assert_eq!(position_pct(105.0, 100.0, 110.0), 50.0);
}

fn sample_reading() -> ChannelResult {
    ChannelResult::Reading(ChannelReading {
        strategy_name: "linear regression".to_string(),
        channel_type: ChannelType::Up,
        current_price: 2050.0,
        upper_band: 2070.0,
        lower_band: 2030.0,
        center: 2050.0,
        position_pct: 50.0,
        note: "bullish alignment".to_string(),
        details: BTreeMap::new(),
    })
}

#[test]
fn test_reading_serialization_field_names() {
    let json = serde_json::to_value(sample_reading()).unwrap();
    assert_eq!(json["strategy_name"], "linear regression");
    assert_eq!(json["channel_type"], "Up");
    assert_eq!(json["upper_band"], 2070.0);
    assert_eq!(json["lower_band"], 2030.0);
    assert_eq!(json["center"], 2050.0);
    assert_eq!(json["position_pct"], 50.0);
    assert!(json.get("error").is_none());
}

#[test]
fn test_error_variant_round_trip() {
    let error = ChannelResult::error("range channel", "insufficient data: need 30 bars, got 5");
    let json = serde_json::to_string(&error).unwrap();
    let back: ChannelResult = serde_json::from_str(&json).unwrap();
    assert!(back.is_error());
    assert_eq!(back.strategy_name(), "range channel");
    assert_eq!(back.channel_type(), None);
}

#[test]
fn test_reading_round_trip_picks_reading_variant() {
    let json = serde_json::to_string(&sample_reading()).unwrap();
    let back: ChannelResult = serde_json::from_str(&json).unwrap();
    assert!(!back.is_error());
    assert_eq!(back.channel_type(), Some(ChannelType::Up));
}

#[test]
fn test_channel_type_labels() {
    assert_eq!(ChannelType::Up.label(), "uptrend channel");
    assert_eq!(ChannelType::Sideways.label(), "sideways range");
}
