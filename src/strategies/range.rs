//! Range channel
//!
//! Rolling max(high) / min(low) bounds. Direction comes from fitting
//! independent slopes to the two band series: a channel only counts as
//! directional when both bounds migrate the same way.

use serde_json::json;
use std::collections::BTreeMap;

use crate::common::math;
use crate::models::channel::position_pct;
use crate::models::{Bar, ChannelReading, ChannelResult, ChannelType};
use crate::strategies::{insufficient_data, trend_strength_tail, AnalysisParams, ChannelStrategy};

const MIN_SLOPE_POINTS: usize = 10;
const PROXIMITY_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeParams {
    pub period: usize,
    /// Minimum trend-strength for a directional call
    pub trend_threshold: f64,
    /// Below this trend-strength the window is flat regardless of slopes
    pub quiet_threshold: f64,
}

impl Default for RangeParams {
    fn default() -> Self {
        Self {
            period: 20,
            trend_threshold: 20.0,
            quiet_threshold: 15.0,
        }
    }
}

pub struct RangeChannel {
    params: RangeParams,
}

impl RangeChannel {
    pub fn new(params: RangeParams) -> Self {
        Self { params }
    }
}

impl Default for RangeChannel {
    fn default() -> Self {
        Self::new(RangeParams::default())
    }
}

impl ChannelStrategy for RangeChannel {
    fn name(&self) -> &'static str {
        "range"
    }

    fn display_name(&self) -> &'static str {
        "range channel"
    }

    fn analyze(&self, bars: &[Bar], params: &AnalysisParams) -> ChannelResult {
        let min_bars = self.params.period + 10;
        if bars.len() < min_bars {
            return insufficient_data(self.display_name(), min_bars, bars.len());
        }

        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();

        let uppers = math::rolling_max(&highs, self.params.period);
        let lowers = math::rolling_min(&lows, self.params.period);

        let upper = uppers[uppers.len() - 1];
        let lower = lowers[lowers.len() - 1];
        let middle = (upper + lower) / 2.0;
        let width = if middle != 0.0 {
            (upper - lower) / middle
        } else {
            0.0
        };

        let upper_slope = band_slope(&uppers, params.lookback);
        let lower_slope = band_slope(&lowers, params.lookback);

        let strength = trend_strength_tail(bars, params.lookback);

        let channel_type = if upper_slope > 0.0
            && lower_slope > 0.0
            && strength >= self.params.trend_threshold
        {
            ChannelType::Up
        } else if upper_slope < 0.0
            && lower_slope < 0.0
            && strength >= self.params.trend_threshold
        {
            ChannelType::Down
        } else if strength < self.params.quiet_threshold {
            ChannelType::Sideways
        } else if (upper_slope > 0.0) != (lower_slope > 0.0) {
            ChannelType::Transitioning
        } else {
            ChannelType::Sideways
        };

        let current_price = bars[bars.len() - 1].close;
        let dist_to_upper = if upper > lower {
            (upper - current_price) / (upper - lower)
        } else {
            0.5
        };
        let note = if dist_to_upper < PROXIMITY_FRACTION {
            "near upper band (possible breakout)"
        } else if dist_to_upper > 1.0 - PROXIMITY_FRACTION {
            "near lower band (possible breakdown)"
        } else {
            "inside channel"
        };

        let mut details = BTreeMap::new();
        details.insert("upper_slope".to_string(), json!(upper_slope));
        details.insert("lower_slope".to_string(), json!(lower_slope));
        details.insert("channel_width".to_string(), json!(width));
        details.insert("trend_strength".to_string(), json!(strength));
        details.insert("period".to_string(), json!(self.params.period));

        ChannelResult::Reading(ChannelReading {
            strategy_name: self.display_name().to_string(),
            channel_type,
            current_price,
            upper_band: upper,
            lower_band: lower,
            center: middle,
            position_pct: position_pct(current_price, upper, lower),
            note: note.to_string(),
            details,
        })
    }
}

fn band_slope(series: &[f64], lookback: usize) -> f64 {
    let tail = &series[series.len().saturating_sub(lookback)..];
    if tail.len() >= MIN_SLOPE_POINTS {
        math::slope_of(tail).unwrap_or(0.0)
    } else {
        0.0
    }
}
