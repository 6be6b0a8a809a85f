//! Pivot trendline channel
//!
//! Detects local extremes in the high/low series and fits independent
//! trendlines through them: the high-pivot line is resistance, the
//! low-pivot line is support. Extrapolating both to the final bar gives the
//! channel bounds. Converging or diverging lines read as a range, not a
//! trend.

use serde_json::json;
use std::collections::BTreeMap;

use crate::common::math;
use crate::models::channel::position_pct;
use crate::models::{Bar, ChannelReading, ChannelResult, ChannelType};
use crate::strategies::{insufficient_data, trend_strength_tail, AnalysisParams, ChannelStrategy};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotParams {
    /// Bars on each side a pivot must dominate
    pub window: usize,
    /// Minimum trend-strength for a directional call
    pub trend_threshold: f64,
    /// Pivot highs and lows each required before trendlines are fit
    pub min_pivots: usize,
}

impl Default for PivotParams {
    fn default() -> Self {
        Self {
            window: 5,
            trend_threshold: 20.0,
            min_pivots: 3,
        }
    }
}

pub struct PivotTrendlineChannel {
    params: PivotParams,
}

impl PivotTrendlineChannel {
    pub fn new(params: PivotParams) -> Self {
        Self { params }
    }
}

impl Default for PivotTrendlineChannel {
    fn default() -> Self {
        Self::new(PivotParams::default())
    }
}

enum PivotKind {
    High,
    Low,
}

impl ChannelStrategy for PivotTrendlineChannel {
    fn name(&self) -> &'static str {
        "pivot-trendline"
    }

    fn display_name(&self) -> &'static str {
        "pivot trendline"
    }

    fn analyze(&self, bars: &[Bar], params: &AnalysisParams) -> ChannelResult {
        if bars.len() < params.lookback {
            return insufficient_data(self.display_name(), params.lookback, bars.len());
        }

        let window = &bars[bars.len() - params.lookback..];
        let highs: Vec<f64> = window.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = window.iter().map(|b| b.low).collect();
        let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
        let current_price = match closes.last() {
            Some(c) => *c,
            None => return ChannelResult::error(self.display_name(), "empty analysis window"),
        };

        let (high_idx, high_vals) = find_pivots(&highs, self.params.window, PivotKind::High);
        let (low_idx, low_vals) = find_pivots(&lows, self.params.window, PivotKind::Low);

        if high_idx.len() < self.params.min_pivots || low_idx.len() < self.params.min_pivots {
            let mut details = BTreeMap::new();
            details.insert("high_pivots".to_string(), json!(high_idx.len()));
            details.insert("low_pivots".to_string(), json!(low_idx.len()));
            details.insert(
                "note".to_string(),
                json!("not enough local extremes to fit trendlines"),
            );
            return ChannelResult::Reading(ChannelReading {
                strategy_name: self.display_name().to_string(),
                channel_type: ChannelType::Sideways,
                current_price,
                upper_band: highs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                lower_band: lows.iter().copied().fold(f64::INFINITY, f64::min),
                center: math::mean(&closes),
                position_pct: 50.0,
                note: "insufficient pivots".to_string(),
                details,
            });
        }

        let last_index = (window.len() - 1) as f64;
        let (high_slope, upper) = match fit_trendline(&high_idx, &high_vals, last_index) {
            Some(line) => line,
            None => {
                return ChannelResult::error(self.display_name(), "degenerate pivot trendline")
            }
        };
        let (low_slope, lower) = match fit_trendline(&low_idx, &low_vals, last_index) {
            Some(line) => line,
            None => {
                return ChannelResult::error(self.display_name(), "degenerate pivot trendline")
            }
        };
        let center = (upper + lower) / 2.0;

        let strength = trend_strength_tail(bars, params.lookback);

        let both_up = high_slope > 0.0 && low_slope > 0.0;
        let both_down = high_slope < 0.0 && low_slope < 0.0;

        let channel_type = if both_up && strength >= self.params.trend_threshold {
            ChannelType::Up
        } else if both_down && strength >= self.params.trend_threshold {
            ChannelType::Down
        } else if both_up || both_down {
            ChannelType::Transitioning
        } else {
            // converging or diverging trendlines read as a range
            ChannelType::Sideways
        };

        let pattern = if high_slope > 0.0 && low_slope > 0.0 {
            "ascending channel"
        } else if high_slope < 0.0 && low_slope < 0.0 {
            "descending channel"
        } else if high_slope < 0.0 && low_slope > 0.0 {
            "converging triangle"
        } else if high_slope > 0.0 && low_slope < 0.0 {
            "diverging wedge"
        } else {
            "unclear"
        };

        let mut details = BTreeMap::new();
        details.insert("high_slope".to_string(), json!(high_slope));
        details.insert("low_slope".to_string(), json!(low_slope));
        details.insert("high_pivots".to_string(), json!(high_idx.len()));
        details.insert("low_pivots".to_string(), json!(low_idx.len()));
        details.insert("pattern".to_string(), json!(pattern));
        details.insert("trend_strength".to_string(), json!(strength));

        ChannelResult::Reading(ChannelReading {
            strategy_name: self.display_name().to_string(),
            channel_type,
            current_price,
            upper_band: upper,
            lower_band: lower,
            center,
            position_pct: position_pct(current_price, upper, lower),
            note: pattern.to_string(),
            details,
        })
    }
}

/// Local extremes over a symmetric window: a bar qualifies when it dominates
/// every bar within `window` positions on both sides (ties included).
fn find_pivots(values: &[f64], window: usize, kind: PivotKind) -> (Vec<f64>, Vec<f64>) {
    let mut indices = Vec::new();
    let mut vals = Vec::new();
    if values.len() < 2 * window + 1 {
        return (indices, vals);
    }
    for i in window..values.len() - window {
        let left = &values[i - window..i];
        let right = &values[i + 1..i + window + 1];
        let qualifies = match kind {
            PivotKind::High => {
                let left_max = left.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let right_max = right.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                values[i] >= left_max && values[i] >= right_max
            }
            PivotKind::Low => {
                let left_min = left.iter().copied().fold(f64::INFINITY, f64::min);
                let right_min = right.iter().copied().fold(f64::INFINITY, f64::min);
                values[i] <= left_min && values[i] <= right_min
            }
        };
        if qualifies {
            indices.push(i as f64);
            vals.push(values[i]);
        }
    }
    (indices, vals)
}

/// Fit a degree-1 line through (index, value) pivots and evaluate it at
/// `at_index`. Returns (slope, extrapolated value).
fn fit_trendline(indices: &[f64], values: &[f64], at_index: f64) -> Option<(f64, f64)> {
    let (slope, intercept) = math::linear_fit(indices, values)?;
    Some((slope, intercept + slope * at_index))
}
