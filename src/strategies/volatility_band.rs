//! Volatility band channel
//!
//! Rolling SMA ± K standard deviations. Bandwidth relative to its own
//! recent median separates quiet compression from an open channel; the
//! middle-band slope supplies direction.

use serde_json::json;
use std::collections::BTreeMap;

use crate::common::math;
use crate::models::channel::position_pct;
use crate::models::{Bar, ChannelReading, ChannelResult, ChannelType};
use crate::strategies::{insufficient_data, trend_strength_tail, AnalysisParams, ChannelStrategy};

/// Minimum middle-band points for a usable slope fit
const MIN_SLOPE_POINTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityBandParams {
    pub period: usize,
    pub std_mult: f64,
    /// Minimum trend-strength for a directional call
    pub trend_threshold: f64,
    /// Bandwidth below this fraction of its median counts as narrow
    pub narrow_ratio: f64,
}

impl Default for VolatilityBandParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_mult: 2.0,
            trend_threshold: 20.0,
            narrow_ratio: 0.7,
        }
    }
}

pub struct VolatilityBandChannel {
    params: VolatilityBandParams,
}

impl VolatilityBandChannel {
    pub fn new(params: VolatilityBandParams) -> Self {
        Self { params }
    }
}

impl Default for VolatilityBandChannel {
    fn default() -> Self {
        Self::new(VolatilityBandParams::default())
    }
}

impl ChannelStrategy for VolatilityBandChannel {
    fn name(&self) -> &'static str {
        "volatility-band"
    }

    fn display_name(&self) -> &'static str {
        "volatility band"
    }

    fn analyze(&self, bars: &[Bar], params: &AnalysisParams) -> ChannelResult {
        let min_bars = self.params.period + 10;
        if bars.len() < min_bars {
            return insufficient_data(self.display_name(), min_bars, bars.len());
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let middles = math::rolling_mean(&closes, self.params.period);
        let stds = math::rolling_std(&closes, self.params.period);

        let middle = middles[middles.len() - 1];
        let spread = self.params.std_mult * stds[stds.len() - 1];
        let upper = middle + spread;
        let lower = middle - spread;

        let current_price = closes[closes.len() - 1];

        let bandwidths: Vec<f64> = middles
            .iter()
            .zip(&stds)
            .map(|(m, s)| {
                if *m != 0.0 {
                    2.0 * self.params.std_mult * s / m
                } else {
                    0.0
                }
            })
            .collect();
        let bandwidth = bandwidths[bandwidths.len() - 1];

        let pct_b = if upper > lower {
            (current_price - lower) / (upper - lower)
        } else {
            0.0
        };

        let slope_tail = tail(&middles, params.lookback);
        let ma_slope = if slope_tail.len() >= MIN_SLOPE_POINTS {
            math::slope_of(slope_tail).unwrap_or(0.0)
        } else {
            0.0
        };

        let strength = trend_strength_tail(bars, params.lookback);

        let bw_tail = tail(&bandwidths, params.lookback);
        let bw_median = math::median(bw_tail).unwrap_or(bandwidth);
        let narrow = bandwidth < bw_median * self.params.narrow_ratio;

        let channel_type = if narrow && strength < self.params.trend_threshold {
            ChannelType::Sideways
        } else if ma_slope > 0.0 && strength >= self.params.trend_threshold {
            ChannelType::Up
        } else if ma_slope < 0.0 && strength >= self.params.trend_threshold {
            ChannelType::Down
        } else if ma_slope != 0.0 && strength < self.params.trend_threshold {
            ChannelType::Transitioning
        } else {
            ChannelType::Sideways
        };

        let note = if current_price > middle {
            "above middle band"
        } else {
            "below middle band"
        };

        let mut details = BTreeMap::new();
        details.insert("bandwidth".to_string(), json!(bandwidth));
        details.insert("pct_b".to_string(), json!(pct_b));
        details.insert("ma_slope".to_string(), json!(ma_slope));
        details.insert("trend_strength".to_string(), json!(strength));
        details.insert(
            "band_state".to_string(),
            json!(if narrow { "narrow" } else { "normal" }),
        );

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

fn tail(values: &[f64], len: usize) -> &[f64] {
    &values[values.len().saturating_sub(len)..]
}
