//! Linear regression channel
//!
//! Fits a degree-1 least-squares line to closing prices. The slope sign
//! gives the candidate direction, R² measures how linear the move is, and
//! the trend-strength index confirms it. Bands sit 1.5 residual standard
//! deviations around the regression line's endpoint.

use serde_json::json;
use std::collections::BTreeMap;

use crate::common::math;
use crate::indicators::{ma_alignment, MaAlignment};
use crate::models::channel::position_pct;
use crate::models::{Bar, ChannelReading, ChannelResult, ChannelType};
use crate::strategies::{insufficient_data, trend_strength_tail, AnalysisParams, ChannelStrategy};

const BAND_SIGMA: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionParams {
    /// Minimum trend-strength for a directional call
    pub trend_threshold: f64,
    /// Minimum R² to treat the window as linear at all
    pub r2_threshold: f64,
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self {
            trend_threshold: 25.0,
            r2_threshold: 0.5,
        }
    }
}

pub struct RegressionChannel {
    params: RegressionParams,
}

impl RegressionChannel {
    pub fn new(params: RegressionParams) -> Self {
        Self { params }
    }
}

impl Default for RegressionChannel {
    fn default() -> Self {
        Self::new(RegressionParams::default())
    }
}

impl ChannelStrategy for RegressionChannel {
    fn name(&self) -> &'static str {
        "regression"
    }

    fn display_name(&self) -> &'static str {
        "linear regression"
    }

    fn analyze(&self, bars: &[Bar], params: &AnalysisParams) -> ChannelResult {
        let min_bars = params.lookback.max(params.sma_long + 10);
        if bars.len() < min_bars {
            return insufficient_data(self.display_name(), min_bars, bars.len());
        }

        let window = &bars[bars.len() - params.lookback..];
        let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
        let xs: Vec<f64> = (0..closes.len()).map(|i| i as f64).collect();

        let (slope, intercept) = match math::linear_fit(&xs, &closes) {
            Some(fit) => fit,
            None => {
                return ChannelResult::error(self.display_name(), "degenerate regression window")
            }
        };

        let line: Vec<f64> = xs.iter().map(|x| intercept + slope * x).collect();
        let ss_res: f64 = closes
            .iter()
            .zip(&line)
            .map(|(c, l)| (c - l) * (c - l))
            .sum();
        let close_mean = math::mean(&closes);
        let ss_tot: f64 = closes
            .iter()
            .map(|c| (c - close_mean) * (c - close_mean))
            .sum();
        let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

        let residuals: Vec<f64> = closes.iter().zip(&line).map(|(c, l)| c - l).collect();
        let residual_std = math::std_dev(&residuals);

        let center = line[line.len() - 1];
        let upper = center + BAND_SIGMA * residual_std;
        let lower = center - BAND_SIGMA * residual_std;

        let strength = trend_strength_tail(bars, params.lookback);
        let (sma_short_val, sma_long_val, alignment) =
            ma_alignment(bars, params.sma_short, params.sma_long);

        let current_price = closes[closes.len() - 1];
        let slope_pct = if current_price > 0.0 {
            slope / current_price * 100.0
        } else {
            0.0
        };

        let mut channel_type = if r_squared >= self.params.r2_threshold
            && strength >= self.params.trend_threshold
        {
            if slope > 0.0 {
                ChannelType::Up
            } else {
                ChannelType::Down
            }
        } else if r_squared >= self.params.r2_threshold {
            ChannelType::Transitioning
        } else {
            ChannelType::Sideways
        };

        // A contradicting MA alignment downgrades the directional call
        match (alignment, channel_type) {
            (MaAlignment::Bullish, ChannelType::Down)
            | (MaAlignment::Bearish, ChannelType::Up) => {
                channel_type = ChannelType::Transitioning;
            }
            _ => {}
        }

        let mut details = BTreeMap::new();
        details.insert("slope".to_string(), json!(slope));
        details.insert("slope_pct".to_string(), json!(slope_pct));
        details.insert("r_squared".to_string(), json!(r_squared));
        details.insert("trend_strength".to_string(), json!(strength));
        details.insert("sma_short_val".to_string(), json!(sma_short_val));
        details.insert("sma_long_val".to_string(), json!(sma_long_val));
        details.insert("band_width".to_string(), json!(residual_std * 3.0));

        ChannelResult::Reading(ChannelReading {
            strategy_name: self.display_name().to_string(),
            channel_type,
            current_price,
            upper_band: upper,
            lower_band: lower,
            center,
            position_pct: position_pct(current_price, upper, lower),
            note: alignment.label().to_string(),
            details,
        })
    }
}
