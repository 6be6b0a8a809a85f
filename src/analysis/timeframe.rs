//! Time-frame ladder configuration

use crate::models::{BarInterval, Horizon};

/// Minimum series length a resampled time-frame must retain
pub const MIN_RESAMPLED_BARS: usize = 20;

/// One rung of the time-frame ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeConfig {
    pub name: String,
    pub label: String,
    /// Interval requested from the bar source
    pub interval: BarInterval,
    /// Retrieval range, passed through to the bar source (e.g. "2mo", "2y")
    pub period: String,
    pub lookback: usize,
    pub sma_short: usize,
    pub sma_long: usize,
    /// Coarser interval to aggregate into before analysis
    pub resample: Option<BarInterval>,
    pub horizon: Horizon,
}

/// The default ladder: intraday and swing on hourly data (swing via 4h
/// resampling), then daily and weekly. Built fresh per call; never mutated.
pub fn default_ladder() -> Vec<TimeframeConfig> {
    vec![
        TimeframeConfig {
            name: "1H".to_string(),
            label: "intraday".to_string(),
            interval: BarInterval::Hour1,
            period: "2mo".to_string(),
            lookback: 240,
            sma_short: 20,
            sma_long: 60,
            resample: None,
            horizon: Horizon::Short,
        },
        TimeframeConfig {
            name: "4H".to_string(),
            label: "swing".to_string(),
            interval: BarInterval::Hour1,
            period: "6mo".to_string(),
            lookback: 180,
            sma_short: 20,
            sma_long: 60,
            resample: Some(BarInterval::Hour4),
            horizon: Horizon::Short,
        },
        TimeframeConfig {
            name: "1D".to_string(),
            label: "daily".to_string(),
            interval: BarInterval::Day1,
            period: "2y".to_string(),
            lookback: 120,
            sma_short: 20,
            sma_long: 60,
            resample: None,
            horizon: Horizon::Long,
        },
        TimeframeConfig {
            name: "1W".to_string(),
            label: "weekly".to_string(),
            interval: BarInterval::Week1,
            period: "4y".to_string(),
            lookback: 80,
            sma_short: 10,
            sma_long: 30,
            resample: None,
            horizon: Horizon::Long,
        },
    ]
}
