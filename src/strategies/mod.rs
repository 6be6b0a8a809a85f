//! Channel detection strategies
//!
//! Four independent heuristics classify the same bar window into one of the
//! channel types. Each is a pure function of the input window plus its
//! construction-time parameters; results never depend on call order.

pub mod pivot_trendline;
pub mod range;
pub mod registry;
pub mod regression;
pub mod volatility_band;

pub use pivot_trendline::{PivotParams, PivotTrendlineChannel};
pub use range::{RangeChannel, RangeParams};
pub use registry::{build_strategies, StrategyTuning, DEFAULT_STRATEGY_NAMES};
pub use regression::{RegressionChannel, RegressionParams};
pub use volatility_band::{VolatilityBandChannel, VolatilityBandParams};

use crate::indicators::{trend_strength, TREND_STRENGTH_PERIOD};
use crate::models::{Bar, ChannelResult};

/// Per-call analysis window configuration, shared by all strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParams {
    pub lookback: usize,
    pub sma_short: usize,
    pub sma_long: usize,
}

impl AnalysisParams {
    pub fn new(lookback: usize, sma_short: usize, sma_long: usize) -> Self {
        Self {
            lookback,
            sma_short,
            sma_long,
        }
    }
}

/// One channel detection heuristic over a bar window
pub trait ChannelStrategy {
    /// Registry identifier
    fn name(&self) -> &'static str;

    /// Human-readable name used in results and report metadata
    fn display_name(&self) -> &'static str;

    /// Compute a channel for the window. Precondition violations return the
    /// error variant, never a partial reading.
    fn analyze(&self, bars: &[Bar], params: &AnalysisParams) -> ChannelResult;
}

/// Trend-strength index over the tail of `lookback + 20` bars.
/// 0.0 when fewer than 16 bars are available.
pub(crate) fn trend_strength_tail(bars: &[Bar], lookback: usize) -> f64 {
    let start = bars.len().saturating_sub(lookback + 20);
    let tail = &bars[start..];
    if tail.len() < 16 {
        return 0.0;
    }
    trend_strength(tail, TREND_STRENGTH_PERIOD)
}

pub(crate) fn insufficient_data(strategy: &str, needed: usize, got: usize) -> ChannelResult {
    ChannelResult::error(
        strategy,
        format!("insufficient data: need {needed} bars, got {got}"),
    )
}
