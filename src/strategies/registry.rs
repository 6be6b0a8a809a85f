//! Strategy registry
//!
//! Maps the fixed set of strategy identifiers to constructible instances.
//! Unknown identifiers are skipped with a warning, never fatal; an empty
//! selection means all strategies.

use tracing::warn;

use crate::strategies::{
    ChannelStrategy, PivotParams, PivotTrendlineChannel, RangeChannel, RangeParams,
    RegressionChannel, RegressionParams, VolatilityBandChannel, VolatilityBandParams,
};

pub const DEFAULT_STRATEGY_NAMES: [&str; 4] =
    ["regression", "volatility-band", "range", "pivot-trendline"];

/// Construction-time parameters for every strategy, frozen after building
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrategyTuning {
    pub regression: RegressionParams,
    pub volatility: VolatilityBandParams,
    pub range: RangeParams,
    pub pivot: PivotParams,
}

/// Build strategy instances for the requested identifiers, preserving
/// request order. Unknown names are dropped with a warning.
pub fn build_strategies(names: &[String], tuning: &StrategyTuning) -> Vec<Box<dyn ChannelStrategy>> {
    let requested: Vec<String> = if names.is_empty() {
        DEFAULT_STRATEGY_NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        names.to_vec()
    };

    let mut strategies: Vec<Box<dyn ChannelStrategy>> = Vec::new();
    for raw in &requested {
        let name = raw.trim().to_lowercase();
        match name.as_str() {
            "regression" => {
                strategies.push(Box::new(RegressionChannel::new(tuning.regression)));
            }
            "volatility-band" => {
                strategies.push(Box::new(VolatilityBandChannel::new(tuning.volatility)));
            }
            "range" => {
                strategies.push(Box::new(RangeChannel::new(tuning.range)));
            }
            "pivot-trendline" => {
                strategies.push(Box::new(PivotTrendlineChannel::new(tuning.pivot)));
            }
            _ => {
                warn!(strategy = %name, "unknown strategy identifier, skipping");
            }
        }
    }
    strategies
}
