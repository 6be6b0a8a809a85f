//! Channel analysis result entities

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Classified channel direction. Mutually exclusive and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ChannelType {
    Up,
    Down,
    Sideways,
    Transitioning,
}

impl ChannelType {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelType::Up => "uptrend channel",
            ChannelType::Down => "downtrend channel",
            ChannelType::Sideways => "sideways range",
            ChannelType::Transitioning => "transitioning",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A well-formed channel computation for one strategy on one bar window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelReading {
    pub strategy_name: String,
    pub channel_type: ChannelType,
    pub current_price: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub center: f64,
    /// Price location within [lower_band, upper_band], clamped to [0, 100].
    /// 50.0 when the band has zero or negative width.
    pub position_pct: f64,
    /// Qualitative annotation: MA alignment, band position, bound proximity,
    /// or trendline pattern depending on the strategy.
    pub note: String,
    /// Strategy-specific diagnostics, opaque to the consensus logic
    pub details: BTreeMap<String, Value>,
}

/// Error variant replacing all numeric fields when preconditions fail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyError {
    pub strategy_name: String,
    pub error: String,
}

/// Outcome of one strategy's `analyze` call. Errors are values; a strategy
/// never returns partial numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelResult {
    Reading(ChannelReading),
    Error(StrategyError),
}

impl ChannelResult {
    pub fn error(strategy_name: impl Into<String>, error: impl Into<String>) -> Self {
        ChannelResult::Error(StrategyError {
            strategy_name: strategy_name.into(),
            error: error.into(),
        })
    }

    pub fn strategy_name(&self) -> &str {
        match self {
            ChannelResult::Reading(r) => &r.strategy_name,
            ChannelResult::Error(e) => &e.strategy_name,
        }
    }

    pub fn channel_type(&self) -> Option<ChannelType> {
        match self {
            ChannelResult::Reading(r) => Some(r.channel_type),
            ChannelResult::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ChannelResult::Error(_))
    }

    pub fn as_reading(&self) -> Option<&ChannelReading> {
        match self {
            ChannelResult::Reading(r) => Some(r),
            ChannelResult::Error(_) => None,
        }
    }
}

/// Price location within the channel as a percentage, clamped to [0, 100].
/// Collapses to the midpoint when the band has no usable width.
pub fn position_pct(price: f64, upper: f64, lower: f64) -> f64 {
    let width = upper - lower;
    if width > 0.0 {
        (((price - lower) / width) * 100.0).clamp(0.0, 100.0)
    } else {
        50.0
    }
}
