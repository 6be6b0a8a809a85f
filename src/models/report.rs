//! Report entities: per-time-frame verdicts and the multi-time-frame conclusion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::channel::ChannelResult;

/// Whether a time-frame belongs to the short or long end of the ladder,
/// used for cross-horizon conflict detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Short,
    Long,
}

/// Reconciled directional judgment for one time-frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum VerdictKind {
    UnanimousBullish,
    UnanimousBearish,
    LeaningBullish,
    LeaningBearish,
    Divergent,
    NoValidData,
}

/// Aggregated strategy results for one time-frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeVerdict {
    pub kind: VerdictKind,
    pub label: String,
    pub up: usize,
    pub down: usize,
    pub total: usize,
}

/// Successful analysis of one time-frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeAnalysis {
    pub name: String,
    pub label: String,
    pub horizon: Horizon,
    pub bars_total: usize,
    pub strategies: Vec<ChannelResult>,
    pub verdict: TimeframeVerdict,
}

/// Time-frame-level failure (retrieval or resampling), contained at this scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeFailure {
    pub name: String,
    pub label: String,
    pub horizon: Horizon,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeframeReport {
    Analyzed(TimeframeAnalysis),
    Failed(TimeframeFailure),
}

impl TimeframeReport {
    pub fn name(&self) -> &str {
        match self {
            TimeframeReport::Analyzed(a) => &a.name,
            TimeframeReport::Failed(f) => &f.name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TimeframeReport::Analyzed(a) => &a.label,
            TimeframeReport::Failed(f) => &f.label,
        }
    }

    pub fn horizon(&self) -> Horizon {
        match self {
            TimeframeReport::Analyzed(a) => a.horizon,
            TimeframeReport::Failed(f) => f.horizon,
        }
    }

    pub fn as_analysis(&self) -> Option<&TimeframeAnalysis> {
        match self {
            TimeframeReport::Analyzed(a) => Some(a),
            TimeframeReport::Failed(_) => None,
        }
    }
}

/// Directional bias across the full time-frame ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OverallBias {
    StrongBullish,
    StrongBearish,
    Bullish,
    Bearish,
    Divergent,
    Unavailable,
}

/// The root directional statement plus supporting detail and conflict warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallConclusion {
    pub bias: OverallBias,
    pub conclusion: String,
    pub details: Vec<String>,
    pub warnings: Vec<String>,
}

/// Root output artifact of a full multi-time-frame report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub symbol: String,
    pub generated_at: DateTime<Utc>,
    pub strategies_used: Vec<String>,
    pub timeframes: Vec<TimeframeReport>,
    pub summary: OverallConclusion,
}
