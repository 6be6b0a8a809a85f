//! Per-time-frame consensus over strategy results

use crate::models::{ChannelResult, ChannelType, TimeframeVerdict, VerdictKind};

/// Majority rule for a leaning verdict. The leading side must be strictly
/// ahead and hold at least this fraction of valid strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsensusPolicy {
    pub majority_fraction: f64,
}

impl Default for ConsensusPolicy {
    fn default() -> Self {
        Self {
            majority_fraction: 0.5,
        }
    }
}

/// Reconcile one time-frame's strategy results into a verdict. Error
/// results are excluded from the counts; zero valid results yields a
/// dedicated "no valid data" verdict.
pub fn consensus(results: &[ChannelResult], policy: &ConsensusPolicy) -> TimeframeVerdict {
    let valid: Vec<ChannelType> = results.iter().filter_map(|r| r.channel_type()).collect();
    let total = valid.len();
    if total == 0 {
        return TimeframeVerdict {
            kind: VerdictKind::NoValidData,
            label: "no valid data".to_string(),
            up: 0,
            down: 0,
            total: 0,
        };
    }

    let up = valid.iter().filter(|t| **t == ChannelType::Up).count();
    let down = valid.iter().filter(|t| **t == ChannelType::Down).count();
    let other = total - up - down;
    let quorum = total as f64 * policy.majority_fraction;

    let (kind, label) = if up == total {
        (
            VerdictKind::UnanimousBullish,
            format!("unanimous bullish ({up}/{total})"),
        )
    } else if down == total {
        (
            VerdictKind::UnanimousBearish,
            format!("unanimous bearish ({down}/{total})"),
        )
    } else if up > down && up as f64 >= quorum {
        (
            VerdictKind::LeaningBullish,
            format!("leaning bullish ({up}/{total} up)"),
        )
    } else if down > up && down as f64 >= quorum {
        (
            VerdictKind::LeaningBearish,
            format!("leaning bearish ({down}/{total} down)"),
        )
    } else {
        (
            VerdictKind::Divergent,
            format!("divergent ({up} up / {down} down / {other} other)"),
        )
    };

    TimeframeVerdict {
        kind,
        label,
        up,
        down,
        total,
    }
}
