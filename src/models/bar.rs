//! OHLCV bar primitives

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV sample. Immutable once produced by a bar source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Bar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Sort a bar series by timestamp and drop duplicate timestamps (first wins).
/// Concatenated sources can overlap; every strategy assumes a strictly
/// increasing series.
pub fn normalize(mut bars: Vec<Bar>) -> Vec<Bar> {
    bars.sort_by_key(|b| b.timestamp);
    bars.dedup_by_key(|b| b.timestamp);
    bars
}

/// Nominal bar aggregation interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarInterval {
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
}

const DAY_SECS: i64 = 86_400;

impl BarInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarInterval::Hour1 => "1h",
            BarInterval::Hour4 => "4h",
            BarInterval::Day1 => "1d",
            BarInterval::Week1 => "1wk",
        }
    }

    /// Start of the aggregation bucket containing `ts`. Hourly and 4-hourly
    /// buckets align to UTC midnight; weekly buckets start Monday.
    pub fn bucket_start(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let secs = ts.timestamp();
        let start = match self {
            BarInterval::Hour1 => secs - secs.rem_euclid(3_600),
            BarInterval::Hour4 => secs - secs.rem_euclid(4 * 3_600),
            BarInterval::Day1 => secs - secs.rem_euclid(DAY_SECS),
            BarInterval::Week1 => {
                // Unix epoch fell on a Thursday, three days past Monday
                let days = secs.div_euclid(DAY_SECS);
                let monday_offset = (days + 3).rem_euclid(7);
                (days - monday_offset) * DAY_SECS
            }
        };
        DateTime::from_timestamp(start, 0).unwrap_or(ts)
    }
}

impl std::fmt::Display for BarInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
