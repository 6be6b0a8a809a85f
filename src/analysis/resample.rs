//! OHLCV resampling to a coarser interval

use crate::models::{Bar, BarInterval};

/// Aggregate bars into the target interval: open = first, high = max,
/// low = min, close = last, volume = sum. Input must be sorted by
/// timestamp; buckets with no source bars produce no output row. Output
/// bars are stamped with their bucket start.
pub fn resample(bars: &[Bar], target: BarInterval) -> Vec<Bar> {
    let mut out: Vec<Bar> = Vec::new();
    for bar in bars {
        let start = target.bucket_start(bar.timestamp);
        match out.last_mut() {
            Some(last) if last.timestamp == start => {
                last.high = last.high.max(bar.high);
                last.low = last.low.min(bar.low);
                last.close = bar.close;
                last.volume += bar.volume;
            }
            _ => out.push(Bar::new(
                bar.open, bar.high, bar.low, bar.close, bar.volume, start,
            )),
        }
    }
    out
}
