//! Short/long simple-moving-average alignment check

use crate::common::math;
use crate::models::Bar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaAlignment {
    Bullish,
    Bearish,
    InsufficientData,
}

impl MaAlignment {
    pub fn label(&self) -> &'static str {
        match self {
            MaAlignment::Bullish => "bullish alignment",
            MaAlignment::Bearish => "bearish alignment",
            MaAlignment::InsufficientData => "insufficient data",
        }
    }
}

impl std::fmt::Display for MaAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare SMA(short) against SMA(long) over closing prices.
/// Returns the two averages alongside the alignment so strategies can expose
/// them as diagnostics.
pub fn ma_alignment(bars: &[Bar], short: usize, long: usize) -> (Option<f64>, Option<f64>, MaAlignment) {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let short_ma = math::sma(&closes, short);
    let long_ma = math::sma(&closes, long);
    match (short_ma, long_ma) {
        (Some(s), Some(l)) => {
            let alignment = if s > l {
                MaAlignment::Bullish
            } else {
                MaAlignment::Bearish
            };
            (Some(s), Some(l), alignment)
        }
        _ => (short_ma, long_ma, MaAlignment::InsufficientData),
    }
}
