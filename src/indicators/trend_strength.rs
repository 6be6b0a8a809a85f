//! Directional-movement trend-strength index
//!
//! A 0-100 measure of how strongly price is trending, independent of
//! direction. Wilder-smoothed: +DM/-DM and true range are accumulated with
//! the standard recurrence, DX values are averaged into the final index.

use crate::common::math;
use crate::models::Bar;

pub const TREND_STRENGTH_PERIOD: usize = 14;

/// Compute the trend-strength index over a bar window.
///
/// Returns 0.0 whenever the window is too short for the smoothed series to
/// be defined, so callers can treat "no reading" and "no trend" uniformly.
pub fn trend_strength(bars: &[Bar], period: usize) -> f64 {
    if period == 0 || bars.len() < period + 1 {
        return 0.0;
    }

    let mut trs = Vec::with_capacity(bars.len() - 1);
    let mut plus_dms = Vec::with_capacity(bars.len() - 1);
    let mut minus_dms = Vec::with_capacity(bars.len() - 1);

    for i in 1..bars.len() {
        trs.push(math::true_range(bars[i].high, bars[i].low, bars[i - 1].close));

        let up_move = bars[i].high - bars[i - 1].high;
        let down_move = bars[i - 1].low - bars[i].low;
        plus_dms.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dms.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    if trs.len() < period {
        return 0.0;
    }

    // Wilder seeds: plain sums of the first `period` samples
    let mut sm_tr: f64 = trs[..period].iter().sum();
    let mut sm_plus: f64 = plus_dms[..period].iter().sum();
    let mut sm_minus: f64 = minus_dms[..period].iter().sum();

    let mut dxs = Vec::with_capacity(trs.len() - period + 1);
    dxs.push(directional_index(sm_plus, sm_minus, sm_tr));

    for i in period..trs.len() {
        sm_tr = sm_tr - sm_tr / period as f64 + trs[i];
        sm_plus = sm_plus - sm_plus / period as f64 + plus_dms[i];
        sm_minus = sm_minus - sm_minus / period as f64 + minus_dms[i];
        dxs.push(directional_index(sm_plus, sm_minus, sm_tr));
    }

    if dxs.len() < period {
        return 0.0;
    }

    let mut adx = math::mean(&dxs[..period]);
    for dx in &dxs[period..] {
        adx = (adx * (period - 1) as f64 + dx) / period as f64;
    }
    adx
}

fn directional_index(sm_plus: f64, sm_minus: f64, sm_tr: f64) -> f64 {
    if sm_tr <= 0.0 {
        return 0.0;
    }
    let plus_di = 100.0 * sm_plus / sm_tr;
    let minus_di = 100.0 * sm_minus / sm_tr;
    let di_sum = plus_di + minus_di;
    if di_sum > 0.0 {
        100.0 * (plus_di - minus_di).abs() / di_sum
    } else {
        0.0
    }
}
