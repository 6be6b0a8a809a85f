//! Shared numeric primitives used by indicators and channel strategies

/// Arithmetic mean of a slice. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple moving average over the trailing `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let tail = &values[values.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}

/// Population standard deviation of a slice
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Rolling mean series: one value per complete window, oldest first
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, mean)
}

/// Rolling population standard deviation series
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, std_dev)
}

/// Rolling maximum series
pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Rolling minimum series
pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| {
        w.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

fn rolling(values: &[f64], window: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values.windows(window).map(|w| f(w)).collect()
}

/// Least-squares degree-1 fit over (x, y) pairs, returning (slope, intercept).
/// Requires at least two points and a non-degenerate x spread.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = mean(xs);
    let mean_y = mean(ys);
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 || !(sxx / n).is_finite() {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// Slope of the least-squares line through `ys` indexed 0..n
pub fn slope_of(ys: &[f64]) -> Option<f64> {
    let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
    linear_fit(&xs, ys).map(|(slope, _)| slope)
}

/// Median of a slice (mean of the middle pair for even lengths)
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// True range of a bar given the previous close
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}
