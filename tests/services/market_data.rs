//! Unit tests for the file-backed bar source

use auriga::models::{Bar, BarInterval};
use auriga::services::{BarSource, FileBarSource};
use chrono::{Duration, TimeZone, Utc};

fn sample_bars() -> Vec<Bar> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..5)
        .map(|i| {
            let price = 2000.0 + i as f64;
            Bar::new(
                price,
                price + 2.0,
                price - 2.0,
                price + 1.0,
                500.0,
                t0 + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("auriga-test-{}-{tag}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_fetch_reads_cached_series() {
    let dir = scratch_dir("read");
    let bars = sample_bars();
    let json = serde_json::to_string(&bars).unwrap();
    std::fs::write(dir.join("GC=F_1h.json"), json).unwrap();

    let source = FileBarSource::new(&dir);
    let fetched = source.fetch("GC=F", "2mo", BarInterval::Hour1).unwrap();
    assert_eq!(fetched, bars);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_series_is_an_error() {
    let dir = scratch_dir("missing");
    let source = FileBarSource::new(&dir);
    let result = source.fetch("GC=F", "2mo", BarInterval::Day1);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("unavailable"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_series_is_an_error() {
    let dir = scratch_dir("malformed");
    std::fs::write(dir.join("GC=F_1h.json"), "not json").unwrap();

    let source = FileBarSource::new(&dir);
    let result = source.fetch("GC=F", "2mo", BarInterval::Hour1);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("malformed"));

    std::fs::remove_dir_all(&dir).ok();
}
