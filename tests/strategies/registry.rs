//! Unit tests for the strategy registry

use auriga::strategies::{build_strategies, StrategyTuning, DEFAULT_STRATEGY_NAMES};

#[test]
fn test_empty_selection_builds_all_strategies() {
    let strategies = build_strategies(&[], &StrategyTuning::default());
    assert_eq!(strategies.len(), 4);
    let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
    assert_eq!(names, DEFAULT_STRATEGY_NAMES);
}

#[test]
fn test_unknown_identifiers_are_skipped() {
    let names = vec![
        "regression".to_string(),
        "macd".to_string(),
        "range".to_string(),
    ];
    let strategies = build_strategies(&names, &StrategyTuning::default());
    assert_eq!(strategies.len(), 2);
    assert_eq!(strategies[0].name(), "regression");
    assert_eq!(strategies[1].name(), "range");
}

#[test]
fn test_identifiers_are_trimmed_and_lowercased() {
    let names = vec![" Volatility-Band ".to_string(), "PIVOT-TRENDLINE".to_string()];
    let strategies = build_strategies(&names, &StrategyTuning::default());
    assert_eq!(strategies.len(), 2);
    assert_eq!(strategies[0].name(), "volatility-band");
    assert_eq!(strategies[1].name(), "pivot-trendline");
}

#[test]
fn test_selection_order_is_preserved() {
    let names = vec!["range".to_string(), "regression".to_string()];
    let strategies = build_strategies(&names, &StrategyTuning::default());
    assert_eq!(strategies[0].name(), "range");
    assert_eq!(strategies[1].name(), "regression");
}

#[test]
fn test_all_unknown_yields_empty_set() {
    let names = vec!["fibonacci".to_string(), "elliott".to_string()];
    let strategies = build_strategies(&names, &StrategyTuning::default());
    assert!(strategies.is_empty());
}
