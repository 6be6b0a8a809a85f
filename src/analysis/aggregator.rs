//! Multi-time-frame channel analyzer
//!
//! Runs the full strategy set over every rung of the time-frame ladder and
//! reconciles the verdicts into one overall conclusion. Failures are
//! contained at the smallest scope: one strategy result or one time-frame,
//! never the whole report.

use chrono::Utc;
use tracing::{info, warn};

use crate::analysis::consensus::{consensus, ConsensusPolicy};
use crate::analysis::resample::resample;
use crate::analysis::timeframe::{TimeframeConfig, MIN_RESAMPLED_BARS};
use crate::models::bar::normalize;
use crate::models::{
    ChannelReport, Horizon, OverallBias, OverallConclusion, TimeframeAnalysis, TimeframeFailure,
    TimeframeReport,
};
use crate::services::market_data::BarSource;
use crate::strategies::{AnalysisParams, ChannelStrategy};

pub struct ChannelAnalyzer<S: BarSource> {
    symbol: String,
    source: S,
    strategies: Vec<Box<dyn ChannelStrategy>>,
    policy: ConsensusPolicy,
}

impl<S: BarSource> ChannelAnalyzer<S> {
    pub fn new(
        symbol: impl Into<String>,
        source: S,
        strategies: Vec<Box<dyn ChannelStrategy>>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            source,
            strategies,
            policy: ConsensusPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ConsensusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn strategy_display_names(&self) -> Vec<String> {
        self.strategies
            .iter()
            .map(|s| s.display_name().to_string())
            .collect()
    }

    /// Fetch, optionally resample, and analyze one time-frame with every
    /// registered strategy. Retrieval and resampling failures surface as a
    /// time-frame-level error value.
    pub fn analyze_timeframe(&self, config: &TimeframeConfig) -> TimeframeReport {
        let fetched = match self
            .source
            .fetch(&self.symbol, &config.period, config.interval)
        {
            Ok(bars) => bars,
            Err(e) => {
                warn!(timeframe = %config.name, error = %e, "bar retrieval failed");
                return failed(config, format!("data retrieval failed: {e}"));
            }
        };
        if fetched.is_empty() {
            return failed(config, "data retrieval returned no bars".to_string());
        }
        let bars = normalize(fetched);

        let bars = match config.resample {
            Some(target) => {
                let resampled = resample(&bars, target);
                if resampled.len() < MIN_RESAMPLED_BARS {
                    warn!(
                        timeframe = %config.name,
                        bars = resampled.len(),
                        "insufficient bars after resampling"
                    );
                    return failed(
                        config,
                        format!(
                            "insufficient bars after resampling: {} < {}",
                            resampled.len(),
                            MIN_RESAMPLED_BARS
                        ),
                    );
                }
                resampled
            }
            None => bars,
        };

        let params = AnalysisParams::new(config.lookback, config.sma_short, config.sma_long);
        // Strategy identity, not execution order, numbers the results
        let results: Vec<_> = self
            .strategies
            .iter()
            .map(|s| s.analyze(&bars, &params))
            .collect();

        let verdict = consensus(&results, &self.policy);

        TimeframeReport::Analyzed(TimeframeAnalysis {
            name: config.name.clone(),
            label: config.label.clone(),
            horizon: config.horizon,
            bars_total: bars.len(),
            strategies: results,
            verdict,
        })
    }

    /// Run the whole ladder and derive the overall conclusion
    pub fn multi_timeframe_report(&self, ladder: &[TimeframeConfig]) -> ChannelReport {
        let mut timeframes = Vec::with_capacity(ladder.len());
        for config in ladder {
            info!(timeframe = %config.name, label = %config.label, "analyzing time-frame");
            timeframes.push(self.analyze_timeframe(config));
        }

        let summary = summarize(&timeframes);

        ChannelReport {
            symbol: self.symbol.clone(),
            generated_at: Utc::now(),
            strategies_used: self.strategy_display_names(),
            timeframes,
            summary,
        }
    }
}

fn failed(config: &TimeframeConfig, error: String) -> TimeframeReport {
    TimeframeReport::Failed(TimeframeFailure {
        name: config.name.clone(),
        label: config.label.clone(),
        horizon: config.horizon,
        error,
    })
}

/// Derive the overall conclusion from per-time-frame verdicts. A time-frame
/// leans by its up/down counts, not by its label.
pub fn summarize(timeframes: &[TimeframeReport]) -> OverallConclusion {
    let valid: Vec<&TimeframeAnalysis> =
        timeframes.iter().filter_map(|t| t.as_analysis()).collect();
    if valid.is_empty() {
        return OverallConclusion {
            bias: OverallBias::Unavailable,
            conclusion: "insufficient data for an overall call".to_string(),
            details: Vec::new(),
            warnings: Vec::new(),
        };
    }

    let total = valid.len();
    let bullish = valid
        .iter()
        .filter(|a| a.verdict.up > a.verdict.down)
        .count();
    let bearish = valid
        .iter()
        .filter(|a| a.verdict.down > a.verdict.up)
        .count();

    let (bias, conclusion) = if bullish == total {
        (
            OverallBias::StrongBullish,
            "strong bullish: every time-frame leans up".to_string(),
        )
    } else if bearish == total {
        (
            OverallBias::StrongBearish,
            "strong bearish: every time-frame leans down".to_string(),
        )
    } else if bullish > bearish {
        (
            OverallBias::Bullish,
            format!("overall bullish ({bullish}/{total} time-frames lean up)"),
        )
    } else if bearish > bullish {
        (
            OverallBias::Bearish,
            format!("overall bearish ({bearish}/{total} time-frames lean down)"),
        )
    } else {
        (
            OverallBias::Divergent,
            "divergent: time-frames disagree on direction".to_string(),
        )
    };

    let details = valid
        .iter()
        .map(|a| format!("{}: {}", a.name, a.verdict.label))
        .collect();

    let leans = |a: &&TimeframeAnalysis, horizon: Horizon, up: bool| {
        a.horizon == horizon
            && if up {
                a.verdict.up > a.verdict.down
            } else {
                a.verdict.down > a.verdict.up
            }
    };
    let long_bullish = valid.iter().any(|a| leans(a, Horizon::Long, true));
    let long_bearish = valid.iter().any(|a| leans(a, Horizon::Long, false));
    let short_bullish = valid.iter().any(|a| leans(a, Horizon::Short, true));
    let short_bearish = valid.iter().any(|a| leans(a, Horizon::Short, false));

    let mut warnings = Vec::new();
    if long_bullish && short_bearish {
        warnings.push(
            "large time-frames lean bullish but small time-frames are pulling back".to_string(),
        );
    } else if long_bearish && short_bullish {
        warnings
            .push("large time-frames lean bearish but small time-frames are bouncing".to_string());
    }

    OverallConclusion {
        bias,
        conclusion,
        details,
        warnings,
    }
}
