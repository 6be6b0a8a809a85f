//! Environment-driven configuration
//!
//! Every knob has a default; omission of a variable means the default.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::strategies::StrategyTuning;

/// Runtime environment name, used to select log formatting
pub fn get_environment() -> String {
    env::var("AURIGA_ENV").unwrap_or_else(|_| "development".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Instrument symbol in the bar source's vocabulary
    pub symbol: String,
    /// Requested strategy identifiers; empty means all
    pub strategy_names: Vec<String>,
    /// Directory holding cached bar series
    pub data_dir: PathBuf,
    pub tuning: StrategyTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "GC=F".to_string(),
            strategy_names: Vec::new(),
            data_dir: PathBuf::from("data"),
            tuning: StrategyTuning::default(),
        }
    }
}

impl Config {
    /// Load configuration from the environment (and a .env file if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        if let Ok(symbol) = env::var("AURIGA_SYMBOL") {
            config.symbol = symbol;
        }
        if let Ok(list) = env::var("AURIGA_STRATEGIES") {
            config.strategy_names = list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(dir) = env::var("AURIGA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        let t = &mut config.tuning;
        t.regression.trend_threshold =
            env_parse("AURIGA_TREND_THRESHOLD", t.regression.trend_threshold);
        t.regression.r2_threshold = env_parse("AURIGA_R2_THRESHOLD", t.regression.r2_threshold);
        t.volatility.period = env_parse("AURIGA_BAND_PERIOD", t.volatility.period);
        t.volatility.std_mult = env_parse("AURIGA_BAND_STD", t.volatility.std_mult);
        t.range.period = env_parse("AURIGA_RANGE_PERIOD", t.range.period);
        t.pivot.window = env_parse("AURIGA_PIVOT_WINDOW", t.pivot.window);

        config
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
