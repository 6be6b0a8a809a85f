//! Bar source interface and the local file-backed implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Bar, BarInterval};

/// Provider of historical OHLCV bars for one instrument.
///
/// `period` is the retrieval range in the provider's own vocabulary (e.g.
/// "2mo", "2y"); the core never assumes a fixed bar count from it.
pub trait BarSource {
    fn fetch(
        &self,
        symbol: &str,
        period: &str,
        interval: BarInterval,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error>>;
}

#[derive(Debug)]
pub enum MarketDataError {
    Io(std::io::Error),
    Malformed(String),
    Unavailable(String),
}

impl std::fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketDataError::Io(e) => write!(f, "I/O error: {e}"),
            MarketDataError::Malformed(msg) => write!(f, "malformed bar data: {msg}"),
            MarketDataError::Unavailable(msg) => write!(f, "bar data unavailable: {msg}"),
        }
    }
}

impl std::error::Error for MarketDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketDataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Reads bar series cached on disk as `<data_dir>/<symbol>_<interval>.json`,
/// one JSON array of bars per symbol and interval.
pub struct FileBarSource {
    data_dir: PathBuf,
}

impl FileBarSource {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn series_path(&self, symbol: &str, interval: BarInterval) -> PathBuf {
        self.data_dir.join(format!("{symbol}_{interval}.json"))
    }
}

impl BarSource for FileBarSource {
    fn fetch(
        &self,
        symbol: &str,
        _period: &str,
        interval: BarInterval,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error>> {
        let path = self.series_path(symbol, interval);
        if !path.exists() {
            return Err(Box::new(MarketDataError::Unavailable(format!(
                "no cached series at {}",
                path.display()
            ))));
        }
        let raw = fs::read_to_string(&path).map_err(MarketDataError::Io)?;
        let bars: Vec<Bar> = serde_json::from_str(&raw)
            .map_err(|e| MarketDataError::Malformed(format!("{}: {e}", path.display())))?;
        Ok(bars)
    }
}
