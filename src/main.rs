use tracing::{info, warn};

use auriga::analysis::{default_ladder, ChannelAnalyzer};
use auriga::config::Config;
use auriga::render::render_report;
use auriga::services::FileBarSource;
use auriga::strategies::build_strategies;

const REPORT_PATH: &str = "channel_report.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    auriga::logging::init_logging();

    info!(symbol = %config.symbol, data_dir = %config.data_dir.display(), "starting channel analysis");

    let source = FileBarSource::new(&config.data_dir);
    let strategies = build_strategies(&config.strategy_names, &config.tuning);
    let analyzer = ChannelAnalyzer::new(&config.symbol, source, strategies);

    let ladder = default_ladder();
    let report = analyzer.multi_timeframe_report(&ladder);

    println!("{}", render_report(&report));

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            std::fs::write(REPORT_PATH, json)?;
            info!(path = REPORT_PATH, "report written");
        }
        Err(e) => warn!(error = %e, "failed to serialize report"),
    }

    Ok(())
}
