use chrono::Utc;
use uploadpulse_core::UploadAnalyzer;

use super::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = common::load_config()?;
    let (_, events) = common::fetch_history(&config)?;

    let analyzer = UploadAnalyzer::new(config.cadence.timeref());
    let report = analyzer.analyze(&events, Utc::now());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
