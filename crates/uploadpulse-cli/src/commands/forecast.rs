use chrono::Utc;
use uploadpulse_core::forecast_for;

use super::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = common::load_config()?;
    let (_, events) = common::fetch_history(&config)?;

    let forecast = forecast_for(
        &events,
        Utc::now(),
        config.cadence.target_interval_days,
        config.cadence.timeref(),
    )?;
    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}
