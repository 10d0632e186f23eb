use chrono::Utc;
use uploadpulse_core::evaluation::evaluate_at;

use super::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = common::load_config()?;
    let (_, events) = common::fetch_history(&config)?;

    let evaluation = evaluate_at(Utc::now(), &events, &config.cadence)?;
    println!("{}", serde_json::to_string_pretty(&evaluation.urgency)?);
    Ok(())
}
