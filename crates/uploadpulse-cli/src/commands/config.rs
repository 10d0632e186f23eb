use clap::Subcommand;
use uploadpulse_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Write a default config file
    Init,
    /// Set one value, e.g. `config set channel.handle @somecreator`
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init => {
            let config = Config::default();
            config.save()?;
            println!("wrote {}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            apply(&mut config, &key, &value)?;
            config.cadence.validate()?;
            config.save()?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    match key {
        "channel.handle" => config.channel.handle = value.to_string(),
        "channel.max_results" => config.channel.max_results = value.parse()?,
        "cadence.target_interval_days" => config.cadence.target_interval_days = value.parse()?,
        "cadence.utc_offset_hours" => config.cadence.utc_offset_hours = value.parse()?,
        "cadence.reminder_window_start_hour" => {
            config.cadence.reminder_window_start_hour = value.parse()?
        }
        "cadence.reminder_window_end_hour" => {
            config.cadence.reminder_window_end_hour = value.parse()?
        }
        "reminder.recipient" => config.reminder.recipient = value.to_string(),
        "reminder.from" => config.reminder.from = value.to_string(),
        "reminder.subject" => config.reminder.subject = value.to_string(),
        _ => return Err(format!("unknown config key: {key}").into()),
    }
    Ok(())
}
