use clap::Subcommand;
use uploadpulse_core::integrations::ChannelProvider;
use uploadpulse_core::milestones;

use super::common;

#[derive(Subcommand)]
pub enum ChannelAction {
    /// Snapshot counters
    Show,
    /// Milestone ladder progress
    Milestones,
}

pub fn run(action: ChannelAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = common::load_config()?;
    let provider = common::provider()?;
    let snapshot = provider.fetch_channel(&config.channel.handle)?;

    match action {
        ChannelAction::Show => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        ChannelAction::Milestones => {
            let ladder = milestones::milestones(&snapshot);
            println!("{}", serde_json::to_string_pretty(&ladder)?);
        }
    }
    Ok(())
}
