//! Shared plumbing for commands that talk to the channel provider.

use uploadpulse_core::integrations::{youtube::YouTubeProvider, youtube_api_key, ChannelProvider};
use uploadpulse_core::{normalize, ChannelSnapshot, Config, PublishEvent};

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.cadence.validate()?;
    if config.channel.handle.is_empty() {
        return Err("no channel configured; run `uploadpulse-cli config set channel.handle <handle>`".into());
    }
    Ok(config)
}

pub fn provider() -> Result<YouTubeProvider, Box<dyn std::error::Error>> {
    Ok(YouTubeProvider::new(youtube_api_key()?)?)
}

/// Fetch the snapshot plus normalized upload history for the configured
/// channel.
pub fn fetch_history(
    config: &Config,
) -> Result<(ChannelSnapshot, Vec<PublishEvent>), Box<dyn std::error::Error>> {
    let provider = provider()?;
    let snapshot = provider.fetch_channel(&config.channel.handle)?;
    let raw = provider.fetch_uploads(&snapshot.channel_id, config.channel.max_results)?;
    let events = normalize(raw)?;
    Ok((snapshot, events))
}
