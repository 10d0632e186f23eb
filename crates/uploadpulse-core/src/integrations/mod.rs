//! External collaborators: the channel-data provider and the notification
//! sender, plus credential storage for both.

pub mod email;
pub mod resend;
pub mod traits;
pub mod youtube;

pub use traits::{ChannelProvider, Notifier};

use crate::error::{ConfigError, CoreError, Result};

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "uploadpulse";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Look up an API key: environment variable first (headless cron
/// deployments), then the OS keyring.
fn api_key(env_var: &str, keyring_key: &str) -> Result<String> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    match keyring_store::get(keyring_key) {
        Ok(Some(value)) if !value.is_empty() => Ok(value),
        Ok(_) => Err(CoreError::Config(ConfigError::MissingKey(format!(
            "{keyring_key} (set via keyring or {env_var})"
        )))),
        Err(e) => Err(CoreError::Custom(e.to_string())),
    }
}

/// YouTube Data API key from `UPLOADPULSE_YOUTUBE_API_KEY` or the keyring.
pub fn youtube_api_key() -> Result<String> {
    api_key("UPLOADPULSE_YOUTUBE_API_KEY", "youtube_api_key")
}

/// Resend API key from `UPLOADPULSE_RESEND_API_KEY` or the keyring.
pub fn resend_api_key() -> Result<String> {
    api_key("UPLOADPULSE_RESEND_API_KEY", "resend_api_key")
}
