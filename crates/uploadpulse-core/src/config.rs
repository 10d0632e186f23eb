//! TOML-based application configuration.
//!
//! Stores the tracked channel handle, the target upload cadence, the
//! reminder window, and the reminder email fields. API keys are NOT kept
//! here -- they live in the OS keyring (see `integrations::keyring_store`)
//! with an env-var fallback for headless cron deployments.
//!
//! Configuration is stored at `~/.config/uploadpulse/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::timeref::TimeRef;

/// Tracked channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel handle, with or without the leading `@`.
    #[serde(default)]
    pub handle: String,
    /// How many recent uploads to fetch per evaluation.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Upload cadence and reminder-window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Target days between uploads.
    #[serde(default = "default_target_interval_days")]
    pub target_interval_days: u32,
    /// Display time zone as whole hours east of UTC.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i8,
    /// First local hour (inclusive) reminders may fire.
    #[serde(default = "default_window_start_hour")]
    pub reminder_window_start_hour: u8,
    /// Last local hour (inclusive) reminders may fire.
    #[serde(default = "default_window_end_hour")]
    pub reminder_window_end_hour: u8,
}

impl CadenceConfig {
    /// Time reference for all local-calendar computations.
    pub fn timeref(&self) -> TimeRef {
        TimeRef::fixed_hours(self.utc_offset_hours)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_interval_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "cadence.target_interval_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidValue {
                key: "cadence.utc_offset_hours".to_string(),
                message: "must be between -23 and 23".to_string(),
            });
        }
        if self.reminder_window_start_hour > 23 || self.reminder_window_end_hour > 23 {
            return Err(ConfigError::InvalidValue {
                key: "cadence.reminder_window".to_string(),
                message: "hours must be between 0 and 23".to_string(),
            });
        }
        if self.reminder_window_start_hour > self.reminder_window_end_hour {
            return Err(ConfigError::InvalidValue {
                key: "cadence.reminder_window".to_string(),
                message: "start hour must not be after end hour".to_string(),
            });
        }
        Ok(())
    }
}

/// Reminder email settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Recipient address for reminder emails.
    #[serde(default)]
    pub recipient: String,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/uploadpulse/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

// Default functions
fn default_max_results() -> u32 {
    50
}
fn default_target_interval_days() -> u32 {
    2
}
fn default_utc_offset_hours() -> i8 {
    1
}
fn default_window_start_hour() -> u8 {
    10
}
fn default_window_end_hour() -> u8 {
    22
}
fn default_from() -> String {
    "Uploadpulse <onboarding@resend.dev>".to_string()
}
fn default_subject() -> String {
    "Time to upload a new video!".to_string()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            handle: String::new(),
            max_results: default_max_results(),
        }
    }
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            target_interval_days: default_target_interval_days(),
            utc_offset_hours: default_utc_offset_hours(),
            reminder_window_start_hour: default_window_start_hour(),
            reminder_window_end_hour: default_window_end_hour(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            from: default_from(),
            subject: default_subject(),
        }
    }
}

/// Returns `~/.config/uploadpulse[-dev]/` based on UPLOADPULSE_ENV.
///
/// Set UPLOADPULSE_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("UPLOADPULSE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("uploadpulse-dev")
    } else {
        base_dir.join("uploadpulse")
    };

    fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    /// Path of the TOML config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/uploadpulse"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path (absent file means defaults).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default config path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
