//! Core error types for uploadpulse-core.
//!
//! Only collaborator I/O raises errors. Pure computations over publish
//! history never fail -- empty sequences and short histories degrade to
//! zeroed or default values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for uploadpulse-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The channel-data provider returned zero publish events.
    #[error("channel has no publish history")]
    EmptyHistory,

    /// Schedule forecasting was requested without any prior publish event.
    #[error("no prior publish event to forecast from")]
    NoHistory,

    /// Network or auth failure talking to the channel-data provider.
    /// Surfaced to the caller, never retried internally.
    #[error("channel-data provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// The notification sender reported a failure. The caller may re-invoke
    /// on the next scheduled evaluation; there is no automatic retry.
    #[error("notification failed: {message}")]
    NotificationFailed { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
