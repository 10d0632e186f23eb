pub mod analytics;
pub mod auth;
pub mod channel;
pub mod common;
pub mod config;
pub mod evaluate;
pub mod forecast;
pub mod urgency;
