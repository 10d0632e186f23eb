//! # Uploadpulse Core Library
//!
//! Core business logic for Uploadpulse, an upload accountability engine
//! for a content creator's channel. It implements a CLI-first philosophy:
//! all operations are available via a standalone CLI binary, and an
//! external scheduler drives the reminder evaluation through the same
//! library.
//!
//! ## Architecture
//!
//! - **Event Normalizer**: canonicalizes raw provider records into a
//!   deduplicated, descending-sorted publish history
//! - **Analytics**: streaks, cadence, day-of-week performance, and trend,
//!   recomputed from scratch on every evaluation
//! - **Forecast**: forward schedule of suggested upload dates
//! - **Urgency + Dispatch**: how overdue the creator is, and whether this
//!   evaluation should fire a reminder email
//! - **Integrations**: YouTube Data API provider and Resend email sender
//!   behind trait seams
//!
//! ## Key Components
//!
//! - [`UploadAnalyzer`]: cadence and performance analytics
//! - [`ReminderGate`]: the three-check dispatch decision
//! - [`Evaluator`]: one full evaluation wired to the collaborators
//! - [`Config`]: TOML application configuration

pub mod analytics;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod evaluation;
pub mod events;
pub mod forecast;
pub mod integrations;
pub mod milestones;
pub mod timeref;
pub mod urgency;

pub use analytics::{TrendDirection, UploadAnalytics, UploadAnalyzer, WeekdayStats};
pub use config::{CadenceConfig, ChannelConfig, Config, ReminderConfig};
pub use dispatch::{DispatchDecision, DispatchReason, ReminderGate};
pub use error::{ConfigError, CoreError, Result};
pub use evaluation::{Evaluation, EvaluationAction, EvaluationReport, Evaluator};
pub use events::{normalize, ChannelSnapshot, PublishEvent};
pub use forecast::{forecast_for, forecast_uploads, ScheduleForecast, FORECAST_LEN};
pub use integrations::{ChannelProvider, Notifier};
pub use milestones::{milestones, next_milestone, Milestone};
pub use timeref::{OffsetProvider, TimeRef};
pub use urgency::{classify, UrgencyAssessment, UrgencyTier};
