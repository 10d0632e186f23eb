//! Evaluation orchestrator.
//!
//! One evaluation = fetch history, normalize, compute urgency and the
//! forward schedule, run the dispatch gate, and send the reminder email if
//! it passes. The decision core ([`evaluate_at`]) is a pure function of the
//! evaluation instant, the normalized history, and the cadence config; the
//! [`Evaluator`] wraps it with the two collaborator calls.
//!
//! Everything is recomputed per invocation; there is no memory of prior
//! dispatch decisions, so a reminder can fire on every qualifying run
//! inside one window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{CadenceConfig, Config};
use crate::dispatch::{DispatchDecision, DispatchReason, ReminderGate};
use crate::error::{CoreError, Result};
use crate::events::{normalize, PublishEvent};
use crate::forecast::{forecast_for, ScheduleForecast};
use crate::integrations::email::reminder_body_html;
use crate::integrations::traits::{ChannelProvider, Notifier};
use crate::urgency::{classify, UrgencyAssessment};

/// What this evaluation did, for the external scheduler's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationAction {
    SkippedOutsideWindow,
    SkippedUploadedToday,
    SkippedNotScheduledDay,
    EmailSent,
    Error,
}

/// Structured result handed back to the external trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub success: bool,
    pub action: EvaluationAction,
    #[serde(rename = "daysSinceLastUpload", skip_serializing_if = "Option::is_none")]
    pub days_since_last_upload: Option<i64>,
    #[serde(rename = "nextScheduledDates", skip_serializing_if = "Option::is_none")]
    pub next_scheduled_dates: Option<Vec<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EvaluationReport {
    /// Failure payload for an unrecoverable error.
    pub fn from_error(err: &CoreError) -> Self {
        Self {
            success: false,
            action: EvaluationAction::Error,
            days_since_last_upload: None,
            next_scheduled_dates: None,
            message: Some(err.to_string()),
        }
    }
}

/// Pure decision state for one evaluation instant.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub days_since_last_upload: i64,
    pub published_today: bool,
    pub urgency: UrgencyAssessment,
    pub forecast: ScheduleForecast,
    pub decision: DispatchDecision,
}

/// Compute the full decision state from normalized history.
///
/// # Errors
/// [`CoreError::EmptyHistory`] when there are no events: with no history
/// and no fallback start point there is nothing to schedule against.
pub fn evaluate_at(
    now: DateTime<Utc>,
    events: &[PublishEvent],
    cadence: &CadenceConfig,
) -> Result<Evaluation> {
    let last = events.first().ok_or(CoreError::EmptyHistory)?;
    let timeref = cadence.timeref();

    let days_since_last_upload = timeref.days_between(last.published_at, now);
    let published_today = timeref.local_date(last.published_at) == timeref.local_date(now);

    let urgency = classify(days_since_last_upload, published_today);
    let forecast = forecast_for(events, now, cadence.target_interval_days, timeref)?;

    let gate = ReminderGate::new(
        u32::from(cadence.reminder_window_start_hour),
        u32::from(cadence.reminder_window_end_hour),
        timeref,
    );
    let decision = gate.decide(now, published_today, &forecast.dates);

    Ok(Evaluation {
        days_since_last_upload,
        published_today,
        urgency,
        forecast,
        decision,
    })
}

/// Wires the decision core to the channel-data provider and the
/// notification sender. Owns no state; the caller owns the collaborator
/// handles and the config.
pub struct Evaluator<'a> {
    pub provider: &'a dyn ChannelProvider,
    pub notifier: &'a dyn Notifier,
    pub config: &'a Config,
}

impl Evaluator<'_> {
    /// Run one evaluation at `now`.
    ///
    /// Skip outcomes are successes; only missing configuration, provider
    /// failures, empty history, and send failures propagate as errors.
    pub fn run(&self, now: DateTime<Utc>) -> Result<EvaluationReport> {
        self.config.cadence.validate()?;
        if self.config.channel.handle.is_empty() {
            return Err(CoreError::Config(
                crate::error::ConfigError::MissingKey("channel.handle".to_string()),
            ));
        }

        let snapshot = self.provider.fetch_channel(&self.config.channel.handle)?;
        let raw = self
            .provider
            .fetch_uploads(&snapshot.channel_id, self.config.channel.max_results)?;
        let events = normalize(raw)?;

        let evaluation = evaluate_at(now, &events, &self.config.cadence)?;

        let action = match evaluation.decision.reason {
            DispatchReason::OutsideWindow => EvaluationAction::SkippedOutsideWindow,
            DispatchReason::AlreadyPublishedToday => EvaluationAction::SkippedUploadedToday,
            DispatchReason::NotScheduledDay => EvaluationAction::SkippedNotScheduledDay,
            DispatchReason::Send => {
                let last = &events[0];
                let body = reminder_body_html(
                    &snapshot.channel_handle,
                    last.published_at,
                    self.config.cadence.target_interval_days,
                    self.config.cadence.reminder_window_end_hour,
                    self.config.cadence.timeref(),
                );
                self.notifier.send(
                    &self.config.reminder.recipient,
                    &self.config.reminder.subject,
                    &body,
                )?;
                EvaluationAction::EmailSent
            }
        };

        Ok(EvaluationReport {
            success: true,
            action,
            days_since_last_upload: Some(evaluation.days_since_last_upload),
            next_scheduled_dates: Some(evaluation.forecast.dates),
            message: None,
        })
    }
}
