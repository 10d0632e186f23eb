//! Reminder dispatch gate.
//!
//! Three independent checks, all of which must pass for a reminder email
//! to fire on this evaluation: the local hour is inside the reminder
//! window, nothing was published today, and today is one of the forecast
//! dates. The first failing check names the reason so skipped evaluations
//! stay observable.
//!
//! The gate is stateless across invocations. It may fire on every
//! qualifying evaluation inside one window; suppression between runs is a
//! caller concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timeref::TimeRef;

/// Why the gate decided the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchReason {
    /// All checks passed.
    Send,
    OutsideWindow,
    AlreadyPublishedToday,
    NotScheduledDay,
}

/// Outcome of one gate evaluation. A value, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchDecision {
    pub should_send: bool,
    pub reason: DispatchReason,
}

/// The combined reminder check, configured once per deployment.
#[derive(Debug, Clone, Copy)]
pub struct ReminderGate {
    /// First local hour (inclusive) reminders may fire.
    pub window_start_hour: u32,
    /// Last local hour (inclusive) reminders may fire.
    pub window_end_hour: u32,
    pub timeref: TimeRef,
}

impl ReminderGate {
    pub fn new(window_start_hour: u32, window_end_hour: u32, timeref: TimeRef) -> Self {
        Self {
            window_start_hour,
            window_end_hour,
            timeref,
        }
    }

    /// Run the three checks in order and report the first failure, or
    /// `Send` when all pass.
    pub fn decide(
        &self,
        now: DateTime<Utc>,
        published_today: bool,
        forecast_dates: &[DateTime<Utc>],
    ) -> DispatchDecision {
        let hour = self.timeref.local_hour(now);
        if hour < self.window_start_hour || hour > self.window_end_hour {
            return DispatchDecision {
                should_send: false,
                reason: DispatchReason::OutsideWindow,
            };
        }

        if published_today {
            return DispatchDecision {
                should_send: false,
                reason: DispatchReason::AlreadyPublishedToday,
            };
        }

        let today = self.timeref.local_date(now);
        let scheduled_today = forecast_dates
            .iter()
            .any(|date| self.timeref.local_date(*date) == today);
        if !scheduled_today {
            return DispatchDecision {
                should_send: false,
                reason: DispatchReason::NotScheduledDay,
            };
        }

        DispatchDecision {
            should_send: true,
            reason: DispatchReason::Send,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_datetime(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn gate() -> ReminderGate {
        ReminderGate::new(10, 22, TimeRef::utc())
    }

    #[test]
    fn test_outside_window_blocks_even_on_scheduled_day() {
        let now = utc_datetime(2024, 3, 17, 23);
        let forecast = vec![now];
        let decision = gate().decide(now, false, &forecast);
        assert!(!decision.should_send);
        assert_eq!(decision.reason, DispatchReason::OutsideWindow);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let forecast = |now: DateTime<Utc>| vec![now];
        let at_start = utc_datetime(2024, 3, 17, 10);
        assert!(gate().decide(at_start, false, &forecast(at_start)).should_send);
        let at_end = utc_datetime(2024, 3, 17, 22);
        assert!(gate().decide(at_end, false, &forecast(at_end)).should_send);
        let before = utc_datetime(2024, 3, 17, 9);
        assert!(!gate().decide(before, false, &forecast(before)).should_send);
    }

    #[test]
    fn test_published_today_blocks() {
        let now = utc_datetime(2024, 3, 17, 15);
        let decision = gate().decide(now, true, &[now]);
        assert!(!decision.should_send);
        assert_eq!(decision.reason, DispatchReason::AlreadyPublishedToday);
    }

    #[test]
    fn test_not_scheduled_day_blocks() {
        let now = utc_datetime(2024, 3, 17, 15);
        let forecast = vec![utc_datetime(2024, 3, 18, 12), utc_datetime(2024, 3, 20, 12)];
        let decision = gate().decide(now, false, &forecast);
        assert!(!decision.should_send);
        assert_eq!(decision.reason, DispatchReason::NotScheduledDay);
    }

    #[test]
    fn test_all_checks_pass_sends() {
        let now = utc_datetime(2024, 3, 17, 15);
        // Forecast instant has a different time of day; only dates match.
        let forecast = vec![utc_datetime(2024, 3, 17, 8), utc_datetime(2024, 3, 19, 8)];
        let decision = gate().decide(now, false, &forecast);
        assert!(decision.should_send);
        assert_eq!(decision.reason, DispatchReason::Send);
    }

    #[test]
    fn test_scheduled_day_matches_in_local_dates() {
        // 23:30 UTC on the 16th is 01:30 on the 17th at UTC+2. With a
        // forecast instant that is also the 17th locally, the gate fires
        // at 13:00 UTC (15:00 local).
        let gate = ReminderGate::new(10, 22, TimeRef::fixed_hours(2));
        let now = utc_datetime(2024, 3, 17, 13);
        let forecast = vec![utc_datetime(2024, 3, 16, 23)];
        let decision = gate.decide(now, false, &forecast);
        assert!(decision.should_send);
    }

    #[test]
    fn test_reason_serializes_snake_case() {
        let reason = serde_json::to_string(&DispatchReason::OutsideWindow).unwrap();
        assert_eq!(reason, "\"outside_window\"");
    }
}
