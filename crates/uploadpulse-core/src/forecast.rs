//! Forward schedule of suggested upload dates.
//!
//! Candidates step by the target interval from the most recent upload.
//! Candidates already in the past (by local calendar date) are dropped; if
//! that empties the list -- the creator has been away longer than the whole
//! forecast horizon -- generation restarts from the evaluation instant so
//! the forecast is always non-empty and forward-looking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::events::PublishEvent;
use crate::timeref::TimeRef;

/// Number of candidate dates in a forecast.
pub const FORECAST_LEN: usize = 5;

/// Ordered future upload candidates, strictly increasing, all on or after
/// the evaluation instant's local date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleForecast {
    pub generated_at: DateTime<Utc>,
    pub dates: Vec<DateTime<Utc>>,
}

/// Candidate upload instants given the last publish time and a target
/// interval in days. Intervals below one day are clamped to one.
pub fn forecast_uploads(
    last_published: DateTime<Utc>,
    now: DateTime<Utc>,
    target_interval_days: u32,
    timeref: TimeRef,
) -> Vec<DateTime<Utc>> {
    let step = Duration::days(i64::from(target_interval_days.max(1)));
    let today = timeref.local_date(now);

    let mut dates = candidates_from(last_published, step);
    dates.retain(|candidate| timeref.local_date(*candidate) >= today);

    if dates.is_empty() {
        // Entire horizon already missed; re-anchor on the evaluation
        // instant instead of the stale last upload.
        dates = candidates_from(now, step);
    }

    dates
}

/// Forecast anchored on the most recent event of a normalized list.
///
/// # Errors
/// [`CoreError::NoHistory`] when there is no prior event to anchor on;
/// the caller must supply its own starting point in that case.
pub fn forecast_for(
    events: &[PublishEvent],
    now: DateTime<Utc>,
    target_interval_days: u32,
    timeref: TimeRef,
) -> Result<ScheduleForecast> {
    let last = events.first().ok_or(CoreError::NoHistory)?;
    Ok(ScheduleForecast {
        generated_at: now,
        dates: forecast_uploads(last.published_at, now, target_interval_days, timeref),
    })
}

fn candidates_from(anchor: DateTime<Utc>, step: Duration) -> Vec<DateTime<Utc>> {
    let mut dates = Vec::with_capacity(FORECAST_LEN);
    let mut cursor = anchor;
    for _ in 0..FORECAST_LEN {
        cursor += step;
        dates.push(cursor);
    }
    dates
}
