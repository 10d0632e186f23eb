//! Caller-supplied time reference for "local day" and "local hour".
//!
//! Every calendar-sensitive computation in this crate (days since last
//! upload, reminder window hours, scheduled-day matching) runs in the
//! channel's display time zone, not raw UTC. The offset is injected as a
//! pure `instant -> offset` function so the engine stays deterministic and
//! testable without wall-clock or tz-database dependencies.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// Pure function mapping an instant to its UTC offset.
pub type OffsetProvider = fn(DateTime<Utc>) -> FixedOffset;

/// Time reference used for local-calendar computations.
///
/// Either a fixed UTC offset (the common deployment case, configured in
/// whole hours) or an injected provider function for callers that need
/// seasonal offsets.
#[derive(Debug, Clone, Copy)]
pub enum TimeRef {
    Fixed(FixedOffset),
    Provider(OffsetProvider),
}

impl TimeRef {
    /// UTC reference (offset zero).
    pub fn utc() -> Self {
        TimeRef::Fixed(FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// Fixed offset in whole hours east of UTC. Out-of-range values
    /// (beyond +/-23) fall back to UTC; config validation rejects them
    /// before they get here.
    pub fn fixed_hours(hours: i8) -> Self {
        let offset = FixedOffset::east_opt(i32::from(hours) * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
        TimeRef::Fixed(offset)
    }

    /// Offset in effect at the given instant.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            TimeRef::Fixed(offset) => *offset,
            TimeRef::Provider(provider) => provider(instant),
        }
    }

    /// The instant expressed in the reference's local time.
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }

    /// Local calendar date of the instant.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }

    /// Local hour of day (0-23) of the instant.
    pub fn local_hour(&self, instant: DateTime<Utc>) -> u32 {
        self.local(instant).hour()
    }

    /// Whole local calendar days from `earlier` to `later`.
    ///
    /// Counted on local dates, so a publish at 23:50 followed by an
    /// evaluation at 00:10 the next local day is 1 day, not 0.
    pub fn days_between(&self, earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
        (self.local_date(later) - self.local_date(earlier)).num_days()
    }
}

impl Default for TimeRef {
    fn default() -> Self {
        TimeRef::utc()
    }
}
