//! Urgency classification for the accountability banner.
//!
//! A pure function of (days since last publish, published today) producing
//! a discrete tier plus the headline/detail pair the dashboard renders.
//! The day thresholds follow the 2-day target cadence: day 2 is "due
//! today", day 3 is one day overdue, day 4 and beyond is critical.

use serde::{Deserialize, Serialize};

/// How overdue the creator is. Totally ordered: `Ok < Warning < Urgent <
/// Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Ok,
    Warning,
    Urgent,
    Critical,
}

/// Tier plus user-facing messaging. Recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyAssessment {
    pub tier: UrgencyTier,
    pub headline: String,
    pub detail: String,
    pub days_since_last_publish: i64,
    pub published_today: bool,
}

/// Classify the current cadence state.
///
/// `published_today` always wins: a same-day upload is `Ok` regardless of
/// the day count. Negative day counts (a future-dated event from the
/// provider) are treated as zero.
pub fn classify(days_since_last_publish: i64, published_today: bool) -> UrgencyAssessment {
    let days = days_since_last_publish.max(0);

    let (tier, headline, detail) = if published_today {
        (
            UrgencyTier::Ok,
            "Published today".to_string(),
            "Today's video is up. Nothing left to do.".to_string(),
        )
    } else {
        match days {
            0 => (
                UrgencyTier::Ok,
                "All good".to_string(),
                "The last upload was today. You're on schedule.".to_string(),
            ),
            1 => (
                UrgencyTier::Ok,
                "On track".to_string(),
                "Last upload was yesterday. The next one is due tomorrow.".to_string(),
            ),
            2 => (
                UrgencyTier::Warning,
                "Upload due today".to_string(),
                "It's been 2 days since the last upload. Today is an upload day.".to_string(),
            ),
            3 => (
                UrgencyTier::Urgent,
                "One day overdue".to_string(),
                "The last upload was 3 days ago. Time to publish.".to_string(),
            ),
            _ => (
                UrgencyTier::Critical,
                format!("{} days overdue", days - 2),
                format!(
                    "The last upload was {days} days ago. The schedule is slipping."
                ),
            ),
        }
    };

    UrgencyAssessment {
        tier,
        headline,
        detail,
        days_since_last_publish: days,
        published_today,
    }
}
