//! Channel milestone ladder.
//!
//! Display-only progress computation over the channel's aggregate
//! counters. Never feeds scheduling or reminders.

use serde::{Deserialize, Serialize};

use crate::events::ChannelSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub target: u64,
    pub current: u64,
    pub unit: String,
    pub achieved: bool,
    /// 0.0 to 100.0, capped at 100.
    pub progress_pct: f64,
}

fn milestone(title: &str, target: u64, current: u64, unit: &str) -> Milestone {
    let progress = (current as f64 / target as f64 * 100.0).min(100.0);
    Milestone {
        title: title.to_string(),
        target,
        current,
        unit: unit.to_string(),
        achieved: current >= target,
        progress_pct: progress,
    }
}

/// The fixed milestone ladder, evaluated against current counters.
pub fn milestones(snapshot: &ChannelSnapshot) -> Vec<Milestone> {
    vec![
        milestone("First 1K Subscribers", 1_000, snapshot.subscriber_count, "subs"),
        milestone("5K Subscribers", 5_000, snapshot.subscriber_count, "subs"),
        milestone("10K Subscribers", 10_000, snapshot.subscriber_count, "subs"),
        milestone("100K Views Total", 100_000, snapshot.total_view_count, "views"),
        milestone("50 Videos Published", 50, snapshot.total_video_count, "videos"),
        milestone("100 Videos Published", 100, snapshot.total_video_count, "videos"),
    ]
}

/// First milestone not yet achieved, if any remain.
pub fn next_milestone(snapshot: &ChannelSnapshot) -> Option<Milestone> {
    milestones(snapshot).into_iter().find(|m| !m.achieved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(subs: u64, views: u64, videos: u64) -> ChannelSnapshot {
        ChannelSnapshot {
            subscriber_count: subs,
            total_view_count: views,
            total_video_count: videos,
            ..ChannelSnapshot::default()
        }
    }

    #[test]
    fn test_achieved_flags() {
        let ladder = milestones(&snapshot(1_240, 89_500, 47));
        assert!(ladder[0].achieved);
        assert!(!ladder[1].achieved);
        assert!(!ladder[3].achieved);
    }

    #[test]
    fn test_progress_capped_at_hundred() {
        let ladder = milestones(&snapshot(2_000, 0, 0));
        assert_eq!(ladder[0].progress_pct, 100.0);
        assert_eq!(ladder[1].progress_pct, 40.0);
    }

    #[test]
    fn test_next_milestone_is_first_unachieved() {
        let next = next_milestone(&snapshot(1_240, 89_500, 47)).unwrap();
        assert_eq!(next.title, "5K Subscribers");
    }

    #[test]
    fn test_next_milestone_none_when_ladder_complete() {
        assert!(next_milestone(&snapshot(20_000, 500_000, 150)).is_none());
    }
}
