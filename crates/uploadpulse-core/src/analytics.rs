//! Upload-history analytics.
//!
//! Pure computations over the normalized publish-event list:
//! - day-of-week upload counts and the best-performing weekday
//! - average interval between uploads
//! - current and longest weekly streaks
//! - short-term view trend
//! - top videos by views
//!
//! All of it is recomputed from scratch on every call; nothing here holds
//! state between evaluations. Empty or short histories degrade to zeroed
//! values rather than erroring.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::events::PublishEvent;
use crate::timeref::TimeRef;

/// Weekdays in canonical display order. Ties in the best-weekday
/// computation resolve to the earliest entry here.
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Direction of the channel's short-term view trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Growing,
    /// Also the answer when there are too few events to tell --
    /// insufficient signal, not an error.
    #[default]
    Stable,
    Declining,
}

/// Upload count and view total for one weekday, in the display time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayStats {
    pub weekday: Weekday,
    pub uploads: u32,
    pub total_views: u64,
}

/// Analytics over a channel's publish history. A pure value object,
/// recomputed on every evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadAnalytics {
    /// One entry per weekday in Sun..Sat order; weekdays without uploads
    /// are present with zero counts.
    pub uploads_by_weekday: Vec<WeekdayStats>,
    /// Weekday with the highest average views per upload. `None` only for
    /// an empty history.
    pub best_weekday: Option<Weekday>,
    /// Mean gap between consecutive uploads, rounded to whole days.
    /// 0.0 with fewer than two events.
    pub average_interval_days: f64,
    pub current_streak_weeks: u32,
    pub longest_streak_weeks: u32,
    pub recent_trend: TrendDirection,
    /// Top videos by view count, ties most-recent-first.
    pub top_videos: Vec<PublishEvent>,
}

/// Analyzer for upload cadence and performance.
///
/// Thresholds are fields so boundary behavior can be pinned in tests;
/// the defaults are the production values.
#[derive(Debug, Clone, Copy)]
pub struct UploadAnalyzer {
    /// A gap counts toward a streak while it is at most this many weeks.
    pub streak_slack_weeks: f64,
    /// Events per trend bucket; the trend needs two full buckets.
    pub trend_window: usize,
    /// Recent mean must exceed previous mean by this factor to be Growing.
    pub trend_growth_factor: f64,
    /// Recent mean below previous mean times this factor is Declining.
    pub trend_decline_factor: f64,
    /// How many top videos to report.
    pub top_count: usize,
    pub timeref: TimeRef,
}

impl Default for UploadAnalyzer {
    fn default() -> Self {
        Self {
            streak_slack_weeks: 1.5,
            trend_window: 10,
            trend_growth_factor: 1.1,
            trend_decline_factor: 0.9,
            top_count: 5,
            timeref: TimeRef::utc(),
        }
    }
}

impl UploadAnalyzer {
    /// Analyzer with default thresholds computing weekdays in the given
    /// time reference.
    pub fn new(timeref: TimeRef) -> Self {
        Self {
            timeref,
            ..Self::default()
        }
    }

    /// Compute the full analytics report.
    ///
    /// `events` must be normalized (descending by publish time); `now` is
    /// the evaluation instant used for the current-streak recency check.
    pub fn analyze(&self, events: &[PublishEvent], now: DateTime<Utc>) -> UploadAnalytics {
        let uploads_by_weekday = self.weekday_stats(events);
        UploadAnalytics {
            best_weekday: best_weekday(&uploads_by_weekday),
            uploads_by_weekday,
            average_interval_days: average_interval_days(events),
            current_streak_weeks: self.current_streak_weeks(events, now),
            longest_streak_weeks: self.longest_streak_weeks(events),
            recent_trend: self.trend(events),
            top_videos: self.top_videos(events),
        }
    }

    /// Upload count and view total per weekday of the local publish date.
    pub fn weekday_stats(&self, events: &[PublishEvent]) -> Vec<WeekdayStats> {
        let mut stats: Vec<WeekdayStats> = WEEKDAY_ORDER
            .iter()
            .map(|&weekday| WeekdayStats {
                weekday,
                uploads: 0,
                total_views: 0,
            })
            .collect();

        for event in events {
            let weekday = self.timeref.local(event.published_at).weekday();
            let slot = weekday.num_days_from_sunday() as usize;
            stats[slot].uploads += 1;
            stats[slot].total_views += event.view_count;
        }

        stats
    }

    /// Maximum gap, in seconds, that still keeps a weekly streak alive.
    fn streak_slack_seconds(&self) -> f64 {
        self.streak_slack_weeks * 7.0 * 86_400.0
    }

    fn gap_keeps_streak(&self, gap: Duration) -> bool {
        gap.num_seconds() as f64 <= self.streak_slack_seconds()
    }

    /// Consecutive on-cadence weeks ending at the most recent upload.
    ///
    /// Zero when the most recent upload is itself already out of slack
    /// relative to `now` -- the streak is broken even if history was tidy.
    pub fn current_streak_weeks(&self, events: &[PublishEvent], now: DateTime<Utc>) -> u32 {
        let Some(latest) = events.first() else {
            return 0;
        };
        if !self.gap_keeps_streak(now - latest.published_at) {
            return 0;
        }

        let mut streak = 1u32;
        for pair in events.windows(2) {
            if self.gap_keeps_streak(pair[0].published_at - pair[1].published_at) {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }

    /// Longest run of consecutive on-cadence uploads anywhere in history.
    pub fn longest_streak_weeks(&self, events: &[PublishEvent]) -> u32 {
        if events.is_empty() {
            return 0;
        }

        let mut longest = 1u32;
        let mut run = 1u32;
        for pair in events.windows(2) {
            if self.gap_keeps_streak(pair[0].published_at - pair[1].published_at) {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 1;
            }
        }
        longest
    }

    /// Compare mean views of the newest `trend_window` events against the
    /// `trend_window` before them. Needs two full windows, else Stable.
    pub fn trend(&self, events: &[PublishEvent]) -> TrendDirection {
        if events.len() < self.trend_window * 2 {
            return TrendDirection::Stable;
        }

        let recent = mean_views(&events[..self.trend_window]);
        let previous = mean_views(&events[self.trend_window..self.trend_window * 2]);

        if recent > previous * self.trend_growth_factor {
            TrendDirection::Growing
        } else if recent < previous * self.trend_decline_factor {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    /// The `top_count` most viewed videos, ties broken by recency.
    pub fn top_videos(&self, events: &[PublishEvent]) -> Vec<PublishEvent> {
        let mut ranked = events.to_vec();
        ranked.sort_by(|a, b| {
            b.view_count
                .cmp(&a.view_count)
                .then_with(|| b.published_at.cmp(&a.published_at))
        });
        ranked.truncate(self.top_count);
        ranked
    }
}

/// Mean gap between consecutive uploads, rounded to whole days.
/// 0.0 with fewer than two events.
pub fn average_interval_days(events: &[PublishEvent]) -> f64 {
    if events.len() < 2 {
        return 0.0;
    }

    let total_seconds: i64 = events
        .windows(2)
        .map(|pair| (pair[0].published_at - pair[1].published_at).num_seconds())
        .sum();
    let mean_days = total_seconds as f64 / (events.len() - 1) as f64 / 86_400.0;
    mean_days.round()
}

/// Weekday with the highest average views per upload. Weekdays with zero
/// uploads are excluded; ties resolve to the earliest weekday in Sun..Sat
/// order because the stats come pre-sorted that way.
fn best_weekday(stats: &[WeekdayStats]) -> Option<Weekday> {
    let mut best: Option<(Weekday, f64)> = None;
    for entry in stats {
        if entry.uploads == 0 {
            continue;
        }
        let avg = entry.total_views as f64 / f64::from(entry.uploads);
        match best {
            Some((_, best_avg)) if avg <= best_avg => {}
            _ => best = Some((entry.weekday, avg)),
        }
    }
    best.map(|(weekday, _)| weekday)
}

fn mean_views(events: &[PublishEvent]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }
    events.iter().map(|e| e.view_count as f64).sum::<f64>() / events.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::normalize;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn utc_datetime(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn event_at(id: &str, at: DateTime<Utc>, views: u64) -> PublishEvent {
        PublishEvent {
            video_id: id.to_string(),
            published_at: at,
            view_count: views,
            like_count: 0,
            comment_count: 0,
        }
    }

    /// Events spaced `gap_days` apart, newest first, ending at `latest`.
    fn cadence_events(latest: DateTime<Utc>, gap_days: i64, count: usize) -> Vec<PublishEvent> {
        (0..count)
            .map(|i| {
                event_at(
                    &format!("v{i}"),
                    latest - Duration::days(gap_days * i as i64),
                    100,
                )
            })
            .collect()
    }

    #[test]
    fn test_average_interval_two_day_cadence() {
        let events = cadence_events(utc_datetime(2024, 3, 20, 12), 2, 10);
        assert_eq!(average_interval_days(&events), 2.0);
    }

    #[test]
    fn test_average_interval_single_event_is_zero() {
        let events = cadence_events(utc_datetime(2024, 3, 20, 12), 2, 1);
        assert_eq!(average_interval_days(&events), 0.0);
    }

    #[test]
    fn test_weekday_stats_has_all_seven_days() {
        let analyzer = UploadAnalyzer::default();
        let stats = analyzer.weekday_stats(&cadence_events(utc_datetime(2024, 3, 20, 12), 7, 3));
        assert_eq!(stats.len(), 7);
        let with_uploads: u32 = stats.iter().map(|s| s.uploads).sum();
        assert_eq!(with_uploads, 3);
        // Weekly cadence lands every event on the same weekday.
        assert_eq!(stats.iter().filter(|s| s.uploads > 0).count(), 1);
    }

    #[test]
    fn test_best_weekday_by_average_views() {
        let analyzer = UploadAnalyzer::default();
        // 2024-03-17 is a Sunday, 2024-03-18 a Monday.
        let events = vec![
            event_at("a", utc_datetime(2024, 3, 17, 12), 100),
            event_at("b", utc_datetime(2024, 3, 10, 12), 100),
            event_at("c", utc_datetime(2024, 3, 18, 12), 500),
        ];
        let report = analyzer.analyze(&events, utc_datetime(2024, 3, 19, 12));
        assert_eq!(report.best_weekday, Some(Weekday::Mon));
    }

    #[test]
    fn test_best_weekday_tie_breaks_sunday_first() {
        let analyzer = UploadAnalyzer::default();
        let events = vec![
            event_at("mon", utc_datetime(2024, 3, 18, 12), 100),
            event_at("sun", utc_datetime(2024, 3, 17, 12), 100),
        ];
        let stats = analyzer.weekday_stats(&events);
        assert_eq!(best_weekday(&stats), Some(Weekday::Sun));
    }

    #[test]
    fn test_best_weekday_none_for_empty_history() {
        let analyzer = UploadAnalyzer::default();
        let report = analyzer.analyze(&[], utc_datetime(2024, 3, 19, 12));
        assert_eq!(report.best_weekday, None);
        assert_eq!(report.uploads_by_weekday.len(), 7);
    }

    #[test]
    fn test_current_streak_counts_on_cadence_weeks() {
        let analyzer = UploadAnalyzer::default();
        let now = utc_datetime(2024, 3, 20, 12);
        let events = cadence_events(now - Duration::days(2), 7, 4);
        assert_eq!(analyzer.current_streak_weeks(&events, now), 4);
    }

    #[test]
    fn test_current_streak_zero_when_latest_event_stale() {
        let analyzer = UploadAnalyzer::default();
        let now = utc_datetime(2024, 3, 20, 12);
        // Perfect weekly history, but the latest upload is 12 days old:
        // past the 1.5-week slack, so the current streak is broken.
        let events = cadence_events(now - Duration::days(12), 7, 4);
        assert_eq!(analyzer.current_streak_weeks(&events, now), 0);
        assert_eq!(analyzer.longest_streak_weeks(&events), 4);
    }

    #[test]
    fn test_current_streak_stops_at_first_broken_gap() {
        let analyzer = UploadAnalyzer::default();
        let now = utc_datetime(2024, 3, 20, 12);
        let mut events = cadence_events(now - Duration::days(1), 7, 3);
        // A month-long gap, then more history behind it.
        let stale_anchor = events.last().unwrap().published_at - Duration::days(30);
        events.extend(cadence_events(stale_anchor, 7, 5));
        assert_eq!(analyzer.current_streak_weeks(&events, now), 3);
        assert_eq!(analyzer.longest_streak_weeks(&events), 5);
    }

    #[test]
    fn test_longest_streak_single_event_is_one() {
        let analyzer = UploadAnalyzer::default();
        let events = cadence_events(utc_datetime(2024, 3, 20, 12), 7, 1);
        assert_eq!(analyzer.longest_streak_weeks(&events), 1);
    }

    #[test]
    fn test_gap_at_exactly_slack_boundary_keeps_streak() {
        let analyzer = UploadAnalyzer::default();
        let now = utc_datetime(2024, 3, 20, 12);
        let events = vec![
            event_at("a", now - Duration::days(1), 10),
            // Exactly 1.5 weeks (252 hours) earlier.
            event_at("b", now - Duration::days(1) - Duration::hours(252), 10),
        ];
        assert_eq!(analyzer.current_streak_weeks(&events, now), 2);
    }

    #[test]
    fn test_trend_nineteen_events_is_stable() {
        let analyzer = UploadAnalyzer::default();
        let events = cadence_events(utc_datetime(2024, 3, 20, 12), 2, 19);
        assert_eq!(analyzer.trend(&events), TrendDirection::Stable);
    }

    #[test]
    fn test_trend_growing_above_ten_percent() {
        let analyzer = UploadAnalyzer::default();
        let latest = utc_datetime(2024, 3, 20, 12);
        let events: Vec<PublishEvent> = (0..20)
            .map(|i| {
                let views = if i < 10 { 1000 } else { 800 };
                event_at(&format!("v{i}"), latest - Duration::days(2 * i as i64), views)
            })
            .collect();
        // 1000 > 800 * 1.1
        assert_eq!(analyzer.trend(&events), TrendDirection::Growing);
    }

    #[test]
    fn test_trend_stable_within_bands() {
        let analyzer = UploadAnalyzer::default();
        let latest = utc_datetime(2024, 3, 20, 12);
        let events: Vec<PublishEvent> = (0..20)
            .map(|i| {
                let views = if i < 10 { 850 } else { 800 };
                event_at(&format!("v{i}"), latest - Duration::days(2 * i as i64), views)
            })
            .collect();
        assert_eq!(analyzer.trend(&events), TrendDirection::Stable);
    }

    #[test]
    fn test_trend_declining_below_ninety_percent() {
        let analyzer = UploadAnalyzer::default();
        let latest = utc_datetime(2024, 3, 20, 12);
        let events: Vec<PublishEvent> = (0..20)
            .map(|i| {
                let views = if i < 10 { 500 } else { 800 };
                event_at(&format!("v{i}"), latest - Duration::days(2 * i as i64), views)
            })
            .collect();
        assert_eq!(analyzer.trend(&events), TrendDirection::Declining);
    }

    #[test]
    fn test_top_videos_ranked_by_views_then_recency() {
        let analyzer = UploadAnalyzer::default();
        let latest = utc_datetime(2024, 3, 20, 12);
        let events = vec![
            event_at("new_small", latest, 10),
            event_at("new_big", latest - Duration::days(2), 500),
            event_at("old_big", latest - Duration::days(30), 500),
            event_at("mid", latest - Duration::days(4), 200),
        ];
        let top = analyzer.top_videos(&events);
        let ids: Vec<&str> = top.iter().map(|e| e.video_id.as_str()).collect();
        assert_eq!(ids, vec!["new_big", "old_big", "mid", "new_small"]);
    }

    #[test]
    fn test_top_videos_caps_at_five() {
        let analyzer = UploadAnalyzer::default();
        let events = cadence_events(utc_datetime(2024, 3, 20, 12), 2, 12);
        assert_eq!(analyzer.top_videos(&events).len(), 5);
    }

    proptest! {
        #[test]
        fn prop_current_streak_never_exceeds_longest(
            gaps in prop::collection::vec(1i64..30, 0..25),
            recency_days in 0i64..30,
        ) {
            let now = utc_datetime(2024, 6, 1, 12);
            let mut at = now - Duration::days(recency_days);
            let mut raw = vec![event_at("v0", at, 1)];
            for (i, gap) in gaps.iter().enumerate() {
                at -= Duration::days(*gap);
                raw.push(event_at(&format!("v{}", i + 1), at, 1));
            }
            let events = normalize(raw).unwrap();
            let analyzer = UploadAnalyzer::default();
            prop_assert!(
                analyzer.current_streak_weeks(&events, now)
                    <= analyzer.longest_streak_weeks(&events)
            );
        }
    }
}
