//! Publish-event model and normalizer.
//!
//! The channel-data provider hands back raw video records in whatever order
//! and with whatever duplicates a paginated refetch produced. Everything
//! downstream (analytics, forecasting, the reminder gate) assumes one entry
//! per video, sorted strictly descending by publish time; this module is the
//! single place that establishes that shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// A single published video, as a read-only snapshot per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishEvent {
    /// Provider-assigned video id, unique per channel.
    pub video_id: String,
    /// Instant the video went public.
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Channel aggregate counters.
///
/// Used only for display and milestone computation, never for scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub channel_id: String,
    pub channel_name: String,
    pub channel_handle: String,
    pub subscriber_count: u64,
    pub total_view_count: u64,
    pub total_video_count: u64,
}

/// Canonicalize raw provider records: collapse duplicate video ids
/// (last record wins, matching refetch semantics) and sort strictly
/// descending by publish time, ties broken by id for determinism.
///
/// # Errors
/// Returns [`CoreError::EmptyHistory`] when the provider supplied zero
/// events, so downstream consumers never divide by an empty list.
pub fn normalize(raw: Vec<PublishEvent>) -> Result<Vec<PublishEvent>> {
    if raw.is_empty() {
        return Err(CoreError::EmptyHistory);
    }

    let mut by_id: HashMap<String, PublishEvent> = HashMap::with_capacity(raw.len());
    for event in raw {
        by_id.insert(event.video_id.clone(), event);
    }

    let mut events: Vec<PublishEvent> = by_id.into_values().collect();
    events.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.video_id.cmp(&b.video_id))
    });

    Ok(events)
}
