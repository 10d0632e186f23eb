//! Trait seams for the two external collaborators.
//!
//! The evaluation orchestrator talks to these traits only; the real
//! implementations ([`super::youtube::YouTubeProvider`] and
//! [`super::resend::ResendNotifier`]) are swapped for in-memory fakes in
//! tests. Both are treated as blocking calls; timeout/retry discipline is
//! the caller's concern.

use crate::error::Result;
use crate::events::{ChannelSnapshot, PublishEvent};

/// Supplies channel aggregate counters and the publish-event history.
pub trait ChannelProvider {
    /// Resolve a channel handle to its snapshot counters.
    fn fetch_channel(&self, handle: &str) -> Result<ChannelSnapshot>;

    /// Most recent uploads for a channel, newest first as delivered by the
    /// provider. An empty list is data (a channel with no uploads), not a
    /// transport error.
    fn fetch_uploads(&self, channel_id: &str, max_results: u32) -> Result<Vec<PublishEvent>>;
}

/// Sends a notification email.
pub trait Notifier {
    fn send(&self, recipient: &str, subject: &str, body_html: &str) -> Result<()>;
}
