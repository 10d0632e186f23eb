//! YouTube Data API v3 client.
//!
//! Resolves a channel handle to its snapshot counters, walks the uploads
//! playlist (paginated), and joins in per-video statistics. Transport and
//! auth failures surface as [`CoreError::ProviderUnavailable`]; an empty
//! uploads playlist is returned as an empty list and left to the
//! normalizer to classify.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::events::{ChannelSnapshot, PublishEvent};
use crate::integrations::traits::ChannelProvider;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Max ids per `videos` statistics call and items per playlist page.
const PAGE_SIZE: u32 = 50;

pub struct YouTubeProvider {
    api_key: String,
    base_url: String,
    rt: tokio::runtime::Runtime,
}

impl YouTubeProvider {
    /// Client against the production API.
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Client against an alternate base URL (tests point this at a local
    /// mock server).
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Ok(Self {
            api_key,
            base_url,
            rt: tokio::runtime::Runtime::new()?,
        })
    }

    fn get_json(&self, path_and_query: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        let response = self
            .rt
            .block_on(async { reqwest::Client::new().get(&url).send().await })
            .map_err(|e| CoreError::ProviderUnavailable {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = self.rt.block_on(response.text()).unwrap_or_default();
            return Err(CoreError::ProviderUnavailable {
                message: format!("HTTP {status}: {body}"),
            });
        }

        self.rt
            .block_on(response.json())
            .map_err(|e| CoreError::ProviderUnavailable {
                message: e.to_string(),
            })
    }

    /// Uploads playlist id for a channel.
    fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>> {
        let data = self.get_json(&format!(
            "channels?part=contentDetails&id={}&key={}",
            urlencoding::encode(channel_id),
            self.api_key
        ))?;

        Ok(data["items"]
            .get(0)
            .and_then(|item| item["contentDetails"]["relatedPlaylists"]["uploads"].as_str())
            .map(str::to_string))
    }

    /// One page of (video id, published-at) pairs plus the next page token.
    fn playlist_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<(Vec<(String, DateTime<Utc>)>, Option<String>)> {
        let mut query = format!(
            "playlistItems?part=snippet&playlistId={}&maxResults={}&key={}",
            urlencoding::encode(playlist_id),
            page_size,
            self.api_key
        );
        if let Some(token) = page_token {
            query.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }
        let data = self.get_json(&query)?;

        let mut page = Vec::new();
        if let Some(items) = data["items"].as_array() {
            for item in items {
                let snippet = &item["snippet"];
                let id = snippet["resourceId"]["videoId"].as_str();
                let published = snippet["publishedAt"].as_str().and_then(parse_instant);
                if let (Some(id), Some(published_at)) = (id, published) {
                    page.push((id.to_string(), published_at));
                }
            }
        }

        let next = data["nextPageToken"].as_str().map(str::to_string);
        Ok((page, next))
    }

    /// View/like/comment counts for up to [`PAGE_SIZE`] video ids.
    fn statistics_for(&self, ids: &[String]) -> Result<HashMap<String, (u64, u64, u64)>> {
        let data = self.get_json(&format!(
            "videos?part=statistics&id={}&key={}",
            ids.join(","),
            self.api_key
        ))?;

        let mut stats = HashMap::new();
        if let Some(items) = data["items"].as_array() {
            for item in items {
                if let Some(id) = item["id"].as_str() {
                    let s = &item["statistics"];
                    stats.insert(
                        id.to_string(),
                        (
                            parse_count(&s["viewCount"]),
                            parse_count(&s["likeCount"]),
                            parse_count(&s["commentCount"]),
                        ),
                    );
                }
            }
        }
        Ok(stats)
    }
}

impl ChannelProvider for YouTubeProvider {
    fn fetch_channel(&self, handle: &str) -> Result<ChannelSnapshot> {
        let clean = handle.trim_start_matches('@');
        let data = self.get_json(&format!(
            "channels?part=snippet,statistics&forHandle={}&key={}",
            urlencoding::encode(clean),
            self.api_key
        ))?;

        let Some(item) = data["items"].get(0) else {
            return Err(CoreError::ProviderUnavailable {
                message: format!("channel not found for handle '{handle}'"),
            });
        };

        let snippet = &item["snippet"];
        let statistics = &item["statistics"];
        let custom_url = snippet["customUrl"].as_str().unwrap_or(clean);

        Ok(ChannelSnapshot {
            channel_id: item["id"].as_str().unwrap_or_default().to_string(),
            channel_name: snippet["title"].as_str().unwrap_or_default().to_string(),
            channel_handle: format!("@{}", custom_url.trim_start_matches('@')),
            subscriber_count: parse_count(&statistics["subscriberCount"]),
            total_view_count: parse_count(&statistics["viewCount"]),
            total_video_count: parse_count(&statistics["videoCount"]),
        })
    }

    fn fetch_uploads(&self, channel_id: &str, max_results: u32) -> Result<Vec<PublishEvent>> {
        let Some(playlist_id) = self.uploads_playlist_id(channel_id)? else {
            return Ok(Vec::new());
        };

        let mut listed: Vec<(String, DateTime<Utc>)> = Vec::new();
        let mut page_token: Option<String> = None;
        while (listed.len() as u32) < max_results {
            let remaining = max_results - listed.len() as u32;
            let (page, next) = self.playlist_page(
                &playlist_id,
                remaining.min(PAGE_SIZE),
                page_token.as_deref(),
            )?;
            if page.is_empty() {
                break;
            }
            listed.extend(page);
            match next {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        let mut stats = HashMap::new();
        for chunk in listed.chunks(PAGE_SIZE as usize) {
            let ids: Vec<String> = chunk.iter().map(|(id, _)| id.clone()).collect();
            stats.extend(self.statistics_for(&ids)?);
        }

        Ok(listed
            .into_iter()
            .map(|(video_id, published_at)| {
                let (views, likes, comments) =
                    stats.get(&video_id).copied().unwrap_or((0, 0, 0));
                PublishEvent {
                    video_id,
                    published_at,
                    view_count: views,
                    like_count: likes,
                    comment_count: comments,
                }
            })
            .collect())
    }
}

/// Counts arrive as JSON strings from the API; tolerate plain numbers too.
fn parse_count(value: &Value) -> u64 {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| value.as_u64())
        .unwrap_or(0)
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
