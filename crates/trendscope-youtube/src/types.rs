//! Raw response shapes for the `YouTube` Data API v3.
//!
//! Every field the API may omit is optional or defaulted; numeric statistics
//! arrive as decimal strings and are parsed tolerantly during normalization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub id: SearchResultId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// A `video` resource from `videos.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    pub id: Option<String>,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(rename = "contentDetails", default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Engagement counters. The API sends these as strings and omits any the
/// channel has hidden.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Statistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}
