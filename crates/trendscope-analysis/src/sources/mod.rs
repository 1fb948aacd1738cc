//! Sample-data provider sources.
//!
//! TikTok and Instagram expose no usable public trend API, so these sources
//! synthesize representative records. They never fail and never touch the
//! network; records still pass through the same normalization into
//! [`trendscope_core::TrendItem`] that live providers use.

pub mod instagram;
pub mod tiktok;

use chrono::Utc;
use trendscope_core::{text, Platform, TrendItem};

/// A raw sample record, shaped like what a scraper would hand back.
pub(crate) struct SampleRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub hashtags: &'static [&'static str],
}

/// Normalize one sample record into the unified shape.
pub(crate) fn normalize_sample(record: SampleRecord, platform: Platform, url: String) -> TrendItem {
    let mut hashtags: Vec<String> = record.hashtags.iter().map(|t| t.to_lowercase()).collect();
    hashtags.extend(text::extract_hashtags(&format!(
        "{} {}",
        record.title, record.description
    )));
    hashtags.dedup();

    TrendItem {
        id: record.id,
        title: record.title,
        description: record.description,
        platform,
        view_count: record.view_count,
        like_count: record.like_count,
        comment_count: record.comment_count,
        url,
        thumbnail_url: None,
        author: Some(record.author),
        published_at: Some(Utc::now()),
        duration_secs: 0,
        hashtags,
    }
}
