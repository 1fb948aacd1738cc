//! Multi-platform fan-out with per-branch failure isolation.
//!
//! One keyword or trending query turns into three concurrent provider calls.
//! Each branch catches its own failure and contributes an empty list; a
//! single `try/catch` around all three would let one provider's outage
//! suppress the others' results, so each branch handles itself.

use trendscope_core::TrendItem;
use trendscope_youtube::YoutubeClient;

use crate::sources::{instagram, tiktok};

/// Results of one fan-out, kept per-platform so callers can report counts.
#[derive(Debug, Default)]
pub struct MultiPlatformResults {
    pub youtube: Vec<TrendItem>,
    pub tiktok: Vec<TrendItem>,
    pub instagram: Vec<TrendItem>,
}

impl MultiPlatformResults {
    #[must_use]
    pub fn total(&self) -> usize {
        self.youtube.len() + self.tiktok.len() + self.instagram.len()
    }

    /// Flatten into a single list, platform grouping preserved.
    #[must_use]
    pub fn into_items(self) -> Vec<TrendItem> {
        let mut items = self.youtube;
        items.extend(self.tiktok);
        items.extend(self.instagram);
        items
    }
}

/// Search one keyword on all three platforms concurrently.
///
/// A `None` YouTube client (missing credential) contributes an empty branch,
/// as does any YouTube failure; the sample sources never fail.
pub async fn search_all_platforms(
    youtube: Option<&YoutubeClient>,
    keyword: &str,
    per_platform: usize,
) -> MultiPlatformResults {
    let youtube_branch = async {
        match youtube {
            Some(client) => match client.search_videos(keyword, per_platform, "relevance").await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(keyword, error = %e, "YouTube search failed, continuing without it");
                    Vec::new()
                }
            },
            None => {
                tracing::debug!(keyword, "YouTube credential not configured, skipping branch");
                Vec::new()
            }
        }
    };
    let tiktok_branch = async { tiktok::search_videos(keyword, per_platform) };
    let instagram_branch = async { instagram::search_posts(keyword, per_platform) };

    let (youtube, tiktok, instagram) =
        tokio::join!(youtube_branch, tiktok_branch, instagram_branch);

    MultiPlatformResults {
        youtube,
        tiktok,
        instagram,
    }
}

/// Collect trending content from all three platforms concurrently.
pub async fn collect_trending(
    youtube: Option<&YoutubeClient>,
    region: &str,
    per_platform: usize,
) -> MultiPlatformResults {
    let youtube_branch = async {
        match youtube {
            Some(client) => match client.trending(region, None, per_platform).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(region, error = %e, "YouTube trending failed, continuing without it");
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    };
    let tiktok_branch = async { tiktok::trending_videos(per_platform) };
    let instagram_branch = async { instagram::trending_posts(per_platform) };

    let (youtube, tiktok, instagram) =
        tokio::join!(youtube_branch, tiktok_branch, instagram_branch);

    MultiPlatformResults {
        youtube,
        tiktok,
        instagram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_leaves_other_branches_intact() {
        let results = search_all_platforms(None, "뉴진스", 10).await;
        assert!(results.youtube.is_empty());
        assert_eq!(results.tiktok.len(), 2);
        assert_eq!(results.instagram.len(), 2);
        assert_eq!(results.total(), 4);
    }

    #[tokio::test]
    async fn youtube_outage_is_isolated_from_other_branches() {
        // Nothing listens on this port; the branch fails fast and is caught.
        let client =
            YoutubeClient::with_base_url("key", 1, "http://127.0.0.1:9/").expect("client");
        let results = search_all_platforms(Some(&client), "뉴진스", 10).await;
        assert!(results.youtube.is_empty(), "failed branch degrades to empty");
        assert_eq!(results.tiktok.len(), 2);
        assert_eq!(results.instagram.len(), 2);
    }

    #[tokio::test]
    async fn trending_without_credential_still_returns_samples() {
        let results = collect_trending(None, "KR", 5).await;
        assert!(results.youtube.is_empty());
        assert_eq!(results.tiktok.len(), 3);
        assert_eq!(results.instagram.len(), 3);
    }

    #[tokio::test]
    async fn into_items_preserves_platform_grouping() {
        let results = search_all_platforms(None, "테스트", 10).await;
        let items = results.into_items();
        assert_eq!(items.len(), 4);
        assert!(items[..2]
            .iter()
            .all(|i| i.platform == trendscope_core::Platform::Tiktok));
    }
}
