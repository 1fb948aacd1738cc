//! Trending-keyword endpoints.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trendscope_analysis::{pipeline, rank_keywords, TrendingKeywordEntry};
use trendscope_core::TrendItem;

use crate::middleware::RequestId;

use super::{validate_region, ApiError, AppState, LimitQuery};

/// How many items each platform contributes to the ranking pool.
const RANKING_POOL_PER_PLATFORM: usize = 50;

/// Fully ranked keyword list kept in the swap cache; requests slice it.
#[derive(Debug)]
pub struct CachedKeywords {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<TrendingKeywordEntry>,
}

#[derive(Debug, Serialize)]
pub(super) struct TrendingKeywordsResponse {
    pub timestamp: DateTime<Utc>,
    pub trending_keywords: Vec<TrendingKeywordEntry>,
    pub total_keywords: usize,
}

/// `GET /api/trends/keywords`: ranked trending keywords across platforms.
///
/// The full ranking is cached for the configured TTL; each request slices
/// its own `max_results` from the cached list.
pub(super) async fn trending_keywords(
    State(state): State<AppState>,
    Extension(_req_id): Extension<RequestId>,
    Query(query): Query<LimitQuery>,
) -> Json<TrendingKeywordsResponse> {
    let max_results = query.resolve(20);

    let cached = match state.trends_cache.get() {
        Some(cached) => cached,
        None => {
            let results = pipeline::collect_trending(
                state.youtube.as_deref(),
                "KR",
                RANKING_POOL_PER_PLATFORM,
            )
            .await;
            let items = results.into_items();
            let fresh = std::sync::Arc::new(CachedKeywords {
                generated_at: Utc::now(),
                entries: rank_keywords(&items, RANKING_POOL_PER_PLATFORM),
            });
            state.trends_cache.store_shared(std::sync::Arc::clone(&fresh));
            fresh
        }
    };

    Json(TrendingKeywordsResponse {
        timestamp: cached.generated_at,
        trending_keywords: cached.entries.iter().take(max_results).cloned().collect(),
        total_keywords: cached.entries.len(),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct RealtimeQuery {
    region: Option<String>,
    max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct RealtimeTrendsResponse {
    pub timestamp: DateTime<Utc>,
    pub region: String,
    pub trending_keywords: Vec<TrendingKeywordEntry>,
    pub youtube_trends: Vec<TrendItem>,
    pub tiktok_trends: Vec<TrendItem>,
    pub instagram_trends: Vec<TrendItem>,
    pub total_trends: usize,
}

/// How many items per platform the realtime payload shows inline.
const REALTIME_PREVIEW: usize = 10;

/// `GET /api/trends/realtime`: combined realtime payload: extracted
/// keywords plus a preview of each platform's trending content.
pub(super) async fn realtime_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RealtimeQuery>,
) -> Result<Json<RealtimeTrendsResponse>, ApiError> {
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    let per_platform = query.max_results.unwrap_or(50).clamp(1, 50);

    let results =
        pipeline::collect_trending(state.youtube.as_deref(), &region, per_platform).await;
    let total_trends = results.total();

    let mut youtube_trends = results.youtube;
    let mut tiktok_trends = results.tiktok;
    let mut instagram_trends = results.instagram;

    let mut pool: Vec<TrendItem> = Vec::with_capacity(total_trends);
    pool.extend(youtube_trends.iter().cloned());
    pool.extend(tiktok_trends.iter().cloned());
    pool.extend(instagram_trends.iter().cloned());
    let trending_keywords = rank_keywords(&pool, 20);

    youtube_trends.truncate(REALTIME_PREVIEW);
    tiktok_trends.truncate(REALTIME_PREVIEW);
    instagram_trends.truncate(REALTIME_PREVIEW);

    Ok(Json(RealtimeTrendsResponse {
        timestamp: Utc::now(),
        region,
        trending_keywords,
        youtube_trends,
        tiktok_trends,
        instagram_trends,
        total_trends,
    }))
}
