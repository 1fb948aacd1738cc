//! Keyword search endpoints: combined multi-platform and single-platform.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Serialize;
use trendscope_analysis::pipeline;
use trendscope_analysis::sources::{instagram, tiktok};
use trendscope_core::{Platform, TrendItem};
use trendscope_youtube::YoutubeError;

use crate::middleware::RequestId;

use super::{validate_keyword, ApiError, AppState, LimitQuery};

/// Response envelope shared by all search endpoints. Field names are part of
/// the dashboard contract.
#[derive(Debug, Serialize)]
pub(super) struct SearchEnvelope {
    pub keyword: String,
    pub total_results: usize,
    pub platforms: PlatformCounts,
    pub trends: Vec<TrendItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct PlatformCounts {
    pub youtube: usize,
    pub tiktok: usize,
    pub instagram: usize,
}

/// `GET /api/search/{keyword}`: fan out to all platforms, join, degrade
/// per-branch. A failed provider contributes a zero count, never a request
/// failure.
pub(super) async fn multi_platform_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(keyword): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<SearchEnvelope>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &keyword)?;
    let per_platform = query.resolve(20);

    let results =
        pipeline::search_all_platforms(state.youtube.as_deref(), &keyword, per_platform).await;

    let platforms = PlatformCounts {
        youtube: results.youtube.len(),
        tiktok: results.tiktok.len(),
        instagram: results.instagram.len(),
    };
    Ok(Json(SearchEnvelope {
        keyword,
        total_results: results.total(),
        platforms,
        trends: results.into_items(),
    }))
}

/// `GET /api/{platform}/{keyword}`: one platform only.
///
/// Unknown platforms are rejected up front; a missing YouTube credential is
/// a configuration error rather than a crash, and does not affect the other
/// platform endpoints.
pub(super) async fn single_platform_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((platform, keyword)): Path<(String, String)>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<SearchEnvelope>, ApiError> {
    let platform: Platform = platform.parse().map_err(|_| {
        ApiError::new(
            req_id.0.as_str(),
            "validation_error",
            format!("unknown platform: {platform}"),
        )
    })?;
    let keyword = validate_keyword(&req_id.0, &keyword)?;
    let max_results = query.resolve(20);

    let items = match platform {
        Platform::Youtube => {
            let Some(client) = state.youtube.as_deref() else {
                return Err(ApiError::new(
                    req_id.0.as_str(),
                    "configuration_error",
                    "YouTube API key is not configured",
                ));
            };
            client
                .search_videos(&keyword, max_results, "relevance")
                .await
                .map_err(|e| map_youtube_error(&req_id.0, &e))?
        }
        Platform::Tiktok => tiktok::search_videos(&keyword, max_results),
        Platform::Instagram => instagram::search_posts(&keyword, max_results),
    };

    let platforms = PlatformCounts {
        youtube: matches!(platform, Platform::Youtube)
            .then_some(items.len())
            .unwrap_or(0),
        tiktok: matches!(platform, Platform::Tiktok)
            .then_some(items.len())
            .unwrap_or(0),
        instagram: matches!(platform, Platform::Instagram)
            .then_some(items.len())
            .unwrap_or(0),
    };
    Ok(Json(SearchEnvelope {
        keyword,
        total_results: items.len(),
        platforms,
        trends: items,
    }))
}

/// Map a YouTube client failure onto the API error taxonomy.
///
/// Quota exhaustion gets its own 429-mapped code; everything else is a
/// provider outage from the caller's perspective.
fn map_youtube_error(request_id: &str, error: &YoutubeError) -> ApiError {
    tracing::warn!(error = %error, "YouTube provider call failed");
    match error {
        YoutubeError::QuotaExceeded(_) => ApiError::new(
            request_id,
            "quota_exceeded",
            "YouTube API quota exceeded; retry later",
        ),
        _ => ApiError::new(
            request_id,
            "provider_unavailable",
            "YouTube provider is currently unavailable",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_dashboard_field_names() {
        let envelope = SearchEnvelope {
            keyword: "뉴진스".to_string(),
            total_results: 1,
            platforms: PlatformCounts {
                youtube: 1,
                tiktok: 0,
                instagram: 0,
            },
            trends: vec![],
        };
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["keyword"], "뉴진스");
        assert_eq!(json["total_results"], 1);
        assert_eq!(json["platforms"]["youtube"], 1);
        assert!(json["trends"].is_array());
    }

    #[test]
    fn quota_error_maps_to_quota_code() {
        let err = map_youtube_error("r", &YoutubeError::QuotaExceeded("over".into()));
        assert_eq!(err.error.code, "quota_exceeded");
    }

    #[test]
    fn other_errors_map_to_provider_unavailable() {
        let err = map_youtube_error(
            "r",
            &YoutubeError::Api {
                status: 500,
                message: "boom".into(),
            },
        );
        assert_eq!(err.error.code, "provider_unavailable");
    }
}
