//! Age-bracket analysis endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use trendscope_analysis::{insights, pipeline};

use crate::middleware::RequestId;

use super::{validate_keyword, ApiError, AppState, LimitQuery};

/// `GET /api/age-analysis/keywords`: each bracket's top keywords from the
/// current trending pool.
pub(super) async fn keywords_by_age_group(
    State(state): State<AppState>,
    Extension(_req_id): Extension<RequestId>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<insights::AgeGroupKeywords>> {
    let max_results = query.resolve(20);

    let results =
        pipeline::collect_trending(state.youtube.as_deref(), "KR", max_results).await;
    let items = results.into_items();
    Json(insights::keywords_by_age_group(&items, max_results))
}

/// `GET /api/age-analysis/trends/{age_group}`: top keywords and platform
/// preference percentages for one bracket.
pub(super) async fn age_group_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(age_group): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<insights::AgeGroupTrends>, ApiError> {
    let max_results = query.resolve(15);

    // Collect a wider pool than requested; the bracket filter thins it out.
    let per_platform = (max_results * 2).clamp(1, 50);
    let results =
        pipeline::collect_trending(state.youtube.as_deref(), "KR", per_platform).await;
    let items = results.into_items();

    insights::age_group_trends(&age_group, &items, max_results)
        .map(Json)
        .map_err(|e| ApiError::new(req_id.0.as_str(), "validation_error", e.to_string()))
}

/// `GET /api/age-analysis/keyword/{keyword}`: full per-bracket breakdown of
/// one keyword's footprint.
pub(super) async fn keyword_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(keyword): Path<String>,
) -> Result<Json<insights::KeywordAnalysis>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &keyword)?;

    let results = pipeline::search_all_platforms(state.youtube.as_deref(), &keyword, 20).await;
    let items = results.into_items();
    Ok(Json(insights::analyze_keyword(&keyword, &items)))
}
