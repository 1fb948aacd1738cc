//! Google Trends passthrough endpoints.
//!
//! Thin validation on top of the gtrends client; the client itself guarantees
//! a well-formed (possibly dummy) payload, so these handlers only ever fail
//! on invalid input.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use trendscope_analysis::estimate_age_profile;
use trendscope_gtrends::{
    CategoryEntry, InterestByRegion, InterestOverTime, RealtimeEntry, RelatedQueries,
};

use crate::middleware::RequestId;

use super::{validate_keyword, validate_region, validate_timeframe, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct RegionQuery {
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryQuery {
    category: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct InterestQuery {
    keyword: String,
    region: Option<String>,
    timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct KeywordRegionQuery {
    keyword: String,
    region: Option<String>,
}

/// `GET /api/google-trends/realtime`
pub(super) async fn realtime(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<Vec<RealtimeEntry>>, ApiError> {
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    Ok(Json(state.gtrends.realtime_trending(&region).await))
}

/// `GET /api/google-trends/category`
pub(super) async fn category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<CategoryEntry>>, ApiError> {
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    let category = query.category.as_deref().unwrap_or("all");
    Ok(Json(state.gtrends.by_category(category, &region).await))
}

/// `GET /api/google-trends/interest`
pub(super) async fn interest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<InterestQuery>,
) -> Result<Json<InterestOverTime>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &query.keyword)?;
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    let timeframe =
        validate_timeframe(&req_id.0, query.timeframe.as_deref().unwrap_or("today 12-m"))?;
    Ok(Json(
        state
            .gtrends
            .interest_over_time(&keyword, &region, &timeframe)
            .await,
    ))
}

/// `GET /api/google-trends/related`
pub(super) async fn related(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordRegionQuery>,
) -> Result<Json<RelatedQueries>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &query.keyword)?;
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    Ok(Json(state.gtrends.related_queries(&keyword, &region).await))
}

/// `GET /api/google-trends/regions`
pub(super) async fn regions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordRegionQuery>,
) -> Result<Json<InterestByRegion>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &query.keyword)?;
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;
    Ok(Json(
        state.gtrends.interest_by_region(&keyword, &region).await,
    ))
}

#[derive(Debug, Serialize)]
pub(super) struct AgeGroupInterest {
    pub age_group: String,
    pub interest: u8,
    pub trending_level: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AgeGroupEstimate {
    pub keyword: String,
    pub region: String,
    pub age_groups: Vec<AgeGroupInterest>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

/// `GET /api/google-trends/age-groups`: estimated interest per bracket.
///
/// Google Trends has no demographic breakdown; this is the keyword-pattern
/// heuristic, marked `google_trends_estimated`.
pub(super) async fn age_groups(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordRegionQuery>,
) -> Result<Json<AgeGroupEstimate>, ApiError> {
    let keyword = validate_keyword(&req_id.0, &query.keyword)?;
    let region = validate_region(&req_id.0, query.region.as_deref().unwrap_or("KR"))?;

    let mut rng = StdRng::from_os_rng();
    let age_groups = estimate_age_profile(&keyword, &mut rng)
        .into_iter()
        .map(|profile| AgeGroupInterest {
            age_group: profile.age_group,
            interest: profile.score,
            trending_level: profile.trending_level,
        })
        .collect();

    Ok(Json(AgeGroupEstimate {
        keyword,
        region,
        age_groups,
        timestamp: Utc::now(),
        source: "google_trends_estimated".to_string(),
    }))
}
