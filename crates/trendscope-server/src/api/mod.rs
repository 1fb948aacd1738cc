mod age;
mod gtrends;
mod search;
mod trends;

use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use trendscope_gtrends::GtrendsClient;
use trendscope_youtube::YoutubeClient;

use crate::cache::SwapCache;
use crate::middleware::request_id;
use trends::CachedKeywords;

/// Longest keyword accepted before any provider call is made.
const MAX_KEYWORD_CHARS: usize = 100;

/// Timeframes the interest endpoint accepts, mirroring the upstream syntax.
const ALLOWED_TIMEFRAMES: &[&str] = &[
    "now 1-H", "now 4-H", "now 1-d", "now 7-d",
    "today 1-m", "today 3-m", "today 12-m", "today 5-y",
];

#[derive(Clone)]
pub struct AppState {
    pub youtube: Option<Arc<YoutubeClient>>,
    pub gtrends: Arc<GtrendsClient>,
    pub trends_cache: SwapCache<CachedKeywords>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "quota_exceeded" => StatusCode::TOO_MANY_REQUESTS,
            "provider_unavailable" => StatusCode::BAD_GATEWAY,
            "configuration_error" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LimitQuery {
    max_results: Option<usize>,
}

impl LimitQuery {
    fn resolve(&self, default: usize) -> usize {
        self.max_results.unwrap_or(default).clamp(1, 50)
    }
}

/// Reject empty or absurdly long keywords before any network call.
pub(super) fn validate_keyword(request_id: &str, raw: &str) -> Result<String, ApiError> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(ApiError::new(
            request_id,
            "validation_error",
            "keyword must not be empty",
        ));
    }
    if keyword.chars().count() > MAX_KEYWORD_CHARS {
        return Err(ApiError::new(
            request_id,
            "validation_error",
            format!("keyword exceeds {MAX_KEYWORD_CHARS} characters"),
        ));
    }
    Ok(keyword.to_string())
}

/// Regions are two-letter country codes; anything else is rejected.
pub(super) fn validate_region(request_id: &str, raw: &str) -> Result<String, ApiError> {
    let region = raw.trim();
    if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(region.to_ascii_uppercase())
    } else {
        Err(ApiError::new(
            request_id,
            "validation_error",
            format!("invalid region code: {raw}"),
        ))
    }
}

pub(super) fn validate_timeframe(request_id: &str, raw: &str) -> Result<String, ApiError> {
    if ALLOWED_TIMEFRAMES.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(ApiError::new(
            request_id,
            "validation_error",
            format!(
                "invalid timeframe '{raw}'; expected one of: {}",
                ALLOWED_TIMEFRAMES.join(", ")
            ),
        ))
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers(tower_http::cors::Any)
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search/{keyword}", get(search::multi_platform_search))
        .route("/api/trends/keywords", get(trends::trending_keywords))
        .route("/api/trends/realtime", get(trends::realtime_trends))
        .route(
            "/api/age-analysis/keywords",
            get(age::keywords_by_age_group),
        )
        .route(
            "/api/age-analysis/trends/{age_group}",
            get(age::age_group_trends),
        )
        .route(
            "/api/age-analysis/keyword/{keyword}",
            get(age::keyword_analysis),
        )
        .route("/api/google-trends/realtime", get(gtrends::realtime))
        .route("/api/google-trends/category", get(gtrends::category))
        .route("/api/google-trends/interest", get(gtrends::interest))
        .route("/api/google-trends/related", get(gtrends::related))
        .route("/api/google-trends/regions", get(gtrends::regions))
        .route("/api/google-trends/age-groups", get(gtrends::age_groups))
        .route(
            "/api/{platform}/{keyword}",
            get(search::single_platform_search),
        )
        .layer(axum::middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    youtube: &'static str,
}

async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        youtube: if state.youtube.is_some() {
            "configured"
        } else {
            "not_configured"
        },
    })
}
