//! HTTP client for the `YouTube` Data API v3.
//!
//! All endpoints go through a shared request path that maps quota-exhaustion
//! responses to [`YoutubeError::QuotaExceeded`] and other API rejections to
//! [`YoutubeError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use trendscope_core::TrendItem;

use crate::error::YoutubeError;
use crate::normalize::normalize_videos;
use crate::types::{SearchListResponse, SearchResult, VideoListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Page size cap imposed by the API.
const PAGE_SIZE: usize = 50;

/// Upper bound for the deep `search` used by the dashboard view.
const DEEP_SEARCH_LIMIT: usize = 100;

/// Client for the `YouTube` Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trendscope/0.1 (trend-aggregation)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining resource paths appends rather than replaces.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YoutubeError::Api {
            status: 0,
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches videos for a keyword and returns normalized items in API
    /// relevance order.
    ///
    /// Two-step: `search.list` yields video ids, `videos.list` yields full
    /// snippets and statistics for those ids.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::QuotaExceeded`] when the daily quota is exhausted.
    /// - [`YoutubeError::Api`] on any other API rejection.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if a response body is not the expected
    ///   shape.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: usize,
        order: &str,
    ) -> Result<Vec<TrendItem>, YoutubeError> {
        let capped = max_results.clamp(1, PAGE_SIZE);
        let (ids, _) = self.search_page(query, order, capped, None).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.videos_by_ids(&ids).await?;
        Ok(normalize_videos(&raw))
    }

    /// Deep keyword search for the dashboard: up to 100 items, sorted by view
    /// count descending.
    ///
    /// Pages `search.list` twice (50 ids per page), then resolves statistics
    /// in 50-id batches.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_videos`].
    pub async fn search(&self, query: &str) -> Result<Vec<TrendItem>, YoutubeError> {
        let mut ids: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let (page_ids, next) = self
                .search_page(query, "relevance", PAGE_SIZE, page_token.as_deref())
                .await?;
            ids.extend(page_ids);
            page_token = next;
            if ids.len() >= DEEP_SEARCH_LIMIT || page_token.is_none() {
                break;
            }
        }
        ids.truncate(DEEP_SEARCH_LIMIT);

        let mut items = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(PAGE_SIZE) {
            let raw = self.videos_by_ids(chunk).await?;
            items.extend(normalize_videos(&raw));
        }
        items.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        Ok(items)
    }

    /// Fetches the `mostPopular` chart for a region, optionally filtered by
    /// category, and returns normalized items.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_videos`].
    pub async fn trending(
        &self,
        region_code: &str,
        category_id: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<TrendItem>, YoutubeError> {
        let capped = max_results.clamp(1, PAGE_SIZE).to_string();
        let mut params = vec![
            ("part", "snippet,statistics,contentDetails"),
            ("chart", "mostPopular"),
            ("regionCode", region_code),
            ("maxResults", capped.as_str()),
        ];
        if let Some(cat) = category_id {
            params.push(("videoCategoryId", cat));
        }

        let url = self.build_url("videos", &params);
        let body = self.request_json(&url).await?;
        let envelope: VideoListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("videos.list(chart=mostPopular, region={region_code})"),
                source: e,
            })?;
        Ok(normalize_videos(&envelope.items))
    }

    /// One `search.list` page: returns the video ids and the next page token.
    async fn search_page(
        &self,
        query: &str,
        order: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<(Vec<String>, Option<String>), YoutubeError> {
        let size = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("order", order),
            ("maxResults", size.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("search", &params);
        let body = self.request_json(&url).await?;
        let envelope: SearchListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search.list(q={query})"),
                source: e,
            })?;

        // Individual result entries may be malformed; drop those, keep the rest.
        let ids = envelope
            .items
            .into_iter()
            .filter_map(|v| serde_json::from_value::<SearchResult>(v).ok())
            .filter_map(|r| r.id.video_id)
            .collect();
        Ok((ids, envelope.next_page_token))
    }

    /// `videos.list` for up to 50 ids.
    async fn videos_by_ids(&self, ids: &[String]) -> Result<Vec<serde_json::Value>, YoutubeError> {
        let joined = ids.join(",");
        let url = self.build_url(
            "videos",
            &[("part", "snippet,statistics,contentDetails"), ("id", &joined)],
        );
        let body = self.request_json(&url).await?;
        let envelope: VideoListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("videos.list(id={joined})"),
                source: e,
            })?;
        Ok(envelope.items)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, always appending the API key.
    fn build_url(&self, resource: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(resource)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request and parses the response body as JSON, mapping
    /// non-2xx statuses through [`classify_api_error`].
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_api_error(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

/// Classify a non-2xx API response body.
///
/// Quota exhaustion arrives as HTTP 403 with a reason of `quotaExceeded`,
/// `dailyLimitExceeded`, or `rateLimitExceeded` in the error envelope.
fn classify_api_error(status: u16, body: &str) -> YoutubeError {
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    let message = parsed["error"]["message"]
        .as_str()
        .unwrap_or("unknown error")
        .to_string();
    let reason = parsed["error"]["errors"][0]["reason"].as_str().unwrap_or("");

    if matches!(
        reason,
        "quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded"
    ) {
        YoutubeError::QuotaExceeded(message)
    } else {
        YoutubeError::Api { status, message }
    }
}
