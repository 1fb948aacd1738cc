//! HTTP client for the unofficial Google Trends JSON endpoints.
//!
//! Widget-based operations (interest, related, regions) follow the two-step
//! flow the endpoints require: `explore` hands out per-widget tokens, then
//! `widgetdata/*` serves the actual series. Any failure along the way, and
//! any empty result, degrades to the matching [`crate::dummy`] payload.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::{Client, Url};

use crate::dummy;
use crate::error::GtrendsError;
use crate::types::{
    CategoryEntry, ComparedGeoResponse, DailyTrendsResponse, ExploreResponse, InterestByRegion,
    InterestOverTime, InterestPoint, MultilineResponse, RealtimeEntry, RelatedQueries,
    RelatedQuery, RelatedSearchesResponse, Widget,
};

const DEFAULT_BASE_URL: &str = "https://trends.google.com/";

/// Live payload marker; dummies carry [`dummy::DUMMY_SOURCE`].
const LIVE_SOURCE: &str = "google_trends";

/// Korean locale and KST offset, matching the dashboard's audience.
const HL: &str = "ko";
const TZ: &str = "540";

const CATEGORY_IDS: &[(&str, u32)] = &[
    ("all", 0),
    ("entertainment", 3),
    ("business", 12),
    ("sports", 20),
    ("health", 45),
    ("science_tech", 8),
    ("top_stories", 16),
];

/// Client for the unofficial Google Trends endpoints.
///
/// Use [`GtrendsClient::new`] for production or
/// [`GtrendsClient::with_base_url`] to point at a mock server in tests.
pub struct GtrendsClient {
    client: Client,
    base_url: Url,
}

impl GtrendsClient {
    /// Creates a client pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be constructed.
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not a valid URL; base URLs are compiled-in or
    /// test-provided, never user input.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trendscope/0.1 (trend-aggregation)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).expect("valid base URL");

        Ok(Self { client, base_url })
    }

    /// Realtime trending searches for a region, ranked from 1.
    ///
    /// Falls back to the dummy list on failure or empty result.
    pub async fn realtime_trending(&self, region: &str) -> Vec<RealtimeEntry> {
        match self.fetch_daily_keywords(region, 0).await {
            Ok(keywords) if !keywords.is_empty() => {
                let now = Utc::now();
                keywords
                    .into_iter()
                    .enumerate()
                    .map(|(index, keyword)| RealtimeEntry {
                        keyword,
                        rank: index + 1,
                        region: region.to_string(),
                        timestamp: now,
                        source: LIVE_SOURCE.to_string(),
                    })
                    .collect()
            }
            Ok(_) => {
                tracing::warn!(region, "Google Trends realtime came back empty, using dummy");
                dummy::trending_searches(region)
            }
            Err(e) => {
                tracing::warn!(region, error = %e, "Google Trends realtime failed, using dummy");
                dummy::trending_searches(region)
            }
        }
    }

    /// Trending searches within a category.
    ///
    /// Unknown category names query the whole feed (category id 0), matching
    /// the permissive behavior the dashboard expects.
    pub async fn by_category(&self, category: &str, region: &str) -> Vec<CategoryEntry> {
        let cat_id = category_id(category);
        match self.fetch_daily_keywords(region, cat_id).await {
            Ok(keywords) if !keywords.is_empty() => {
                let now = Utc::now();
                keywords
                    .into_iter()
                    .enumerate()
                    .map(|(index, keyword)| CategoryEntry {
                        keyword,
                        rank: index + 1,
                        category: category.to_string(),
                        region: region.to_string(),
                        timestamp: now,
                        source: LIVE_SOURCE.to_string(),
                    })
                    .collect()
            }
            Ok(_) => {
                tracing::warn!(category, region, "empty category feed, using dummy");
                dummy::category_searches(category, region)
            }
            Err(e) => {
                tracing::warn!(category, region, error = %e, "category feed failed, using dummy");
                dummy::category_searches(category, region)
            }
        }
    }

    /// Interest-over-time series for one keyword.
    pub async fn interest_over_time(
        &self,
        keyword: &str,
        region: &str,
        timeframe: &str,
    ) -> InterestOverTime {
        match self.fetch_interest(keyword, region, timeframe).await {
            Ok(data) if !data.is_empty() => {
                let sum: u32 = data.iter().map(|p| p.interest).sum();
                #[allow(clippy::cast_possible_truncation)]
                let average_interest = sum / data.len() as u32;
                let max_interest = data.iter().map(|p| p.interest).max().unwrap_or(0);
                InterestOverTime {
                    keyword: keyword.to_string(),
                    region: region.to_string(),
                    timeframe: timeframe.to_string(),
                    data,
                    average_interest,
                    max_interest,
                    timestamp: Utc::now(),
                    source: LIVE_SOURCE.to_string(),
                }
            }
            Ok(_) => {
                tracing::warn!(keyword, "empty interest series, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::interest_over_time(keyword, region, timeframe, &mut rng)
            }
            Err(e) => {
                tracing::warn!(keyword, error = %e, "interest fetch failed, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::interest_over_time(keyword, region, timeframe, &mut rng)
            }
        }
    }

    /// Top and rising related queries for one keyword.
    pub async fn related_queries(&self, keyword: &str, region: &str) -> RelatedQueries {
        match self.fetch_related(keyword, region).await {
            Ok((top, rising)) if !top.is_empty() || !rising.is_empty() => RelatedQueries {
                keyword: keyword.to_string(),
                region: region.to_string(),
                top_queries: top,
                rising_queries: rising,
                timestamp: Utc::now(),
                source: LIVE_SOURCE.to_string(),
            },
            Ok(_) => {
                tracing::warn!(keyword, "no related queries, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::related_queries(keyword, region, &mut rng)
            }
            Err(e) => {
                tracing::warn!(keyword, error = %e, "related queries failed, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::related_queries(keyword, region, &mut rng)
            }
        }
    }

    /// Per-region interest breakdown, sorted by interest descending.
    pub async fn interest_by_region(&self, keyword: &str, region: &str) -> InterestByRegion {
        match self.fetch_geo(keyword, region).await {
            Ok(mut regions) if !regions.is_empty() => {
                regions.sort_by(|a, b| b.interest.cmp(&a.interest));
                InterestByRegion {
                    keyword: keyword.to_string(),
                    base_region: region.to_string(),
                    regions,
                    timestamp: Utc::now(),
                    source: LIVE_SOURCE.to_string(),
                }
            }
            Ok(_) => {
                tracing::warn!(keyword, "empty region breakdown, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::region_interest(keyword, region, &mut rng)
            }
            Err(e) => {
                tracing::warn!(keyword, error = %e, "region breakdown failed, using dummy");
                let mut rng = StdRng::from_os_rng();
                dummy::region_interest(keyword, region, &mut rng)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Live fetch paths
    // -----------------------------------------------------------------------

    async fn fetch_daily_keywords(
        &self,
        region: &str,
        category: u32,
    ) -> Result<Vec<String>, GtrendsError> {
        let cat = category.to_string();
        let body = self
            .fetch_json(
                "trends/api/dailytrends",
                &[("hl", HL), ("tz", TZ), ("geo", region), ("cat", &cat), ("ns", "15")],
            )
            .await?;
        let parsed: DailyTrendsResponse =
            serde_json::from_value(body).map_err(|e| GtrendsError::Deserialize {
                context: format!("dailytrends(geo={region})"),
                source: e,
            })?;

        Ok(parsed
            .default
            .trending_searches_days
            .into_iter()
            .flat_map(|day| day.trending_searches)
            .map(|search| search.title.query)
            .collect())
    }

    async fn fetch_interest(
        &self,
        keyword: &str,
        region: &str,
        timeframe: &str,
    ) -> Result<Vec<InterestPoint>, GtrendsError> {
        let widget = self
            .explore_widget(keyword, region, timeframe, "TIMESERIES")
            .await?;
        let body = self.fetch_widget_data("multiline", &widget).await?;
        let parsed: MultilineResponse =
            serde_json::from_value(body).map_err(|e| GtrendsError::Deserialize {
                context: format!("multiline({keyword})"),
                source: e,
            })?;

        Ok(parsed
            .default
            .timeline_data
            .into_iter()
            .filter_map(|point| {
                let secs = point.time.parse::<i64>().ok()?;
                let date = DateTime::from_timestamp(secs, 0)?.format("%Y-%m-%d").to_string();
                Some(InterestPoint {
                    date,
                    interest: point.value.first().copied()?,
                })
            })
            .collect())
    }

    async fn fetch_related(
        &self,
        keyword: &str,
        region: &str,
    ) -> Result<(Vec<RelatedQuery>, Vec<RelatedQuery>), GtrendsError> {
        let widget = self
            .explore_widget(keyword, region, "today 12-m", "RELATED_QUERIES")
            .await?;
        let body = self.fetch_widget_data("relatedsearches", &widget).await?;
        let parsed: RelatedSearchesResponse =
            serde_json::from_value(body).map_err(|e| GtrendsError::Deserialize {
                context: format!("relatedsearches({keyword})"),
                source: e,
            })?;

        let mut lists = parsed.default.ranked_list.into_iter();
        let to_queries = |list: Option<crate::types::RankedList>| -> Vec<RelatedQuery> {
            list.map(|l| {
                l.ranked_keyword
                    .into_iter()
                    .map(|rk| RelatedQuery {
                        query: rk.query,
                        value: rk.value,
                    })
                    .collect()
            })
            .unwrap_or_default()
        };
        let top = to_queries(lists.next());
        let rising = to_queries(lists.next());
        Ok((top, rising))
    }

    async fn fetch_geo(
        &self,
        keyword: &str,
        region: &str,
    ) -> Result<Vec<crate::types::RegionInterest>, GtrendsError> {
        let widget = self
            .explore_widget(keyword, region, "today 12-m", "GEO_MAP")
            .await?;
        let body = self.fetch_widget_data("comparedgeo", &widget).await?;
        let parsed: ComparedGeoResponse =
            serde_json::from_value(body).map_err(|e| GtrendsError::Deserialize {
                context: format!("comparedgeo({keyword})"),
                source: e,
            })?;

        Ok(parsed
            .default
            .geo_map_data
            .into_iter()
            .filter_map(|entry| {
                Some(crate::types::RegionInterest {
                    region: entry.geo_name,
                    interest: entry.value.first().copied()?,
                })
            })
            .collect())
    }

    /// Run `explore` and pull out the widget with the given id.
    async fn explore_widget(
        &self,
        keyword: &str,
        region: &str,
        timeframe: &str,
        widget_id: &'static str,
    ) -> Result<Widget, GtrendsError> {
        let req = serde_json::json!({
            "comparisonItem": [{ "keyword": keyword, "geo": region, "time": timeframe }],
            "category": 0,
            "property": "",
        })
        .to_string();

        let body = self
            .fetch_json("trends/api/explore", &[("hl", HL), ("tz", TZ), ("req", &req)])
            .await?;
        let parsed: ExploreResponse =
            serde_json::from_value(body).map_err(|e| GtrendsError::Deserialize {
                context: format!("explore({keyword})"),
                source: e,
            })?;

        parsed
            .widgets
            .into_iter()
            .find(|w| w.id == widget_id)
            .ok_or(GtrendsError::MissingWidget(widget_id))
    }

    /// Fetch one widget's data using its token and request blob.
    async fn fetch_widget_data(
        &self,
        endpoint: &str,
        widget: &Widget,
    ) -> Result<serde_json::Value, GtrendsError> {
        let token = widget
            .token
            .as_deref()
            .ok_or(GtrendsError::MissingWidget("token"))?;
        let req = widget
            .request
            .as_ref()
            .map(std::string::ToString::to_string)
            .unwrap_or_default();

        self.fetch_json(
            &format!("trends/api/widgetdata/{endpoint}"),
            &[("hl", HL), ("tz", TZ), ("req", &req), ("token", token)],
        )
        .await
    }

    /// GET a Trends endpoint, strip the anti-XSSI prefix, and parse as JSON.
    async fn fetch_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, GtrendsError> {
        let mut url = self
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GtrendsError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let stripped = strip_xssi_prefix(&body);
        serde_json::from_str(stripped).map_err(|e| GtrendsError::Deserialize {
            context: path.to_string(),
            source: e,
        })
    }
}

/// Strip Google's anti-XSSI prefix (`)]}'` optionally followed by a comma)
/// from a response body.
fn strip_xssi_prefix(body: &str) -> &str {
    body.trim_start()
        .trim_start_matches(")]}'")
        .trim_start_matches(',')
        .trim_start()
}

fn category_id(category: &str) -> u32 {
    CATEGORY_IDS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(0, |(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_with_comma() {
        assert_eq!(strip_xssi_prefix(")]}',\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn strips_prefix_without_comma() {
        assert_eq!(strip_xssi_prefix(")]}'\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn plain_json_passes_through() {
        assert_eq!(strip_xssi_prefix("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn known_categories_map_to_ids() {
        assert_eq!(category_id("entertainment"), 3);
        assert_eq!(category_id("business"), 12);
        assert_eq!(category_id("all"), 0);
    }

    #[test]
    fn unknown_category_maps_to_zero() {
        assert_eq!(category_id("cooking"), 0);
    }
}
