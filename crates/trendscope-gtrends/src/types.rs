//! Response payloads for the Google Trends operations.
//!
//! Field names bind the JSON contract consumed by the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One realtime trending search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeEntry {
    pub keyword: String,
    pub rank: usize,
    pub region: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

/// One trending search within a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub keyword: String,
    pub rank: usize,
    pub category: String,
    pub region: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestPoint {
    pub date: String,
    pub interest: u32,
}

/// Interest-over-time series for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestOverTime {
    pub keyword: String,
    pub region: String,
    pub timeframe: String,
    pub data: Vec<InterestPoint>,
    pub average_interest: u32,
    pub max_interest: u32,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedQuery {
    pub query: String,
    pub value: u32,
}

/// Top and rising related queries for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedQueries {
    pub keyword: String,
    pub region: String,
    pub top_queries: Vec<RelatedQuery>,
    pub rising_queries: Vec<RelatedQuery>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionInterest {
    pub region: String,
    pub interest: u32,
}

/// Per-region interest breakdown for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestByRegion {
    pub keyword: String,
    pub base_region: String,
    pub regions: Vec<RegionInterest>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

// ---------------------------------------------------------------------------
// Raw upstream shapes (internal)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DailyTrendsResponse {
    #[serde(default)]
    pub default: DailyTrendsDefault,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DailyTrendsDefault {
    #[serde(rename = "trendingSearchesDays", default)]
    pub trending_searches_days: Vec<TrendingSearchesDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingSearchesDay {
    #[serde(rename = "trendingSearches", default)]
    pub trending_searches: Vec<TrendingSearch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingSearch {
    pub title: TrendingSearchTitle,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingSearchTitle {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Widget {
    #[serde(default)]
    pub id: String,
    pub token: Option<String>,
    pub request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MultilineResponse {
    #[serde(default)]
    pub default: MultilineDefault,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MultilineDefault {
    #[serde(rename = "timelineData", default)]
    pub timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimelinePoint {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub value: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelatedSearchesResponse {
    #[serde(default)]
    pub default: RelatedSearchesDefault,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RelatedSearchesDefault {
    #[serde(rename = "rankedList", default)]
    pub ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedList {
    #[serde(rename = "rankedKeyword", default)]
    pub ranked_keyword: Vec<RankedKeyword>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedKeyword {
    pub query: String,
    #[serde(default)]
    pub value: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComparedGeoResponse {
    #[serde(default)]
    pub default: ComparedGeoDefault,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComparedGeoDefault {
    #[serde(rename = "geoMapData", default)]
    pub geo_map_data: Vec<GeoMapEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoMapEntry {
    #[serde(rename = "geoName", default)]
    pub geo_name: String,
    #[serde(default)]
    pub value: Vec<u32>,
}
