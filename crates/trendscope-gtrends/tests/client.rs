//! Integration tests for `GtrendsClient` using wiremock HTTP mocks.
//!
//! Exercises both the live parse path (anti-XSSI prefix stripping, widget
//! token flow) and the dummy fallback on upstream failure.

use trendscope_gtrends::GtrendsClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GtrendsClient {
    GtrendsClient::with_base_url(30, base_url).expect("client construction should not fail")
}

fn prefixed(json: &serde_json::Value) -> String {
    format!(")]}}',\n{json}")
}

#[tokio::test]
async fn realtime_trending_parses_live_feed() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "default": {
            "trendingSearchesDays": [
                {
                    "trendingSearches": [
                        { "title": { "query": "뉴진스" }, "formattedTraffic": "50K+" },
                        { "title": { "query": "장마" }, "formattedTraffic": "20K+" }
                    ]
                }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/dailytrends"))
        .and(query_param("geo", "KR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client.realtime_trending("KR").await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].keyword, "뉴진스");
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[0].source, "google_trends");
}

#[tokio::test]
async fn realtime_trending_falls_back_to_dummy_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/api/dailytrends"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client.realtime_trending("KR").await;

    assert!(!entries.is_empty(), "fallback must still produce a payload");
    assert!(entries.iter().all(|e| e.source == "google_trends_dummy"));
}

#[tokio::test]
async fn realtime_trending_falls_back_to_dummy_on_empty_feed() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "default": { "trendingSearchesDays": [] } });
    Mock::given(method("GET"))
        .and(path("/trends/api/dailytrends"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client.realtime_trending("KR").await;
    assert!(entries.iter().all(|e| e.source == "google_trends_dummy"));
}

#[tokio::test]
async fn by_category_tags_entries_with_category() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "default": {
            "trendingSearchesDays": [
                { "trendingSearches": [ { "title": { "query": "아이브" } } ] }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/dailytrends"))
        .and(query_param("cat", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client.by_category("entertainment", "KR").await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, "entertainment");
    assert_eq!(entries[0].keyword, "아이브");
}

#[tokio::test]
async fn interest_over_time_follows_widget_token_flow() {
    let server = MockServer::start().await;

    let explore_body = serde_json::json!({
        "widgets": [
            { "id": "TIMESERIES", "token": "TOK123",
              "request": { "time": "today 12-m" } },
            { "id": "RELATED_QUERIES", "token": "TOK999", "request": {} }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&explore_body)))
        .mount(&server)
        .await;

    let multiline_body = serde_json::json!({
        "default": {
            "timelineData": [
                { "time": "1753920000", "value": [55] },
                { "time": "1754006400", "value": [71] }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/multiline"))
        .and(query_param("token", "TOK123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&multiline_body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client.interest_over_time("게임", "KR", "today 12-m").await;

    assert_eq!(payload.source, "google_trends");
    assert_eq!(payload.data.len(), 2);
    assert_eq!(payload.max_interest, 71);
    assert_eq!(payload.average_interest, 63);
    assert_eq!(payload.data[0].date, "2025-07-31");
}

#[tokio::test]
async fn interest_over_time_dummy_is_well_formed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client.interest_over_time("게임", "KR", "today 12-m").await;

    assert_eq!(payload.source, "google_trends_dummy");
    assert_eq!(payload.keyword, "게임");
    assert_eq!(payload.data.len(), 30);
    assert!(payload.data.iter().all(|p| p.interest <= 100));
}

#[tokio::test]
async fn related_queries_parses_top_and_rising() {
    let server = MockServer::start().await;

    let explore_body = serde_json::json!({
        "widgets": [
            { "id": "RELATED_QUERIES", "token": "RELTOK", "request": {} }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&explore_body)))
        .mount(&server)
        .await;

    let related_body = serde_json::json!({
        "default": {
            "rankedList": [
                { "rankedKeyword": [ { "query": "뉴진스 하니", "value": 100 } ] },
                { "rankedKeyword": [ { "query": "뉴진스 컴백", "value": 350 } ] }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/relatedsearches"))
        .and(query_param("token", "RELTOK"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&related_body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client.related_queries("뉴진스", "KR").await;

    assert_eq!(payload.source, "google_trends");
    assert_eq!(payload.top_queries.len(), 1);
    assert_eq!(payload.top_queries[0].query, "뉴진스 하니");
    assert_eq!(payload.rising_queries[0].value, 350);
}

#[tokio::test]
async fn missing_widget_degrades_to_dummy() {
    let server = MockServer::start().await;

    // explore succeeds but carries no RELATED_QUERIES widget
    let explore_body = serde_json::json!({ "widgets": [] });
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&explore_body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client.related_queries("뉴진스", "KR").await;

    assert_eq!(payload.source, "google_trends_dummy");
    assert!(!payload.top_queries.is_empty());
}

#[tokio::test]
async fn interest_by_region_sorts_descending() {
    let server = MockServer::start().await;

    let explore_body = serde_json::json!({
        "widgets": [ { "id": "GEO_MAP", "token": "GEOTOK", "request": {} } ]
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&explore_body)))
        .mount(&server)
        .await;

    let geo_body = serde_json::json!({
        "default": {
            "geoMapData": [
                { "geoName": "Busan", "value": [40] },
                { "geoName": "Seoul", "value": [95] }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/comparedgeo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(prefixed(&geo_body)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client.interest_by_region("게임", "KR").await;

    assert_eq!(payload.source, "google_trends");
    assert_eq!(payload.regions[0].region, "Seoul");
    assert_eq!(payload.regions[0].interest, 95);
}
