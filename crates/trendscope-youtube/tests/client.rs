//! Integration tests for `YoutubeClient` using wiremock HTTP mocks.

use trendscope_youtube::{YoutubeClient, YoutubeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn video_json(id: &str, title: &str, views: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "snippet": {
            "title": title,
            "description": format!("{title} 영상 설명"),
            "channelTitle": "채널",
            "publishedAt": "2026-07-15T12:00:00Z",
            "thumbnails": { "high": { "url": format!("https://i.ytimg.com/vi/{id}/hq.jpg") } }
        },
        "statistics": { "viewCount": views, "likeCount": "100", "commentCount": "10" },
        "contentDetails": { "duration": "PT2M10S" }
    })
}

#[tokio::test]
async fn search_videos_resolves_ids_then_details() {
    let server = MockServer::start().await;

    let search_body = serde_json::json!({
        "items": [
            { "id": { "videoId": "vid-a" } },
            { "id": { "videoId": "vid-b" } },
            { "id": { "kind": "youtube#channel" } }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "뉴진스"))
        .and(query_param("type", "video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_body))
        .mount(&server)
        .await;

    let videos_body = serde_json::json!({
        "items": [
            video_json("vid-a", "뉴진스 무대", "50000"),
            video_json("vid-b", "뉴진스 직캠", "30000")
        ]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "vid-a,vid-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&videos_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search_videos("뉴진스", 25, "relevance")
        .await
        .expect("search should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "vid-a");
    assert_eq!(items[0].view_count, 50_000);
    assert_eq!(items[0].duration_secs, 130);
    assert_eq!(items[1].url, "https://www.youtube.com/watch?v=vid-b");
}

#[tokio::test]
async fn search_videos_with_no_hits_returns_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search_videos("없는검색어", 10, "relevance")
        .await
        .expect("empty search should succeed");
    assert!(items.is_empty());
}

#[tokio::test]
async fn deep_search_pages_and_sorts_by_views() {
    let server = MockServer::start().await;

    let page1 = serde_json::json!({
        "items": [ { "id": { "videoId": "low" } } ],
        "nextPageToken": "PAGE2"
    });
    let page2 = serde_json::json!({
        "items": [ { "id": { "videoId": "high" } } ]
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page2))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page1))
        .mount(&server)
        .await;

    let videos_body = serde_json::json!({
        "items": [
            video_json("low", "조회수 낮음", "100"),
            video_json("high", "조회수 높음", "900000")
        ]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&videos_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.search("인기").await.expect("deep search");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "high", "sorted by view count descending");
    assert_eq!(items[1].id, "low");
}

#[tokio::test]
async fn trending_returns_normalized_chart() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [ video_json("t1", "오늘의 인기 동영상", "777777") ]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("chart", "mostPopular"))
        .and(query_param("regionCode", "KR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.trending("KR", None, 25).await.expect("trending");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].view_count, 777_777);
}

#[tokio::test]
async fn quota_exhaustion_surfaces_as_distinct_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota.",
            "errors": [ { "reason": "quotaExceeded", "domain": "youtube.quota" } ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search_videos("아무거나", 10, "relevance")
        .await
        .expect_err("quota response must fail");
    assert!(matches!(err, YoutubeError::QuotaExceeded(_)), "got {err}");
}

#[tokio::test]
async fn server_error_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.trending("KR", None, 10).await.expect_err("must fail");
    assert!(matches!(err, YoutubeError::Api { status: 500, .. }), "got {err}");
}

#[tokio::test]
async fn malformed_video_entries_are_dropped_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ { "id": { "videoId": "good" } } ]
        })))
        .mount(&server)
        .await;

    let videos_body = serde_json::json!({
        "items": [
            video_json("good", "정상 영상", "42"),
            { "snippet": { "title": "id가 없는 항목" } },
            17
        ]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&videos_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search_videos("정상", 10, "relevance")
        .await
        .expect("partial batch should succeed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "good");
}
