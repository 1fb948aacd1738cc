//! Instagram sample-data source.

use trendscope_core::{Platform, TrendItem};

use super::{normalize_sample, SampleRecord};

/// Trending sample posts, most popular first. Never fails.
#[must_use]
pub fn trending_posts(max_results: usize) -> Vec<TrendItem> {
    let records = vec![
        SampleRecord {
            id: "instagram_trend_001".to_string(),
            title: "인기 Instagram 게시물 #1".to_string(),
            description: "오늘 피드에서 가장 많이 공유된 게시물".to_string(),
            author: "instagram_user_1".to_string(),
            view_count: 850_000,
            like_count: 45_000,
            comment_count: 1_800,
            hashtags: &["#trending", "#viral", "#instagram"],
        },
        SampleRecord {
            id: "instagram_trend_002".to_string(),
            title: "인기 Instagram 게시물 #2".to_string(),
            description: "패션 스타일링 화보".to_string(),
            author: "instagram_user_2".to_string(),
            view_count: 720_000,
            like_count: 38_000,
            comment_count: 1_500,
            hashtags: &["#fashion", "#style", "#trending"],
        },
        SampleRecord {
            id: "instagram_trend_003".to_string(),
            title: "인기 Instagram 게시물 #3".to_string(),
            description: "먹스타그램 신상 맛집 소개".to_string(),
            author: "instagram_user_3".to_string(),
            view_count: 650_000,
            like_count: 32_000,
            comment_count: 1_200,
            hashtags: &["#food", "#delicious", "#viral"],
        },
    ];

    records
        .into_iter()
        .take(max_results)
        .map(|record| {
            let url = format!("https://www.instagram.com/p/{}/", record.id);
            normalize_sample(record, Platform::Instagram, url)
        })
        .collect()
}

/// Sample search results for a keyword. Never fails.
#[must_use]
pub fn search_posts(keyword: &str, max_results: usize) -> Vec<TrendItem> {
    let records = vec![
        SampleRecord {
            id: format!("instagram_search_{keyword}_001"),
            title: format!("'{keyword}' 관련 Instagram 게시물 #1"),
            description: format!("'{keyword}' 키워드로 검색된 게시물입니다."),
            author: "instagram_search_user_1".to_string(),
            view_count: 450_000,
            like_count: 25_000,
            comment_count: 800,
            hashtags: &["#search", "#instagram"],
        },
        SampleRecord {
            id: format!("instagram_search_{keyword}_002"),
            title: format!("'{keyword}' 관련 Instagram 게시물 #2"),
            description: format!("'{keyword}' 키워드로 검색된 또 다른 게시물입니다."),
            author: "instagram_search_user_2".to_string(),
            view_count: 380_000,
            like_count: 22_000,
            comment_count: 650,
            hashtags: &["#trending", "#viral"],
        },
    ];

    records
        .into_iter()
        .take(max_results)
        .map(|mut record| {
            record.description = format!("{} #{keyword}", record.description);
            let url = format!("https://www.instagram.com/p/{}/", record.id);
            normalize_sample(record, Platform::Instagram, url)
        })
        .collect()
}
