//! TikTok sample-data source.

use trendscope_core::{Platform, TrendItem};

use super::{normalize_sample, SampleRecord};

/// Trending sample videos, most popular first. Never fails.
#[must_use]
pub fn trending_videos(max_results: usize) -> Vec<TrendItem> {
    let records = vec![
        SampleRecord {
            id: "tiktok_trend_001".to_string(),
            title: "인기 TikTok 동영상 #1".to_string(),
            description: "지금 가장 많이 재생되는 챌린지 영상".to_string(),
            author: "tiktok_user_1".to_string(),
            view_count: 1_500_000,
            like_count: 85_000,
            comment_count: 3_200,
            hashtags: &["#trending", "#viral", "#funny"],
        },
        SampleRecord {
            id: "tiktok_trend_002".to_string(),
            title: "인기 TikTok 동영상 #2".to_string(),
            description: "화제의 댄스 커버 영상".to_string(),
            author: "tiktok_user_2".to_string(),
            view_count: 1_200_000,
            like_count: 72_000,
            comment_count: 2_800,
            hashtags: &["#dance", "#music", "#trending"],
        },
        SampleRecord {
            id: "tiktok_trend_003".to_string(),
            title: "인기 TikTok 동영상 #3".to_string(),
            description: "코미디 상황극 모음".to_string(),
            author: "tiktok_user_3".to_string(),
            view_count: 980_000,
            like_count: 65_000,
            comment_count: 2_400,
            hashtags: &["#comedy", "#funny", "#viral"],
        },
    ];

    records
        .into_iter()
        .take(max_results)
        .map(|record| {
            let url = format!(
                "https://www.tiktok.com/@{}/video/{}",
                record.author, record.id
            );
            normalize_sample(record, Platform::Tiktok, url)
        })
        .collect()
}

/// Sample search results for a keyword. Never fails.
#[must_use]
pub fn search_videos(keyword: &str, max_results: usize) -> Vec<TrendItem> {
    let records = vec![
        SampleRecord {
            id: format!("tiktok_search_{keyword}_001"),
            title: format!("'{keyword}' 관련 TikTok 동영상 #1"),
            description: format!("'{keyword}' 키워드로 검색된 영상입니다."),
            author: "tiktok_search_user_1".to_string(),
            view_count: 850_000,
            like_count: 45_000,
            comment_count: 1_800,
            hashtags: &["#search", "#viral"],
        },
        SampleRecord {
            id: format!("tiktok_search_{keyword}_002"),
            title: format!("'{keyword}' 관련 TikTok 동영상 #2"),
            description: format!("'{keyword}' 키워드로 검색된 또 다른 영상입니다."),
            author: "tiktok_search_user_2".to_string(),
            view_count: 720_000,
            like_count: 38_000,
            comment_count: 1_500,
            hashtags: &["#trending", "#funny"],
        },
    ];

    records
        .into_iter()
        .take(max_results)
        .map(|mut record| {
            record.description = format!("{} #{keyword}", record.description);
            let url = format!(
                "https://www.tiktok.com/@{}/video/{}",
                record.author, record.id
            );
            normalize_sample(record, Platform::Tiktok, url)
        })
        .collect()
}
