//! Synthetic fallback payloads for Google Trends operations.
//!
//! Substituted whenever the live endpoints fail or come back empty, so the
//! dashboard always has something to render. Every payload carries
//! `source: "google_trends_dummy"` so consumers can tell it apart from live
//! data. Randomized values come from an injected RNG so tests can seed it.

use chrono::{Days, Utc};
use rand::Rng;

use crate::types::{
    CategoryEntry, InterestByRegion, InterestOverTime, InterestPoint, RealtimeEntry,
    RegionInterest, RelatedQueries, RelatedQuery,
};

pub const DUMMY_SOURCE: &str = "google_trends_dummy";

const DUMMY_TRENDING: &[&str] = &[
    "뉴진스", "르세라핌", "아이브", "게임", "애니메이션",
    "취업", "이력서", "면접", "스타트업", "투자",
    "결혼", "육아", "집", "아파트", "건강",
    "운동", "다이어트", "요리", "여행", "맛집",
];

const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("entertainment", &["뉴진스", "르세라핌", "아이브", "게임", "애니메이션"]),
    ("business", &["취업", "이력서", "면접", "스타트업", "투자"]),
    ("sports", &["축구", "야구", "농구", "테니스", "골프"]),
    ("health", &["건강", "운동", "다이어트", "병원", "약"]),
    ("science_tech", &["AI", "로봇", "우주", "기술", "발명"]),
];

const RELATED_TABLE: &[(&str, &[&str])] = &[
    ("뉴진스", &["뉴진스 하니", "뉴진스 민지", "뉴진스 다니엘", "뉴진스 혜인", "뉴진스 해린"]),
    ("게임", &["게임 추천", "게임 순위", "게임 리뷰", "게임 공략", "게임 다운로드"]),
    ("취업", &["이력서", "면접", "스타트업", "연봉", "복지"]),
    ("건강", &["운동", "다이어트", "병원", "약", "검진"]),
];

#[must_use]
pub fn trending_searches(region: &str) -> Vec<RealtimeEntry> {
    let now = Utc::now();
    DUMMY_TRENDING
        .iter()
        .enumerate()
        .map(|(index, keyword)| RealtimeEntry {
            keyword: (*keyword).to_string(),
            rank: index + 1,
            region: region.to_string(),
            timestamp: now,
            source: DUMMY_SOURCE.to_string(),
        })
        .collect()
}

#[must_use]
pub fn category_searches(category: &str, region: &str) -> Vec<CategoryEntry> {
    let keywords = CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(&["인기", "검색어", "트렌드", "뉴스", "정보"][..], |(_, kws)| kws);

    let now = Utc::now();
    keywords
        .iter()
        .enumerate()
        .map(|(index, keyword)| CategoryEntry {
            keyword: (*keyword).to_string(),
            rank: index + 1,
            category: category.to_string(),
            region: region.to_string(),
            timestamp: now,
            source: DUMMY_SOURCE.to_string(),
        })
        .collect()
}

/// Thirty days of synthetic interest values in `[20, 100]`.
#[must_use]
pub fn interest_over_time<R: Rng>(
    keyword: &str,
    region: &str,
    timeframe: &str,
    rng: &mut R,
) -> InterestOverTime {
    let today = Utc::now().date_naive();
    let data: Vec<InterestPoint> = (0..30)
        .map(|i| {
            let date = today
                .checked_sub_days(Days::new(29 - i))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string();
            InterestPoint {
                date,
                interest: rng.random_range(20..=100),
            }
        })
        .collect();

    let sum: u32 = data.iter().map(|p| p.interest).sum();
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
        source: DUMMY_SOURCE.to_string(),
    }
}

#[must_use]
pub fn related_queries<R: Rng>(keyword: &str, region: &str, rng: &mut R) -> RelatedQueries {
    let top: Vec<String> = RELATED_TABLE
        .iter()
        .find(|(name, _)| *name == keyword)
        .map_or_else(
            || {
                vec![
                    format!("{keyword} 관련"),
                    format!("{keyword} 정보"),
                    format!("{keyword} 뉴스"),
                ]
            },
            |(_, queries)| queries.iter().map(|q| (*q).to_string()).collect(),
        );

    let top_queries = top
        .into_iter()
        .map(|query| RelatedQuery {
            query,
            value: rng.random_range(50..=100),
        })
        .collect();

    let rising_queries = [
        format!("{keyword} 최신"),
        format!("{keyword} 트렌드"),
        format!("{keyword} 인기"),
    ]
    .into_iter()
    .map(|query| RelatedQuery {
        query,
        value: rng.random_range(100..=200),
    })
    .collect();

    RelatedQueries {
        keyword: keyword.to_string(),
        region: region.to_string(),
        top_queries,
        rising_queries,
        timestamp: Utc::now(),
        source: DUMMY_SOURCE.to_string(),
    }
}

#[must_use]
pub fn region_interest<R: Rng>(keyword: &str, base_region: &str, rng: &mut R) -> InterestByRegion {
    let regions = vec![
        RegionInterest {
            region: "대한민국".to_string(),
            interest: rng.random_range(80..=100),
        },
        RegionInterest {
            region: "미국".to_string(),
            interest: rng.random_range(30..=70),
        },
        RegionInterest {
            region: "일본".to_string(),
            interest: rng.random_range(40..=80),
        },
        RegionInterest {
            region: "중국".to_string(),
            interest: rng.random_range(20..=60),
        },
        RegionInterest {
            region: "영국".to_string(),
            interest: rng.random_range(25..=65),
        },
    ];

    InterestByRegion {
        keyword: keyword.to_string(),
        base_region: base_region.to_string(),
        regions,
        timestamp: Utc::now(),
        source: DUMMY_SOURCE.to_string(),
    }
}
