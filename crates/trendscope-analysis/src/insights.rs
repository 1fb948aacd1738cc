//! Per-age-bracket keyword insights.
//!
//! Works on already-normalized [`TrendItem`]s: each bracket carries a curated
//! keyword list, a platform preference order, and a weight. Engagement is a
//! capped blend of views, likes, and comments; bracket and platform weights
//! tilt it toward where each cohort actually spends time.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::Serialize;
use trendscope_core::{Platform, TrendItem};

/// Hard cap on a single item's engagement contribution.
const ENGAGEMENT_CAP: f64 = 1000.0;

/// Content newer than this counts as "recent" for trend direction.
const RECENT_WINDOW_DAYS: i64 = 7;

const POSITIVE_WORDS: &[&str] = &["좋다", "최고", "대박", "완벽", "사랑", "추천", "인기", "성공"];
const NEGATIVE_WORDS: &[&str] = &["나쁘다", "최악", "실패", "별로", "싫다", "문제", "실망"];

struct AgeBracket {
    name: &'static str,
    weight: f64,
    platforms: &'static [Platform],
    keywords: &'static [&'static str],
}

const BRACKETS: [AgeBracket; 5] = [
    AgeBracket {
        name: "10대",
        weight: 1.0,
        platforms: &[Platform::Tiktok, Platform::Youtube, Platform::Instagram],
        keywords: &[
            "게임", "애니메이션", "만화", "아이돌", "k-pop", "댄스", "틱톡",
            "유튜브", "스트리밍", "코스프레", "팬아트", "팬픽", "캐릭터",
            "스킨케어", "메이크업", "패션", "스니커즈", "백팩", "학원",
            "수능", "입시", "대학", "고등학교", "중학교", "친구", "연애",
        ],
    },
    AgeBracket {
        name: "20대",
        weight: 1.2,
        platforms: &[Platform::Instagram, Platform::Youtube, Platform::Tiktok],
        keywords: &[
            "취업", "이력서", "면접", "스타트업", "창업", "투자", "주식",
            "부동산", "집", "월세", "전세", "대출", "카드", "적금",
            "연봉", "급여", "세금", "연말정산", "복지", "휴가",
            "여행", "맛집", "카페", "술집", "클럽", "데이트", "연애",
            "결혼", "웨딩", "신혼", "육아",
        ],
    },
    AgeBracket {
        name: "30대",
        weight: 1.1,
        platforms: &[Platform::Youtube, Platform::Instagram, Platform::Tiktok],
        keywords: &[
            "결혼", "육아", "아이", "유치원", "초등학교", "학원", "과외",
            "집", "아파트", "분양", "인테리어", "가전제품", "가구",
            "차", "자동차", "보험", "투자", "펀드", "연금", "은퇴",
            "건강", "운동", "다이어트", "요리", "베이킹", "가드닝",
            "취미", "독서", "영화", "드라마", "넷플릭스", "ott",
        ],
    },
    AgeBracket {
        name: "40대",
        weight: 0.9,
        platforms: &[Platform::Youtube, Platform::Instagram],
        keywords: &[
            "건강", "운동", "다이어트", "요리", "베이킹", "가드닝",
            "취미", "독서", "영화", "드라마", "넷플릭스", "ott",
            "집", "아파트", "분양", "인테리어", "가전제품", "가구",
            "차", "자동차", "보험", "투자", "펀드", "연금", "은퇴",
            "부모님", "효도", "가족여행", "가족사진", "가족모임",
        ],
    },
    AgeBracket {
        name: "50대+",
        weight: 0.8,
        platforms: &[Platform::Youtube],
        keywords: &[
            "건강", "운동", "다이어트", "요리", "베이킹", "가드닝",
            "취미", "독서", "영화", "드라마", "넷플릭스", "ott",
            "집", "아파트", "분양", "인테리어", "가전제품", "가구",
            "차", "자동차", "보험", "투자", "펀드", "연금", "은퇴",
            "부모님", "효도", "가족여행", "가족사진", "가족모임",
            "노후", "건강검진", "병원",
        ],
    },
];

/// A keyword scored for one bracket.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordScore {
    pub keyword: String,
    pub score: f64,
    /// Synthetic search volume derived from the score, for display.
    pub search_count: u64,
    pub trending_level: String,
}

/// Keyword ranking for one age bracket.
#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupKeywords {
    pub age_group: String,
    pub keywords: Vec<KeywordScore>,
    pub total_searches: u64,
    pub platform_distribution: BTreeMap<String, u64>,
    pub trending_score: f64,
    pub timestamp: DateTime<Utc>,
}

/// Per-bracket breakdown of one keyword's footprint.
#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupBreakdown {
    pub mentions: u64,
    pub platform_mentions: BTreeMap<String, u64>,
    pub engagement_score: f64,
    pub relevance_score: f64,
    pub trending_level: String,
}

/// Full cross-bracket analysis of one keyword.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub age_groups: BTreeMap<String, AgeGroupBreakdown>,
    pub total_mentions: u64,
    pub platform_breakdown: BTreeMap<String, u64>,
    pub trending_trend: String,
    pub related_keywords: Vec<String>,
    pub sentiment_score: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopKeyword {
    pub keyword: String,
    pub score: f64,
    pub trending_level: String,
}

/// Trend summary for a single bracket.
#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupTrends {
    pub age_group: String,
    pub top_keywords: Vec<TopKeyword>,
    pub platform_preferences: BTreeMap<String, f64>,
    pub timestamp: DateTime<Utc>,
}

/// Error returned for an age bracket outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgeGroup(pub String);

impl std::fmt::Display for UnknownAgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown age group: {}", self.0)
    }
}

impl std::error::Error for UnknownAgeGroup {}

/// Capped engagement blend for one item.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_score(item: &TrendItem) -> f64 {
    let raw = item.view_count as f64 * 0.1
        + item.like_count as f64 * 0.3
        + item.comment_count as f64 * 0.4;
    raw.min(ENGAGEMENT_CAP)
}

/// Categorical label on the engagement scale.
#[must_use]
pub fn engagement_level(score: f64) -> &'static str {
    if score > 500.0 {
        "매우 인기"
    } else if score > 200.0 {
        "인기 상승"
    } else if score > 50.0 {
        "관심 증가"
    } else {
        "일반"
    }
}

fn platform_weight(platform: Platform) -> f64 {
    match platform {
        Platform::Youtube => 1.0,
        Platform::Tiktok => 1.2,
        Platform::Instagram => 1.1,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn korean_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[가-힣]{2,}").expect("korean regex"))
}

/// Rank each bracket's curated keywords against the collected items.
#[must_use]
pub fn keywords_by_age_group(items: &[TrendItem], max_results: usize) -> Vec<AgeGroupKeywords> {
    let now = Utc::now();
    BRACKETS
        .iter()
        .map(|bracket| {
            let mut scores: BTreeMap<&'static str, f64> = BTreeMap::new();
            for item in items {
                let text = item.text_content().to_lowercase();
                let engagement = engagement_score(item);
                for keyword in bracket.keywords.iter().copied() {
                    if text.contains(keyword) {
                        *scores.entry(keyword).or_insert(0.0) +=
                            engagement * platform_weight(item.platform) * bracket.weight;
                    }
                }
            }

            let mut ranked: Vec<(&'static str, f64)> = scores.into_iter().collect();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            ranked.truncate(max_results);

            let total_score: f64 = ranked.iter().map(|(_, s)| s).sum();
            let keywords: Vec<KeywordScore> = ranked
                .into_iter()
                .map(|(keyword, score)| KeywordScore {
                    keyword: keyword.to_string(),
                    score: round2(score),
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    search_count: (score * 100.0).max(0.0) as u64,
                    trending_level: engagement_level(score).to_string(),
                })
                .collect();

            // Rough split of the bracket's volume over its preferred platforms.
            let mut platform_distribution = BTreeMap::new();
            if total_score > 0.0 {
                #[allow(clippy::cast_precision_loss)]
                let per_platform = total_score / bracket.platforms.len() as f64;
                for platform in bracket.platforms {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    platform_distribution.insert(
                        platform.to_string(),
                        (per_platform * platform_weight(*platform)) as u64,
                    );
                }
            }

            let trending_score = if keywords.is_empty() {
                0.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let avg = total_score / keywords.len() as f64;
                round2((avg / 10.0).min(100.0))
            };

            AgeGroupKeywords {
                age_group: bracket.name.to_string(),
                total_searches: keywords.iter().map(|k| k.search_count).sum(),
                keywords,
                platform_distribution,
                trending_score,
                timestamp: now,
            }
        })
        .collect()
}

/// Analyze one keyword's footprint across brackets and platforms.
#[must_use]
pub fn analyze_keyword(keyword: &str, items: &[TrendItem]) -> KeywordAnalysis {
    let keyword_lower = keyword.to_lowercase();
    let mut age_groups = BTreeMap::new();
    let mut total_mentions: u64 = 0;
    let mut platform_breakdown: BTreeMap<String, u64> = BTreeMap::new();

    for bracket in &BRACKETS {
        let mut mentions: u64 = 0;
        let mut platform_mentions: BTreeMap<String, u64> = BTreeMap::new();
        let mut engagement = 0.0;

        for item in items {
            let title = item.title.to_lowercase();
            let description = item.description.to_lowercase();
            if title.contains(&keyword_lower) || description.contains(&keyword_lower) {
                mentions += 1;
                *platform_mentions
                    .entry(item.platform.to_string())
                    .or_insert(0) += 1;
                engagement += engagement_score(item);
            }
        }

        age_groups.insert(
            bracket.name.to_string(),
            AgeGroupBreakdown {
                mentions,
                platform_mentions,
                engagement_score: round2(engagement),
                relevance_score: round2(relevance(&keyword_lower, bracket)),
                trending_level: engagement_level(engagement).to_string(),
            },
        );
    }

    // Mentions are bracket-independent; count them once for the totals.
    if let Some(first) = age_groups.values().next() {
        total_mentions = first.mentions;
        platform_breakdown.clone_from(&first.platform_mentions);
    }

    KeywordAnalysis {
        keyword: keyword.to_string(),
        age_groups,
        total_mentions,
        platform_breakdown,
        trending_trend: trend_direction(items).to_string(),
        related_keywords: related_keywords(items),
        sentiment_score: sentiment_score(items),
        timestamp: Utc::now(),
    }
}

/// Trend summary for one bracket. Rejects brackets outside the fixed set.
///
/// # Errors
///
/// Returns [`UnknownAgeGroup`] when `age_group` is not one of [`crate::AGE_GROUPS`].
pub fn age_group_trends(
    age_group: &str,
    items: &[TrendItem],
    max_results: usize,
) -> Result<AgeGroupTrends, UnknownAgeGroup> {
    let bracket = BRACKETS
        .iter()
        .find(|b| b.name == age_group)
        .ok_or_else(|| UnknownAgeGroup(age_group.to_string()))?;

    let filtered: Vec<&TrendItem> = items
        .iter()
        .filter(|item| {
            let text = item.text_content().to_lowercase();
            bracket.keywords.iter().any(|kw| text.contains(kw))
        })
        .collect();

    // Korean tokens weighted by engagement.
    let mut scores: HashMap<String, f64> = HashMap::new();
    for item in &filtered {
        let engagement = engagement_score(item);
        for token in korean_re().find_iter(&item.text_content()) {
            *scores.entry(token.as_str().to_string()).or_insert(0.0) += engagement;
        }
    }
    let mut ranked: Vec<(String, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_results);

    let top_keywords = ranked
        .into_iter()
        .map(|(keyword, score)| TopKeyword {
            keyword,
            score: round2(score),
            trending_level: engagement_level(score).to_string(),
        })
        .collect();

    let mut platform_preferences = BTreeMap::new();
    for platform in bracket.platforms {
        let count = filtered.iter().filter(|i| i.platform == *platform).count();
        #[allow(clippy::cast_precision_loss)]
        let pct = if filtered.is_empty() {
            0.0
        } else {
            count as f64 / filtered.len() as f64 * 100.0
        };
        platform_preferences.insert(platform.to_string(), round2(pct));
    }

    Ok(AgeGroupTrends {
        age_group: bracket.name.to_string(),
        top_keywords,
        platform_preferences,
        timestamp: Utc::now(),
    })
}

/// Bracket affinity of a keyword: exact list hit, partial overlap, or floor.
fn relevance(keyword_lower: &str, bracket: &AgeBracket) -> f64 {
    if bracket.keywords.contains(&keyword_lower) {
        return bracket.weight * 100.0;
    }
    let partial = bracket
        .keywords
        .iter()
        .any(|kw| keyword_lower.contains(kw) || kw.contains(keyword_lower));
    if partial {
        bracket.weight * 50.0
    } else {
        10.0
    }
}

/// Direction from the share of recently published content.
fn trend_direction(items: &[TrendItem]) -> &'static str {
    if items.is_empty() {
        return "유지";
    }
    let now = Utc::now();
    let recent = items
        .iter()
        .filter(|item| {
            item.published_at
                .is_some_and(|ts| now - ts < Duration::days(RECENT_WINDOW_DAYS))
        })
        .count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = recent as f64 / items.len() as f64;
    if ratio > 0.6 {
        "상승"
    } else if ratio > 0.3 {
        "유지"
    } else {
        "하락"
    }
}

/// The ten most frequent Korean tokens across the item texts.
fn related_keywords(items: &[TrendItem]) -> Vec<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for item in items {
        for token in korean_re().find_iter(&item.text_content()) {
            *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(10).map(|(word, _)| word).collect()
}

/// Crude lexicon polarity in `[-1, 1]`; 0 when neither list matches.
fn sentiment_score(items: &[TrendItem]) -> f64 {
    let mut all_text = String::new();
    for item in items {
        all_text.push_str(&item.title);
        all_text.push(' ');
        all_text.push_str(&item.description);
        all_text.push(' ');
    }

    let positive = POSITIVE_WORDS
        .iter()
        .filter(|w| all_text.contains(*w))
        .count() as i64;
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|w| all_text.contains(*w))
        .count() as i64;

    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let polarity = (positive - negative) as f64 / total as f64;
    round2(polarity)
}
