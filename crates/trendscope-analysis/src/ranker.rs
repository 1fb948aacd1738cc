//! Keyword extraction and trending-score ranking.
//!
//! Keywords are pulled from each item's title/description/hashtag text and
//! aggregated across platforms. The trending score combines how often a
//! keyword appears, how many views back it, and on how many distinct
//! platforms it shows up; views enter log-scaled so a single viral item
//! cannot dominate linearly.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use trendscope_core::{Platform, TrendItem};

/// Weight per keyword appearance.
const W_APPEARANCES: f64 = 10.0;
/// Weight on `ln(total_views + 1)`.
const W_LOG_VIEWS: f64 = 10.0;
/// Weight per distinct platform.
const W_PLATFORMS: f64 = 5.0;

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "이", "그", "저", "것", "수", "등", "및", "또는", "그리고", "하지만",
    "에서", "으로", "에게", "를", "을",
];

/// One ranked keyword aggregated across platforms.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingKeywordEntry {
    pub keyword: String,
    pub trending_score: f64,
    pub count: usize,
    pub total_views: u64,
    pub platforms: Vec<Platform>,
    pub platform_count: usize,
}

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[가-힣a-zA-Z0-9]{2,}").expect("keyword regex"))
}

/// Extract candidate keywords from free text.
///
/// Lowercases, keeps runs of Korean/Latin/digit characters of length >= 2,
/// and drops stop-words. Repeated words are kept; each occurrence counts
/// toward the ranking.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    keyword_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Aggregate keywords across items and return the top `max_results` entries.
///
/// Sorted by trending score descending, then total views descending, then
/// keyword ascending, so the result is fully deterministic for a fixed input set. Asking for
/// more than exist returns all available.
#[must_use]
pub fn rank_keywords(items: &[TrendItem], max_results: usize) -> Vec<TrendingKeywordEntry> {
    struct Accum {
        count: usize,
        total_views: u64,
        platforms: BTreeSet<Platform>,
    }

    let mut scores: BTreeMap<String, Accum> = BTreeMap::new();
    for item in items {
        for keyword in extract_keywords(&item.text_content()) {
            let entry = scores.entry(keyword).or_insert_with(|| Accum {
                count: 0,
                total_views: 0,
                platforms: BTreeSet::new(),
            });
            entry.count += 1;
            entry.total_views = entry.total_views.saturating_add(item.view_count);
            entry.platforms.insert(item.platform);
        }
    }

    let mut entries: Vec<TrendingKeywordEntry> = scores
        .into_iter()
        .map(|(keyword, accum)| TrendingKeywordEntry {
            trending_score: trending_score(accum.count, accum.total_views, accum.platforms.len()),
            keyword,
            count: accum.count,
            total_views: accum.total_views,
            platform_count: accum.platforms.len(),
            platforms: accum.platforms.into_iter().collect(),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.trending_score
            .total_cmp(&a.trending_score)
            .then_with(|| b.total_views.cmp(&a.total_views))
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    entries.truncate(max_results);
    entries
}

/// The trending score: monotonic non-decreasing in every input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn trending_score(count: usize, total_views: u64, platform_count: usize) -> f64 {
    count as f64 * W_APPEARANCES
        + (total_views as f64 + 1.0).ln() * W_LOG_VIEWS
        + platform_count as f64 * W_PLATFORMS
}
