//! Age-bracket interest heuristic.
//!
//! Estimates, per keyword, how interest distributes over five fixed age
//! brackets. This is not measured demographic data: a static pattern table
//! (with a curated category fallback) supplies base scores, and bounded
//! random jitter makes repeated calls vary. The contract is plausibility and
//! boundedness: every score stays in `[0, 100]` and within ±10 of its base.

use rand::Rng;
use serde::Serialize;

/// The fixed, ordered age brackets.
pub const AGE_GROUPS: [&str; 5] = ["10대", "20대", "30대", "40대", "50대+"];

/// Jitter half-width applied to every base score.
const JITTER: i32 = 10;

/// Neutral baseline when neither table matches.
const NEUTRAL_BASE: [i32; 5] = [50, 50, 50, 50, 50];

/// Exact-match keyword patterns: base interest per bracket, 10대 first.
const EXACT_PATTERNS: &[(&str, [i32; 5])] = &[
    ("뉴진스", [95, 85, 60, 30, 15]),
    ("게임", [90, 80, 70, 50, 30]),
    ("취업", [40, 95, 80, 60, 40]),
    ("결혼", [20, 70, 90, 60, 40]),
    ("건강", [30, 50, 70, 90, 95]),
];

/// Category terms matched by substring when no exact pattern applies.
const CATEGORY_PATTERNS: &[(&str, [i32; 5])] = &[
    ("게임", [90, 80, 70, 50, 30]),
    ("아이돌", [95, 85, 60, 30, 15]),
    ("애니메이션", [90, 75, 55, 35, 20]),
    ("취업", [40, 95, 80, 60, 40]),
    ("투자", [30, 80, 85, 70, 55]),
    ("결혼", [20, 70, 90, 60, 40]),
    ("육아", [15, 65, 95, 70, 45]),
    ("건강", [30, 50, 70, 90, 95]),
    ("은퇴", [10, 30, 50, 80, 95]),
];

/// Estimated interest for one bracket.
#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupProfile {
    pub age_group: String,
    pub score: u8,
    pub trending_level: String,
}

/// Estimate the interest profile of a keyword across all five brackets.
///
/// The RNG is injected so tests can seed it; production callers pass a fresh
/// OS-seeded generator. Output order always matches [`AGE_GROUPS`].
pub fn estimate_age_profile<R: Rng>(keyword: &str, rng: &mut R) -> Vec<AgeGroupProfile> {
    let base = base_scores(keyword);

    AGE_GROUPS
        .iter()
        .zip(base)
        .map(|(age_group, base_score)| {
            let jittered = base_score + rng.random_range(-JITTER..=JITTER);
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let score = jittered.clamp(0, 100) as u8;
            AgeGroupProfile {
                age_group: (*age_group).to_string(),
                score,
                trending_level: trending_level(score).to_string(),
            }
        })
        .collect()
}

/// Base scores for a keyword before jitter.
///
/// Exact table match wins; otherwise the first category term the keyword
/// contains; otherwise the neutral baseline.
#[must_use]
pub fn base_scores(keyword: &str) -> [i32; 5] {
    let normalized = keyword.trim().to_lowercase();

    if let Some((_, base)) = EXACT_PATTERNS
        .iter()
        .find(|(pattern, _)| *pattern == normalized)
    {
        return *base;
    }

    if let Some((_, base)) = CATEGORY_PATTERNS
        .iter()
        .find(|(term, _)| normalized.contains(term))
    {
        return *base;
    }

    NEUTRAL_BASE
}

/// Categorical label for a jittered score.
#[must_use]
pub fn trending_level(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "매우 인기",
        70..=89 => "인기 상승",
        50..=69 => "관심 증가",
        _ => "일반",
    }
}
