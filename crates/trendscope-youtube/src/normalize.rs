//! Normalization of raw `YouTube` video resources into [`TrendItem`]s.
//!
//! A malformed individual record is skipped with a warning rather than
//! aborting the whole batch; partial results beat total failure.

use trendscope_core::{text, Platform, TrendItem};

use crate::types::RawVideo;

const DESCRIPTION_MAX_CHARS: usize = 200;

/// Convert a batch of raw video values into normalized trend items.
///
/// Values that do not deserialize as a video resource, or that lack a video
/// id, are dropped with a warning.
#[must_use]
pub fn normalize_videos(raw_items: &[serde_json::Value]) -> Vec<TrendItem> {
    raw_items
        .iter()
        .filter_map(|value| match serde_json::from_value::<RawVideo>(value.clone()) {
            Ok(video) => normalize_video(video),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed video resource");
                None
            }
        })
        .collect()
}

/// Normalize one raw video. Returns `None` when the record has no id.
#[must_use]
pub fn normalize_video(video: RawVideo) -> Option<TrendItem> {
    let Some(id) = video.id else {
        tracing::warn!("skipping video resource without id");
        return None;
    };

    let snippet = video.snippet;
    let hashtags = text::extract_hashtags(&format!("{} {}", snippet.description, snippet.title));
    let thumbnail_url = snippet
        .thumbnails
        .high
        .or(snippet.thumbnails.default)
        .map(|t| t.url);

    Some(TrendItem {
        url: format!("https://www.youtube.com/watch?v={id}"),
        id,
        title: snippet.title,
        description: text::truncate(&snippet.description, DESCRIPTION_MAX_CHARS),
        platform: Platform::Youtube,
        view_count: parse_count(video.statistics.view_count.as_deref()),
        like_count: parse_count(video.statistics.like_count.as_deref()),
        comment_count: parse_count(video.statistics.comment_count.as_deref()),
        thumbnail_url,
        author: snippet.channel_title,
        published_at: snippet.published_at,
        duration_secs: parse_duration_seconds(
            video.content_details.duration.as_deref().unwrap_or(""),
        ),
        hashtags,
    })
}

/// Parse a decimal-string counter, defaulting to 0 on absence or garbage.
#[must_use]
pub fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Parse a duration string into whole seconds.
///
/// Accepts ISO 8601 `PT#H#M#S` (any subset of components), `mm:ss`, and
/// `h:mm:ss`. Malformed tokens are ignored; fully unparseable input yields 0.
/// Pure: the same input always yields the same output, and no input raises.
#[must_use]
pub fn parse_duration_seconds(raw: &str) -> u64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0;
    }

    if let Some(iso) = s.strip_prefix("PT").or_else(|| s.strip_prefix("pt")) {
        return parse_iso_components(iso);
    }

    if s.contains(':') {
        return parse_colon_components(s);
    }

    0
}

/// Render seconds as `h:mm:ss`, or `m:ss` under an hour.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn parse_iso_components(iso: &str) -> u64 {
    let mut total: u64 = 0;
    let mut digits = String::new();
    for ch in iso.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let value = digits.parse::<u64>().unwrap_or(0);
        digits.clear();
        match ch.to_ascii_uppercase() {
            'H' => total = total.saturating_add(value.saturating_mul(3600)),
            'M' => total = total.saturating_add(value.saturating_mul(60)),
            'S' => total = total.saturating_add(value),
            _ => {} // unknown designator: token ignored
        }
    }
    total
}

fn parse_colon_components(s: &str) -> u64 {
    let parts: Vec<&str> = s.split(':').collect();
    let seg = |i: usize| -> u64 {
        parts
            .get(i)
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(0)
    };
    match parts.len() {
        2 => seg(0) * 60 + seg(1),
        3 => seg(0) * 3600 + seg(1) * 60 + seg(2),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn iso_full_duration_parses() {
        assert_eq!(parse_duration_seconds("PT1H2M3S"), 3723);
    }

    #[test]
    fn iso_partial_durations_parse() {
        assert_eq!(parse_duration_seconds("PT4M13S"), 253);
        assert_eq!(parse_duration_seconds("PT2H"), 7200);
        assert_eq!(parse_duration_seconds("PT45S"), 45);
    }

    #[test]
    fn colon_forms_parse() {
        assert_eq!(parse_duration_seconds("4:13"), 253);
        assert_eq!(parse_duration_seconds("1:02:03"), 3723);
    }

    #[test]
    fn malformed_input_returns_zero() {
        for input in ["", "   ", "abc", "PT", "::::", "1:2:3:4", "h m s"] {
            assert_eq!(parse_duration_seconds(input), 0, "input {input:?}");
        }
    }

    #[test]
    fn malformed_tokens_are_ignored_not_fatal() {
        // Unknown designator dropped, rest kept.
        assert_eq!(parse_duration_seconds("PT1X2M"), 120);
        // Unparseable segment contributes nothing.
        assert_eq!(parse_duration_seconds("1:ab"), 60);
    }

    #[test]
    fn parser_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(parse_duration_seconds("PT10M30S"), 630);
        }
    }

    #[test]
    fn duration_round_trips_through_format() {
        for secs in [0, 59, 253, 3723, 7200] {
            assert_eq!(parse_duration_seconds(&format_duration(secs)), secs);
        }
        assert_eq!(format_duration(3723), "1:02:03");
        assert_eq!(format_duration(253), "4:13");
    }

    #[test]
    fn parse_count_defaults_to_zero() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("not-a-number")), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("1234")), 1234);
    }

    fn sample_video(id: &str, views: &str) -> serde_json::Value {
        json!({
            "id": id,
            "snippet": {
                "title": "뉴진스 새 뮤직비디오 #뉴진스",
                "description": "공식 뮤직비디오입니다",
                "channelTitle": "HYBE LABELS",
                "publishedAt": "2026-07-01T09:00:00Z",
                "thumbnails": { "high": { "url": "https://i.ytimg.com/vi/x/hq.jpg" } }
            },
            "statistics": { "viewCount": views, "likeCount": "1000" },
            "contentDetails": { "duration": "PT3M30S" }
        })
    }

    #[test]
    fn normalize_maps_all_fields() {
        let items = normalize_videos(&[sample_video("vid1", "500000")]);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, "vid1");
        assert_eq!(item.platform, Platform::Youtube);
        assert_eq!(item.view_count, 500_000);
        assert_eq!(item.like_count, 1000);
        assert_eq!(item.comment_count, 0, "omitted counter defaults to 0");
        assert_eq!(item.url, "https://www.youtube.com/watch?v=vid1");
        assert_eq!(item.duration_secs, 210);
        assert_eq!(item.author.as_deref(), Some("HYBE LABELS"));
        assert!(item.hashtags.contains(&"#뉴진스".to_string()));
    }

    #[test]
    fn malformed_record_is_skipped_batch_continues() {
        let batch = vec![
            sample_video("ok1", "10"),
            json!({"snippet": {"title": "id 없음"}}),
            json!("not even an object"),
            sample_video("ok2", "20"),
        ];
        let items = normalize_videos(&batch);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "ok1");
        assert_eq!(items[1].id, "ok2");
    }

    #[test]
    fn garbage_statistics_normalize_to_zero() {
        let mut video = sample_video("vid", "tons");
        video["statistics"]["likeCount"] = json!("많음");
        let items = normalize_videos(&[video]);
        assert_eq!(items[0].view_count, 0);
        assert_eq!(items[0].like_count, 0);
    }
}
