//! Small text helpers shared by provider normalizers.

use std::sync::OnceLock;

use regex::Regex;

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[\w가-힣]+").expect("hashtag regex"))
}

/// Extract lowercased hashtags (`#...`) from free text.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    hashtag_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
///
/// Counts `char`s, not bytes, so multi-byte Korean text never splits inside
/// a code point.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_lowercases_hashtags() {
        assert_eq!(
            extract_hashtags("#Hi #hello world"),
            vec!["#hi".to_string(), "#hello".to_string()]
        );
    }

    #[test]
    fn extracts_korean_hashtags() {
        assert_eq!(extract_hashtags("오늘의 #먹방 영상"), vec!["#먹방".to_string()]);
    }

    #[test]
    fn no_hashtags_returns_empty() {
        assert!(extract_hashtags("plain text only").is_empty());
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate("abcdef", 5), "ab...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // 10 Korean chars cut to 8 -> 5 chars + "..."
        let s = "가나다라마바사아자차";
        let t = truncate(s, 8);
        assert_eq!(t, "가나다라마...");
    }
}
