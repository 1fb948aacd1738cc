use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social media platform a trend item originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
}

impl Platform {
    /// All supported platforms, in canonical order.
    pub const ALL: [Platform; 3] = [Platform::Youtube, Platform::Tiktok, Platform::Instagram];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl std::fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: {}", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "tiktok" => Ok(Platform::Tiktok),
            "instagram" => Ok(Platform::Instagram),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// A single normalized trend record, common to all providers.
///
/// Numeric engagement fields default to 0 when a provider omits them or sends
/// an unparseable value; they are never negative and never null. Optional
/// descriptive fields stay `None` when the provider has nothing to offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub platform: Platform,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Video length in seconds; 0 when the provider has no duration or the
    /// duration string was unparseable.
    #[serde(default)]
    pub duration_secs: u64,
    /// Lowercased `#...` tokens pulled from title and description.
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl TrendItem {
    /// The text pool keyword extraction and matching operate on.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = format!("{} {}", self.title, self.description);
        for tag in &self.hashtags {
            text.push(' ');
            text.push_str(tag);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::Youtube);
        assert_eq!("tiktok".parse::<Platform>().unwrap(), Platform::Tiktok);
        assert_eq!("INSTAGRAM".parse::<Platform>().unwrap(), Platform::Instagram);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "twitter".parse::<Platform>().unwrap_err();
        assert_eq!(err.0, "twitter");
    }

    #[test]
    fn platform_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Platform::Youtube).unwrap(),
            "\"youtube\""
        );
    }

    #[test]
    fn trend_item_defaults_numeric_fields_to_zero() {
        let json = r#"{
            "id": "abc",
            "title": "제목",
            "platform": "tiktok",
            "url": "https://example.com",
            "thumbnail_url": null,
            "author": null,
            "published_at": null
        }"#;
        let item: TrendItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(item.view_count, 0);
        assert_eq!(item.like_count, 0);
        assert_eq!(item.comment_count, 0);
        assert_eq!(item.duration_secs, 0);
        assert!(item.hashtags.is_empty());
    }

    #[test]
    fn text_content_includes_title_description_and_hashtags() {
        let item = TrendItem {
            id: "x".into(),
            title: "뉴진스 컴백".into(),
            description: "새 앨범".into(),
            platform: Platform::Youtube,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            url: String::new(),
            thumbnail_url: None,
            author: None,
            published_at: None,
            duration_secs: 0,
            hashtags: vec!["#뉴진스".into()],
        };
        let text = item.text_content();
        assert!(text.contains("뉴진스 컴백"));
        assert!(text.contains("새 앨범"));
        assert!(text.contains("#뉴진스"));
    }
}
