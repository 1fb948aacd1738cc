//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with YouTube-specific error handling, API key management,
//! and normalization of raw video resources into [`trendscope_core::TrendItem`].
//! Quota exhaustion is surfaced as a distinct error kind so callers can map
//! it to a rate-limit status instead of a generic failure.

mod client;
mod error;
pub mod normalize;
mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use types::{ContentDetails, RawVideo, Snippet, Statistics, Thumbnail, Thumbnails};
