//! Client for the unofficial Google Trends JSON endpoints.
//!
//! Google serves these payloads with an anti-XSSI prefix (`)]}',`) that must
//! be stripped before parsing. Every public operation degrades to a
//! well-formed dummy payload on upstream failure or an empty result, so
//! callers always receive renderable data; the `source` field distinguishes
//! live (`google_trends`) from synthetic (`google_trends_dummy`) responses.

mod client;
pub mod dummy;
mod error;
mod types;

pub use client::GtrendsClient;
pub use types::{
    CategoryEntry, InterestByRegion, InterestOverTime, InterestPoint, RealtimeEntry,
    RegionInterest, RelatedQueries, RelatedQuery,
};
