use thiserror::Error;

/// Internal errors from the Google Trends endpoints.
///
/// Never crosses the crate boundary: every public operation catches these
/// and substitutes the documented dummy payload.
#[derive(Debug, Error)]
pub(crate) enum GtrendsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google Trends returned status {0}")]
    Status(u16),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("explore response has no {0} widget")]
    MissingWidget(&'static str),
}
