use thiserror::Error;

/// Errors returned by the `YouTube` Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request because the daily quota is exhausted.
    #[error("YouTube API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The API returned a non-2xx status for any other reason.
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
