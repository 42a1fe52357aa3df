use thiserror::Error;

/// Errors raised while fetching the buyers list.
///
/// These never reach the page: [`super::FeedClient::snapshot`] logs them
/// and falls back to the empty default.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP client could not be built
    #[error("Failed to build feed client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, refused connection, reset)
    #[error("Feed request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The feed answered with a non-success status
    #[error("Feed returned status {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of buyer records
    #[error("Feed body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// One entry could not be read as a buyer; only that row is skipped
    #[error("Feed record skipped: {reason}")]
    Record { reason: &'static str },

    /// The render budget elapsed before the feed answered
    #[error("Feed did not answer within {millis}ms")]
    Timeout { millis: u64 },
}

impl FeedError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Client(_) => "client",
            FeedError::Request { .. } => "request",
            FeedError::Status { .. } => "status",
            FeedError::Decode(_) => "decode",
            FeedError::Record { .. } => "record",
            FeedError::Timeout { .. } => "timeout",
        }
    }
}
