use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::FeedConfig;
use crate::feed::error::FeedError;
use crate::feed::types::{Buyer, FeedState};

/// Client for the buyers feed.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    url: String,
    timeout_ms: u64,
}

impl FeedClient {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(FeedError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the buyers list once, with no retries.
    ///
    /// Records come back in the order the feed sent them. The body must be
    /// a JSON array; entries that cannot be read as a buyer are logged and
    /// skipped without dropping the rest.
    pub async fn fetch(&self) -> Result<Vec<Buyer>, FeedError> {
        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.request_error(e))?;
        let records: Vec<Value> = serde_json::from_slice(&body)?;
        let buyers = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match Buyer::try_from(record) {
                Ok(buyer) => Some(buyer),
                Err(err) => {
                    tracing::warn!(url = %self.url, index, "{}", err);
                    None
                }
            })
            .collect();
        Ok(buyers)
    }

    /// Take the feed snapshot for one render.
    ///
    /// The fetch is bounded by the configured budget. Timeouts and errors
    /// are logged and degrade to [`FeedState::Pending`].
    pub async fn snapshot(&self) -> FeedState {
        let budget = Duration::from_millis(self.timeout_ms);
        let result = match timeout(budget, self.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FeedError::Timeout {
                millis: self.timeout_ms,
            }),
        };

        match result {
            Ok(buyers) => {
                tracing::debug!(url = %self.url, rows = buyers.len(), "Feed resolved");
                FeedState::Resolved(buyers)
            }
            Err(err) => {
                tracing::warn!(url = %self.url, kind = err.kind(), "Feed unavailable, rendering empty ranking: {}", err);
                FeedState::Pending
            }
        }
    }

    fn request_error(&self, source: reqwest::Error) -> FeedError {
        FeedError::Request {
            url: self.url.clone(),
            source,
        }
    }
}
