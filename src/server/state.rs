//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::feed::FeedClient;
use crate::i18n::Catalog;

/// Shared application state. Immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: Config,
    catalog: Catalog,
    feed: FeedClient,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, feed: FeedClient) -> Self {
        Self {
            inner: Arc::new(InnerState {
                config,
                catalog,
                feed,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn feed(&self) -> &FeedClient {
        &self.inner.feed
    }
}
