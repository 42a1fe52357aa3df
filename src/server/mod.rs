//! HTTP server for the site: pages, buyers API, static files and health.

mod connection;
pub mod error;
pub mod handlers;
pub mod health;
pub mod router;
pub mod shutdown;
pub mod state;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::feed::FeedClient;
use crate::i18n::{Catalog, Locale};
use crate::server::connection::ConnectionCounter;
use crate::server::router::build_router;
use crate::server::shutdown::ShutdownManager;
use crate::server::state::AppState;

pub use error::SiteError;

pub struct SiteServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl SiteServer {
    /// Load catalogs and build the feed client from `config`.
    pub fn new(config: Config) -> Result<Self, SiteError> {
        let default_locale = Locale::new(&config.site.default_locale);
        let catalog = Catalog::load(&config.site.locales_dir, &default_locale)?;
        let feed = FeedClient::new(&config.feed)?;
        tracing::info!(feed = feed.url(), "Feed client ready");

        Ok(Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: AppState::new(config, catalog, feed),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address and keep the listener for `run()`.
    ///
    /// Only that address is tried; a busy port is a [`SiteError::Bind`].
    /// Port 0 asks the OS for any free port.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, SiteError> {
        let bind_addr_str = self.state.config().server.bind_addr.clone();
        let bind_addr: SocketAddr = bind_addr_str.parse().map_err(|e| SiteError::Bind {
            addr: bind_addr_str.clone(),
            reason: format!("{e}"),
        })?;

        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| SiteError::Bind {
                addr: bind_addr_str,
                reason: e.to_string(),
            })?;
        let actual_addr = listener.local_addr()?;

        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Site bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn handle(&self) -> SiteHandle {
        SiteHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the site until shutdown.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), SiteError> {
        let listener = self.listener.ok_or(SiteError::NotBound)?;

        tracing::info!("Serving site on http://{}", self.addr);

        let app = build_router(self.state);
        let make_service = ConnectionCounter::new(app.into_make_service(), self.shutdown.clone());

        let shutdown = self.shutdown.clone();
        axum::serve(listener, make_service)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Failed to install signal handler: {}", e);
                }
            })
            .into_future()
            .await?;

        self.shutdown.wait_for_connections(Duration::from_secs(10)).await;
        tracing::info!("Shutting down gracefully");

        Ok(())
    }
}

/// Cloneable handle to stop a running [`SiteServer`].
#[derive(Clone)]
pub struct SiteHandle {
    shutdown: Arc<ShutdownManager>,
}

impl SiteHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
