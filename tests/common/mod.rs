//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::time::Duration;

use advent_nft::config::Config;
use advent_nft::server::{SiteHandle, SiteServer};
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Catalogs shipped with the crate.
pub fn shipped_locales() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
}

/// Create a temporary config file with the given feed URL.
pub fn temp_config(feed_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[server]
bind_addr = "127.0.0.1:0"

[feed]
url = "{}"
timeout_ms = 500
connect_timeout_ms = 200

[site]
default_locale = "ca"
locales_dir = "{}"
"#,
        feed_url,
        shipped_locales().display()
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointing at `feed_url`, bound to an OS-assigned port.
pub fn test_config(feed_url: &str) -> Config {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();
    config.feed.url = feed_url.to_string();
    config.feed.timeout_ms = 500;
    config.feed.connect_timeout_ms = 200;
    config.site.locales_dir = shipped_locales();
    config
}

/// Start a site server in the background. Returns its address and a
/// handle to stop it.
pub async fn start_site(config: Config) -> (SocketAddr, SiteHandle) {
    let mut server = SiteServer::new(config).expect("Failed to create site server");
    let addr = server.try_bind().await.expect("Failed to bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    (addr, handle)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
