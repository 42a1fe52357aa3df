use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the site (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Directory served under `/public` (images, stylesheet).
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

/// Buyer ranking feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Fixed address of the buyers list (JSON array).
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Render budget for one feed request in milliseconds (default: 2000).
    /// When it elapses the ranking table renders empty.
    #[serde(default = "default_feed_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection timeout in milliseconds (default: 1000).
    #[serde(default = "default_feed_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

/// Content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Locale used when neither `?lang=` nor `Accept-Language` matches.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Directory holding one subdirectory of TOML catalogs per locale.
    #[serde(default = "default_locales_dir")]
    pub locales_dir: PathBuf,
    /// JSON file served by `/api/buyers`. Unset means an empty list.
    #[serde(default)]
    pub buyers_file: Option<PathBuf>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_feed_url() -> String {
    "http://127.0.0.1:3000/api/buyers".to_string()
}

fn default_feed_timeout_ms() -> u64 {
    2000
}

fn default_feed_connect_timeout_ms() -> u64 {
    1000
}

fn default_locale() -> String {
    "ca".to_string()
}

fn default_locales_dir() -> PathBuf {
    PathBuf::from("locales")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_ms: default_feed_timeout_ms(),
            connect_timeout_ms: default_feed_connect_timeout_ms(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales_dir: default_locales_dir(),
            buyers_file: None,
        }
    }
}
