//! Site configuration: TOML types plus loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FeedConfig, ServerConfig, SiteConfig};
