use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Informational site for the NFTs d'Advent drop.
#[derive(Debug, Parser)]
#[command(name = "advent-nft", version, about)]
pub struct Cli {
    /// Config file (default: platform config dir, advent-nft/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Buyers feed URL
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Fallback locale tag
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Directory with per-locale string catalogs
    #[arg(long, value_name = "PATH")]
    pub locales_dir: Option<PathBuf>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Override file values with the ones given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
        }
        if let Some(url) = &self.feed_url {
            config.feed.url = url.clone();
        }
        if let Some(locale) = &self.locale {
            config.site.default_locale = locale.clone();
        }
        if let Some(dir) = &self.locales_dir {
            config.site.locales_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["advent-nft"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.site.default_locale, "ca");
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::try_parse_from([
            "advent-nft",
            "--bind",
            "0.0.0.0:8080",
            "--feed-url",
            "https://feed.example/buyers",
            "--locale",
            "en",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.feed.url, "https://feed.example/buyers");
        assert_eq!(config.site.default_locale, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::try_parse_from(["advent-nft", "--config", "/etc/advent-nft.toml"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/etc/advent-nft.toml"));
    }
}
