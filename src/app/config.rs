//! GUI configuration, read from `<datadir>/soul.toml`.

use std::path::Path;
use std::time::Duration;

use bitcoin::Network;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::error::Error;
use crate::logger::level_from_config;

pub const BACKEND_URL_ENV: &str = "SOUL_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8181";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base url of the node daemon REST API.
    pub backend_url: String,
    pub request_timeout_secs: u64,
    /// Number of blocks mined by the "mine to self" action.
    pub blocks_per_mine: u64,
    pub network: Network,
    pub log_level: Option<String>,
    /// Forces the debug log level.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: 30,
            blocks_per_mine: 1,
            network: Network::Regtest,
            log_level: None,
            debug: false,
        }
    }
}

impl Config {
    /// A missing file is not an error, the defaults are used instead.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid configuration: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Applies `SOUL_BACKEND_URL` if set and not empty. Returns whether
    /// the backend url was overridden.
    pub fn apply_env(&mut self) -> bool {
        self.override_backend_url(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn override_backend_url(&mut self, url: Option<String>) -> bool {
        match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                self.backend_url = url;
                true
            }
            None => false,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_level(&self) -> LevelFilter {
        level_from_config(self.log_level.as_deref(), self.debug)
    }

    fn check(&self) -> Result<(), Error> {
        if self.blocks_per_mine == 0 {
            return Err(Error::Config(
                "blocks_per_mine must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn parses_every_field() {
        let config = Config::from_toml(
            r#"
            backend_url = "http://10.0.0.2:8181"
            request_timeout_secs = 5
            blocks_per_mine = 101
            network = "signet"
            log_level = "trace"
            debug = false
            "#,
        )
        .unwrap();
        assert_eq!(config.backend_url, "http://10.0.0.2:8181");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.blocks_per_mine, 101);
        assert_eq!(config.network, Network::Signet);
        assert_eq!(config.log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn rejects_zero_blocks_per_mine() {
        assert!(matches!(
            Config::from_toml("blocks_per_mine = 0"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn empty_env_value_keeps_the_configured_url() {
        let mut config = Config::default();
        assert!(!config.override_backend_url(None));
        assert!(!config.override_backend_url(Some("  ".to_string())));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert!(config.override_backend_url(Some("http://node:8181".to_string())));
        assert_eq!(config.backend_url, "http://node:8181");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::from_file(Path::new("/nonexistent/soul/soul.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
