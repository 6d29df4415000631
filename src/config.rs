//! User preferences for the search request.
//!
//! Preferences come from an optional YAML file; command-line flags override
//! individual values afterwards (see [`Preferences::apply_cli`]).
//!
//! # File format
//!
//! ```yaml
//! search_term: climate
//! section: environment
//! order_by: newest
//! api_key: test
//! connect_timeout_ms: 15000
//! read_timeout_ms: 10000
//! ```
//!
//! Every key is optional.

use crate::cli::Cli;
use crate::error::Result;
use crate::fetcher::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use crate::query::{ALL_SECTIONS, GUARDIAN_SEARCH_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Free text search, sent as `q`.
    pub search_term: String,
    /// Section id such as `technology`, or `all`.
    pub section: String,
    pub order_by: String,
    pub api_key: String,
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            section: ALL_SECTIONS.to_string(),
            order_by: "newest".to_string(),
            api_key: "test".to_string(),
            base_url: GUARDIAN_SEARCH_URL.to_string(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT.as_millis() as u64,
            read_timeout_ms: DEFAULT_READ_TIMEOUT.as_millis() as u64,
        }
    }
}

impl Preferences {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load preferences from `path`; a missing file yields the defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(yaml) => {
                let prefs = Self::from_yaml(&yaml)?;
                info!("Loaded preferences");
                Ok(prefs)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preferences file; using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Override values given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(term) = &cli.search {
            self.search_term = term.clone();
        }
        if let Some(section) = &cli.section {
            self.section = section.clone();
        }
        if let Some(order_by) = &cli.order_by {
            self.order_by = order_by.clone();
        }
        if let Some(api_key) = &cli.api_key {
            self.api_key = api_key.clone();
        }
    }
}

/// `<config dir>/guardian_news/config.yaml`, when a config dir is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let prefs = Preferences::from_yaml("section: technology\nsearch_term: rust\n").unwrap();
        assert_eq!(prefs.section, "technology");
        assert_eq!(prefs.search_term, "rust");
        assert_eq!(prefs.order_by, "newest");
        assert_eq!(prefs.api_key, "test");
        assert_eq!(prefs.connect_timeout(), Duration::from_millis(15_000));
        assert_eq!(prefs.read_timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Preferences::from_yaml("").unwrap(), Preferences::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Preferences::from_yaml("read_timeout_ms: soon").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut prefs = Preferences::from_yaml("section: sport\napi_key: from-file").unwrap();
        let cli = Cli::parse_from(["guardian_news", "--section", "music", "-q", "jazz"]);
        prefs.apply_cli(&cli);
        assert_eq!(prefs.section, "music");
        assert_eq!(prefs.search_term, "jazz");
        assert_eq!(prefs.api_key, "from-file");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&tmp.path().join("nope.yaml")).await.unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn test_load_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "order_by: relevance\n").unwrap();
        let prefs = Preferences::load(&path).await.unwrap();
        assert_eq!(prefs.order_by, "relevance");
    }
}
