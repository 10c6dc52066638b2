use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analysis::pipeline::{MAX_HEADLINES, MIN_HEADLINES};
use crate::chart::ChartKind;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HEADLINE_PULSE_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "headline-pulse.json";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup defaults for the request panel and the HTTP client.
///
/// ```json
/// {
///   "default_url": "https://finance.yahoo.com/",
///   "headline_limit": 50,
///   "chart_kind": "bar",
///   "timeout_secs": 30,
///   "user_agent": "headline-pulse/0.1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_url: String,
    pub headline_limit: usize,
    pub chart_kind: ChartKind,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_url: String::new(),
            headline_limit: 50,
            chart_kind: ChartKind::Bar,
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve and load the config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => Some(PathBuf::from(p)),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            }
        };

        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).context("reading config file")?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text).context("parsing config JSON")?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let clamped = self.headline_limit.clamp(MIN_HEADLINES, MAX_HEADLINES);
        if clamped != self.headline_limit {
            log::warn!(
                "headline_limit {} out of range, using {clamped}",
                self.headline_limit
            );
            self.headline_limit = clamped;
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = Self::default().timeout_secs;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").expect("config"), AppConfig::default());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let cfg = AppConfig::from_json(r#"{"chart_kind": "scatter", "headline_limit": 20}"#)
            .expect("config");
        assert_eq!(cfg.chart_kind, ChartKind::Scatter);
        assert_eq!(cfg.headline_limit, 20);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let cfg = AppConfig::from_json(r#"{"headline_limit": 1000, "timeout_secs": 0}"#)
            .expect("config");
        assert_eq!(cfg.headline_limit, MAX_HEADLINES);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn unknown_chart_kind_is_an_error() {
        assert!(AppConfig::from_json(r#"{"chart_kind": "pie"}"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"default_url": "https://example.com/", "headline_limit": 7}}"#)
            .expect("write");

        let cfg = AppConfig::from_file(file.path()).expect("config");
        assert_eq!(cfg.default_url, "https://example.com/");
        assert_eq!(cfg.headline_limit, 7);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(AppConfig::from_file(&dir.path().join("missing.json")).is_err());
    }
}
