use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DataSource;
use crate::logic::schedule::DEFAULT_POLL_INTERVAL;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server root; when unset `data_source` is a local file
    pub base_url: Option<String>,
    /// Resource path relative to `base_url`, a file path, or a full URL
    pub data_source: String,
    pub poll_interval_secs: u64,
    pub prefs_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            data_source: default_data_source(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            prefs_path: None,
        }
    }
}

fn default_data_source() -> String {
    "data.json".to_string()
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Load from the discovered file, or defaults when there is none
    pub fn load(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        match get_config_path(cli_path)? {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Poll period, never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::resolve(self.base_url.as_deref(), &self.data_source)
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit `--config` path must exist. Otherwise the platform config
/// directory is tried, then `./config.yaml`; `None` means run on defaults.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("meterdash").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
