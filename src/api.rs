use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

use crate::logic::formatting::normalize_field;

/// One meter reading as published by the upstream producer.
///
/// Every field is normalized while deserializing: the `"Not found"`
/// sentinel, empty strings and other falsy JSON values all become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MeterSnapshot {
    #[serde(default, deserialize_with = "deserialize_field")]
    pub remaining_balance: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub reading_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub last_recharge_amount: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub last_recharge_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field")]
    pub timestamp: Option<String>,
}

/// Accept strings, numbers and booleans; treat falsy values as absent
fn deserialize_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => Some(s),
        // Arrays and objects have no sensible single-line rendering
        Some(other) => Some(other.to_string()),
    };
    Ok(normalize_field(text.as_deref()))
}

/// Parse a response body. A literal `null` payload means "no data".
pub fn parse_snapshot(body: &str) -> Result<Option<MeterSnapshot>> {
    let snapshot: Option<MeterSnapshot> =
        serde_json::from_str(body).context("Failed to parse meter data")?;
    Ok(snapshot)
}

/// A response that is neither a success nor rejected by reqwest
/// (3xx responses left unfollowed)
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Anything that can produce the latest meter snapshot
pub trait SnapshotSource {
    fn fetch(&self) -> impl Future<Output = Result<Option<MeterSnapshot>>> + Send;

    /// Human-readable location, shown in the status bar
    fn describe(&self) -> String;
}

/// Unauthenticated GET against a fixed URL
#[derive(Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    /// Resolve `path` relative to `base_url`
    pub fn from_base(base_url: &str, path: &str) -> Self {
        Self::new(join_url(base_url, path))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Option<MeterSnapshot>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch meter data")?;

        let response = response
            .error_for_status()
            .context("Meter data request rejected")?;

        // error_for_status only covers 4xx/5xx
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read meter data response")?;

        parse_snapshot(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the snapshot from a file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    async fn fetch(&self) -> Result<Option<MeterSnapshot>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        parse_snapshot(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Source selected from configuration
#[derive(Clone)]
pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
}

impl DataSource {
    /// `http(s)://` locations are fetched verbatim; anything else is a path,
    /// resolved against `base_url` when one is configured.
    pub fn resolve(base_url: Option<&str>, location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            return DataSource::Http(HttpSource::new(location.to_string()));
        }

        match base_url {
            Some(base) => DataSource::Http(HttpSource::from_base(base, location)),
            None => DataSource::File(FileSource::new(location)),
        }
    }
}

impl SnapshotSource for DataSource {
    async fn fetch(&self) -> Result<Option<MeterSnapshot>> {
        match self {
            DataSource::Http(source) => source.fetch().await,
            DataSource::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Http(source) => source.describe(),
            DataSource::File(source) => source.describe(),
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
