//! Client configuration
//!
//! Values come from an optional `spotify-client.toml` in the working
//! directory, overridden by `SPOTIFY_CLIENT_*` environment variables
//! (`SPOTIFY_CLIENT_API_BASE`, `SPOTIFY_CLIENT_TIMEOUT_SECS`, ...).

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;

const CONFIG_FILE: &str = "spotify-client";
const ENV_PREFIX: &str = "SPOTIFY_CLIENT";
const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_SESSION_FILE: &str = ".cache/session.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server origin, e.g. `https://api.example.com`.
    pub api_base: String,
    pub api_version: String,
    /// Transport timeout. Unset means whatever reqwest does by default.
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: "v1".to_string(),
            timeout_secs: None,
            user_agent: None,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// `{api_base}/api/{api_version}`, with the base normalized first.
    pub fn api_root(&self) -> Result<Url, ApiError> {
        let base = normalize_base(&self.api_base);
        let version = self.api_version.trim_matches('/');
        let root = format!("{base}/api/{version}");
        Url::parse(&root).map_err(|e| ApiError::InvalidRequest(format!("bad API base {root}: {e}")))
    }
}

/// Users tend to write `localhost:3000` or leave a trailing slash.
fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if normalized != raw {
        tracing::debug!(from = raw, to = %normalized, "Normalized API base URL");
    }
    normalized
}
