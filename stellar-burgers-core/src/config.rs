//! Configuration management
//!
//! Settings are read once, from an optional `settings.json` in the
//! settings directory, then overridden by environment variables:
//! ```json
//! {
//!   "api": { "baseUrl": "https://stellarburgers.nomoreparties.site/", "basePath": "api/" },
//!   "transport": { "timeoutSecs": 30 },
//!   "logging": { "requests": false, "responses": false }
//! }
//! ```
//! The resulting [`Config`] is never mutated by the clients.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::result::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site/";
pub const DEFAULT_BASE_PATH: &str = "api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const BASE_URL_ENV: &str = "STELLAR_BURGERS_BASE_URL";
pub const BASE_PATH_ENV: &str = "STELLAR_BURGERS_BASE_PATH";
pub const TIMEOUT_ENV: &str = "STELLAR_BURGERS_TIMEOUT_SECS";
pub const LOG_REQUESTS_ENV: &str = "STELLAR_BURGERS_LOG_REQUESTS";
pub const LOG_RESPONSES_ENV: &str = "STELLAR_BURGERS_LOG_RESPONSES";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(default)]
    transport: TransportSettings,
    #[serde(default)]
    logging: LoggingSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransportSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoggingSettings {
    #[serde(default)]
    requests: bool,
    #[serde(default)]
    responses: bool,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service root, always ending with `/`
    pub base_url: Url,
    /// Prefix for every endpoint path, e.g. `api/`
    pub base_path: String,
    /// Per-request timeout; `None` disables it
    pub timeout: Option<Duration>,
    pub content_type: String,
    /// Log request bodies at debug level
    pub log_requests: bool,
    /// Log response bodies at debug level
    pub log_responses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            content_type: JSON_CONTENT_TYPE.to_string(),
            log_requests: false,
            log_responses: false,
        }
    }
}

impl Config {
    /// Load config from a settings directory, then apply env overrides
    ///
    /// A missing settings file is not an error; a malformed one is.
    pub fn load(settings_dir: &Path) -> Result<Self> {
        let raw = read_settings(&settings_dir.join(SETTINGS_FILE))?;

        let mut config = Self::default();
        if let Some(base_url) = raw.api.base_url.as_deref() {
            config.base_url = parse_base_url(base_url)?;
        }
        if let Some(base_path) = raw.api.base_path.as_deref() {
            config.base_path = normalize_base_path(base_path);
        }
        if let Some(secs) = raw.transport.timeout_secs {
            config.timeout = timeout_from_secs(secs);
        }
        config.log_requests = raw.logging.requests;
        config.log_responses = raw.logging.responses;

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults plus environment overrides, no settings file
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = parse_base_url(&base_url)?;
        }
        if let Some(base_path) = lookup(BASE_PATH_ENV) {
            self.base_path = normalize_base_path(&base_path);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_ENV, raw
                ))
            })?;
            self.timeout = timeout_from_secs(secs);
        }
        if let Some(flag) = lookup(LOG_REQUESTS_ENV).as_deref().and_then(parse_flag) {
            self.log_requests = flag;
        }
        if let Some(flag) = lookup(LOG_RESPONSES_ENV).as_deref().and_then(parse_flag) {
            self.log_responses = flag;
        }
        Ok(())
    }

    /// Save managed fields, preserving keys this crate does not manage
    ///
    /// Fails without writing when the existing file cannot be parsed.
    pub fn save(&self, settings_dir: &Path) -> Result<()> {
        let settings_path = settings_dir.join(SETTINGS_FILE);

        let mut settings = read_settings(&settings_path)?;

        settings.api.base_url = Some(self.base_url.to_string());
        settings.api.base_path = Some(self.base_path.clone());
        settings.transport.timeout_secs = Some(self.timeout.map_or(0, |t| t.as_secs()));
        settings.logging.requests = self.log_requests;
        settings.logging.responses = self.log_responses;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Point the config at another server (mock servers, staging)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_body_logging(mut self, requests: bool, responses: bool) -> Self {
        self.log_requests = requests;
        self.log_responses = responses;
        self
    }

    /// Root all endpoint paths are resolved against
    pub fn api_root(&self) -> Result<Url> {
        self.base_url
            .join(&self.base_path)
            .map_err(|e| Error::config(format!("Invalid base path '{}': {}", self.base_path, e)))
    }
}

/// Parsed settings file, or defaults when it does not exist
fn read_settings(settings_path: &Path) -> Result<SettingsFile> {
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(settings_path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config(format!("Invalid {}: {}", settings_path.display(), e)))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    // Url::join drops the last segment unless the base ends with a slash
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "Base URL must use http or https, got '{}'",
            other
        ))),
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}
