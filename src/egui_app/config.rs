use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use std::time::Duration;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration wrapper.
///
/// Reads overrides from the environment:
/// `CLIENT_API_URL`, `SYNC_API_PREFIX`, `SYNC_POLL_INTERVAL_SECS`,
/// `SYNC_REQUEST_TIMEOUT_SECS`.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder().server_url(
            lookup("CLIENT_API_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
        );
        if let Some(prefix) = lookup("SYNC_API_PREFIX") {
            builder = builder.api_prefix(prefix);
        }
        if let Some(secs) = lookup("SYNC_POLL_INTERVAL_SECS") {
            builder = builder.poll_interval(parse_secs("SYNC_POLL_INTERVAL_SECS", &secs)?);
        }
        if let Some(secs) = lookup("SYNC_REQUEST_TIMEOUT_SECS") {
            builder = builder.request_timeout(parse_secs("SYNC_REQUEST_TIMEOUT_SECS", &secs)?);
        }
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint, e.g. `api_url("/health/")`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.server_url(), self.app.api_prefix, path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn poll_interval(&self) -> Duration {
        self.app.poll_interval
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }

    pub fn recent_log_limit(&self) -> usize {
        self.app.recent_log_limit
    }
}

fn parse_secs(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidValue {
            field,
            message: format!("'{}': {}", raw, e),
        })
}
