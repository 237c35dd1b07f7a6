//! Application configuration module
//!
//! Provides configuration types for the dashboard core: where the sync engine
//! lives and how often it is polled.

use std::time::Duration;
use thiserror::Error;

/// Default API prefix in front of every resource path
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Default refresh interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of log rows shown on the dashboard summary
pub const DEFAULT_RECENT_LOG_LIMIT: usize = 5;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Path prefix of the sync-engine API, e.g. `/api`
    pub api_prefix: String,
    /// Interval between background refresh cycles
    pub poll_interval: Duration,
    /// Timeout applied to each remote call
    pub request_timeout: Duration,
    /// Rows shown in "Recent Sync Activity"
    pub recent_log_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            recent_log_limit: DEFAULT_RECENT_LOG_LIMIT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "api_prefix",
                message: format!("'{}' must start with '/'", self.api_prefix),
            });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    api_prefix: Option<String>,
    poll_interval: Option<Duration>,
    request_timeout: Option<Duration>,
    recent_log_limit: Option<usize>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the API prefix
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn recent_log_limit(mut self, limit: usize) -> Self {
        self.recent_log_limit = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string()),
            api_prefix: self
                .api_prefix
                .map(|prefix| prefix.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_prefix),
            poll_interval: self.poll_interval.unwrap_or(defaults.poll_interval),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            recent_log_limit: self.recent_log_limit.unwrap_or(defaults.recent_log_limit),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}
