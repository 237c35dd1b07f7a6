//! Credential bundles for the two sides of the pipeline.
//!
//! These live only in transient form state. Saving goes through the sync
//! engine; nothing here touches disk.

use crate::shared::error::SharedError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ERP connection settings, sent as-is to `/config/test-odoo/` and `/config/odoo/`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OdooConfig {
    pub url: String,
    pub db_name: String,
    pub username: String,
    pub api_key: String,
}

impl OdooConfig {
    /// Format checks that can fail without asking the server.
    ///
    /// A bundle that fails here can never test successfully.
    pub fn preflight(&self) -> Result<(), SharedError> {
        if !self.url.starts_with("http") {
            return Err(SharedError::validation(
                "url",
                "Connection Failed: Invalid URL format (must start with http:// or https://).",
            ));
        }
        if self.db_name.trim().is_empty() || self.username.trim().is_empty() {
            return Err(SharedError::validation(
                "dbName",
                "Connection Failed: Database name and Username are required.",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for OdooConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdooConfig")
            .field("url", &self.url)
            .field("db_name", &self.db_name)
            .field("username", &self.username)
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

/// Marketplace API credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EbayConfig {
    pub app_id: String,
    pub cert_id: String,
    pub user_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for EbayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EbayConfig")
            .field("app_id", &self.app_id)
            .field("cert_id", &redact(&self.cert_id))
            .field("user_token", &redact(&self.user_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "***"
    }
}

/// Result of a credential round trip. A rejection is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialTestResult {
    pub success: bool,
    pub message: String,
}

impl CredentialTestResult {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
