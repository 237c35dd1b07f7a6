//! Sync Engine API Client
//!
//! [`SyncApi`] is the wire contract with the sync engine: one async operation
//! per resource. [`HttpSyncClient`] implements it over HTTP/JSON with reqwest.
//!
//! Every network-origin failure is turned into a [`SyncClientError`] here, so
//! nothing untyped reaches the refresh controller or the views.

use crate::egui_app::config::Config;
use crate::shared::{
    CredentialTestResult, OdooConfig, ProductMapping, SyncClientError, SyncLogEntry, SyncType,
    SystemHealth, TriggerSyncRequest,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Acknowledgement returned by the save endpoint. Its shape is up to the engine.
pub type SaveAck = serde_json::Value;

/// Operations offered by the sync engine.
#[async_trait]
pub trait SyncApi: Send + Sync {
    async fn get_health(&self) -> Result<SystemHealth, SyncClientError>;

    /// An empty list means no history yet.
    async fn get_logs(&self) -> Result<Vec<SyncLogEntry>, SyncClientError>;

    async fn get_mappings(&self) -> Result<Vec<ProductMapping>, SyncClientError>;

    /// Ask the engine to start a job now. Without a returned entry the caller
    /// must not assume the job started.
    async fn trigger_sync(&self, kind: SyncType) -> Result<SyncLogEntry, SyncClientError>;

    /// Only fails when the round trip itself fails. Rejections, non-2xx answers
    /// and malformed bodies come back as `success: false`.
    async fn test_credentials(
        &self,
        config: &OdooConfig,
    ) -> Result<CredentialTestResult, SyncClientError>;

    async fn save_odoo_config(&self, config: &OdooConfig) -> Result<SaveAck, SyncClientError>;
}

/// reqwest-backed [`SyncApi`]
#[derive(Debug, Clone)]
pub struct HttpSyncClient {
    config: Config,
    client: Client,
}

impl HttpSyncClient {
    pub fn new(config: Config) -> Result<Self, SyncClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SyncClientError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SyncClientError> {
        let url = self.config.api_url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("GET {} failed: {}", url, e);
            SyncClientError::from(e)
        })?;
        decode_body(path, ensure_success(path, response).await?).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, SyncClientError> {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);
        self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::warn!("POST {} failed: {}", url, e);
            SyncClientError::from(e)
        })
    }
}

/// Turn a non-2xx response into a transport error carrying the body text.
async fn ensure_success(path: &str, response: Response) -> Result<Response, SyncClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());
    tracing::warn!("{} returned {}: {}", path, status, error_text);
    Err(SyncClientError::status(status.as_u16(), error_text))
}

async fn decode_body<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, SyncClientError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!("{} returned an unexpected body: {}", path, e);
        SyncClientError::decode(format!("{}: {}", path, e))
    })
}

#[async_trait]
impl SyncApi for HttpSyncClient {
    async fn get_health(&self) -> Result<SystemHealth, SyncClientError> {
        self.get_json("/health/").await
    }

    async fn get_logs(&self) -> Result<Vec<SyncLogEntry>, SyncClientError> {
        self.get_json("/logs/").await
    }

    async fn get_mappings(&self) -> Result<Vec<ProductMapping>, SyncClientError> {
        self.get_json("/mappings/").await
    }

    async fn trigger_sync(&self, kind: SyncType) -> Result<SyncLogEntry, SyncClientError> {
        let path = "/sync/trigger/";
        let response = self
            .post_json(path, &TriggerSyncRequest { sync_type: kind })
            .await?;
        let entry: SyncLogEntry = decode_body(path, ensure_success(path, response).await?).await?;
        tracing::info!("Engine accepted {} sync as log {}", kind, entry.id);
        Ok(entry)
    }

    async fn test_credentials(
        &self,
        config: &OdooConfig,
    ) -> Result<CredentialTestResult, SyncClientError> {
        let path = "/config/test-odoo/";
        let response = self.post_json(path, config).await?;

        let response = match ensure_success(path, response).await {
            Ok(response) => response,
            Err(e) => return Ok(CredentialTestResult::rejected(e.to_string())),
        };

        match decode_body::<CredentialTestResult>(path, response).await {
            Ok(result) => Ok(result),
            Err(e @ SyncClientError::Decode { .. }) => {
                Ok(CredentialTestResult::rejected(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn save_odoo_config(&self, config: &OdooConfig) -> Result<SaveAck, SyncClientError> {
        let path = "/config/odoo/";
        let response = self.post_json(path, config).await?;
        let response = ensure_success(path, response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(SaveAck::Null);
        }
        serde_json::from_str(&text).map_err(|e| SyncClientError::decode(format!("{}: {}", path, e)))
    }
}
