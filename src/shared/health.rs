//! Health snapshot of the sync engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend liveness and queue depth, as reported by `GET /health/`.
///
/// A fresh snapshot always replaces the previous one; fields are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    /// Whether the engine can reach its message broker
    pub redis_connected: bool,
    /// Size of the worker pool
    pub celery_workers_active: u32,
    /// `None` when no sync has ever succeeded
    pub last_successful_sync: Option<DateTime<Utc>>,
    pub pending_tasks: u64,
}

impl SystemHealth {
    /// Broker reachable and at least one worker consuming jobs
    pub fn is_operational(&self) -> bool {
        self.redis_connected && self.celery_workers_active > 0
    }
}
