//! # Dashboard Store
//!
//! The single state container behind every dashboard view.
//!
//! ## Access rules
//!
//! - [`StoreWriter`] is created once and handed to the refresh controller. It is
//!   not `Clone`, so the controller is the only writer.
//! - [`DashboardStore`] is a cheap, cloneable read handle for views and the log
//!   filter engine.
//! - Every update builds a new [`DashboardSnapshot`] and swaps the `Arc`; a
//!   reader never observes a half-applied cycle.

use crate::shared::mapping::MappingSummary;
use crate::shared::sync_log::most_recent;
use crate::shared::{ProductMapping, SyncLogEntry, SystemHealth};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Reachability of the sync engine as seen by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Nothing has been fetched yet
    #[default]
    Connecting,
    /// The latest health check succeeded
    Online,
    /// The latest health check failed; the last good snapshot is still shown
    Degraded { error: String },
    /// No health snapshot was ever received
    Unavailable { error: String },
}

/// Phase of the most recent refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    Fetching,
    Settled,
    Errored,
}

/// Result of the latest manual trigger, kept for operator feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Started(SyncLogEntry),
    Failed(String),
}

/// Everything the views render, replaced wholesale on every update
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Last known-good health snapshot
    pub health: Option<SystemHealth>,
    /// Sync log, newest first
    pub logs: Vec<SyncLogEntry>,
    pub logs_loaded: bool,
    pub mappings: Vec<ProductMapping>,
    pub mappings_loaded: bool,
    pub connectivity: Connectivity,
    pub cycle: CycleState,
    /// Errors from the latest cycle, if any
    pub last_error: Option<String>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub last_trigger: Option<TriggerOutcome>,
}

impl DashboardSnapshot {
    pub fn recent_logs(&self, limit: usize) -> &[SyncLogEntry] {
        most_recent(&self.logs, limit)
    }

    pub fn mapping_summary(&self) -> MappingSummary {
        MappingSummary::from_mappings(&self.mappings)
    }

    /// The "System Unavailable" screen replaces every stats card
    pub fn is_unavailable(&self) -> bool {
        matches!(self.connectivity, Connectivity::Unavailable { .. })
    }
}

type Shared = Arc<RwLock<Arc<DashboardSnapshot>>>;

/// Read handle on the dashboard state
#[derive(Debug, Clone)]
pub struct DashboardStore {
    inner: Shared,
}

impl DashboardStore {
    /// Create the store, returning its only writer and a reader
    pub fn new() -> (StoreWriter, DashboardStore) {
        let inner: Shared = Arc::new(RwLock::new(Arc::new(DashboardSnapshot::default())));
        (
            StoreWriter {
                inner: Arc::clone(&inner),
            },
            DashboardStore { inner },
        )
    }

    pub async fn snapshot(&self) -> Arc<DashboardSnapshot> {
        Arc::clone(&*self.inner.read().await)
    }

    /// Non-blocking read for the UI thread; `None` only while a swap is in progress
    pub fn try_snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.inner.try_read().ok().map(|guard| Arc::clone(&*guard))
    }
}

/// Sole write handle on the dashboard state
#[derive(Debug)]
pub struct StoreWriter {
    inner: Shared,
}

impl StoreWriter {
    /// Derive the next snapshot from the current one and publish it
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut DashboardSnapshot),
    {
        let mut guard = self.inner.write().await;
        let mut next = DashboardSnapshot::clone(&guard);
        f(&mut next);
        *guard = Arc::new(next);
    }

    pub fn reader(&self) -> DashboardStore {
        DashboardStore {
            inner: Arc::clone(&self.inner),
        }
    }
}
