//! Sync Log Types
//!
//! A [`SyncLogEntry`] records one synchronization attempt made by the sync
//! engine. Entries are produced remotely and never mutated on the client.
//!
//! # Ordering
//!
//! Entries are rendered newest first. Entries with equal timestamps keep the
//! order in which they arrived, so sorting is always stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a synchronization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncStatus {
    Success,
    Failed,
    Pending,
    Running,
}

impl SyncStatus {
    pub const ALL: [SyncStatus; 4] = [
        SyncStatus::Success,
        SyncStatus::Failed,
        SyncStatus::Pending,
        SyncStatus::Running,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Success => "Success",
            SyncStatus::Failed => "Failed",
            SyncStatus::Pending => "Pending",
            SyncStatus::Running => "Running",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SyncStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sync status: {}", s))
    }
}

/// Which data set a synchronization job moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncType {
    Order,
    Product,
    Inventory,
}

impl SyncType {
    pub const ALL: [SyncType; 3] = [SyncType::Order, SyncType::Product, SyncType::Inventory];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::Order => "Order",
            SyncType::Product => "Product",
            SyncType::Inventory => "Inventory",
        }
    }
}

impl fmt::Display for SyncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synchronization attempt as reported by the sync engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogEntry {
    /// Opaque identifier assigned by the engine
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub status: SyncStatus,
    pub sync_type: SyncType,
    /// Human-readable outcome
    pub message: String,
}

/// Request body for `POST /sync/trigger/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSyncRequest {
    #[serde(rename = "type")]
    pub sync_type: SyncType,
}

/// Sort entries newest first; equal timestamps keep their arrival order.
pub fn sort_newest_first(entries: &mut [SyncLogEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// The `limit` most recent entries of an already sorted log.
pub fn most_recent(entries: &[SyncLogEntry], limit: usize) -> &[SyncLogEntry] {
    &entries[..entries.len().min(limit)]
}

/// Put a freshly created entry into a sorted log unless it is already there.
pub fn merge_entry(entries: &mut Vec<SyncLogEntry>, entry: SyncLogEntry) {
    if entries.iter().any(|existing| existing.id == entry.id) {
        return;
    }
    entries.push(entry);
    sort_newest_first(entries);
}
