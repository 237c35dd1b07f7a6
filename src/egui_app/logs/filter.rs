//! Log Filter Engine
//!
//! A pure query over the cached sync log: status filter AND case-insensitive
//! search over the message and sync type. Re-run on every keystroke, so it
//! never touches the network or the store.

use crate::shared::{SyncLogEntry, SyncStatus};
use std::fmt;
use std::str::FromStr;

/// Status constraint selected in the log view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SyncStatus),
}

impl StatusFilter {
    /// Choices in the order the status dropdown lists them
    pub fn options() -> impl Iterator<Item = StatusFilter> {
        std::iter::once(StatusFilter::All).chain(SyncStatus::ALL.into_iter().map(StatusFilter::Only))
    }

    pub fn matches(&self, status: SyncStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<SyncStatus>().map(StatusFilter::Only)
    }
}

/// Entries passing both predicates, in their original order.
pub fn filter_logs<'a>(
    logs: &'a [SyncLogEntry],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a SyncLogEntry> {
    let needle = search.to_lowercase();
    logs.iter()
        .filter(|entry| status.matches(entry.status) && matches_search(entry, &needle))
        .collect()
}

/// `needle` must already be lowercase; empty matches everything.
fn matches_search(entry: &SyncLogEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.message.to_lowercase().contains(needle)
        || entry.sync_type.as_str().to_lowercase().contains(needle)
}

/// Filter inputs held by the log view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl LogQuery {
    pub fn apply<'a>(&self, logs: &'a [SyncLogEntry]) -> Vec<&'a SyncLogEntry> {
        filter_logs(logs, self.status, &self.search)
    }

    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || !self.search.is_empty()
    }
}
