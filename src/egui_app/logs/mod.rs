//! Sync log querying for the logs view.

pub mod filter;

pub use filter::{filter_logs, LogQuery, StatusFilter};
