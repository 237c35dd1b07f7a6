//! Shared Module
//!
//! This module contains the types exchanged with the sync engine and the error
//! and configuration types used by every other part of the crate.
//!
//! # Overview
//!
//! The shared module is UI-agnostic. All wire types serialize to the camelCase
//! JSON the sync engine speaks, with ISO-8601 timestamps parsed into
//! `chrono::DateTime<Utc>` at the boundary.

/// Sync log entries and ordering rules
pub mod sync_log;

/// Backend health snapshot
pub mod health;

/// ERP product to marketplace SKU mappings
pub mod mapping;

/// Credential bundles and test results
pub mod credentials;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use sync_log::{SyncLogEntry, SyncStatus, SyncType, TriggerSyncRequest};
pub use health::SystemHealth;
pub use mapping::{MappingStatus, MappingSummary, ProductMapping};
pub use credentials::{CredentialTestResult, EbayConfig, OdooConfig};
pub use error::{PollerError, SharedError, SyncClientError, TriggerError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
