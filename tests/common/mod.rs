//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Sync log and health fixtures
//! - A scriptable in-memory `SyncApi`
//! - wiremock helpers standing in for the sync engine
//! - Custom assertion macros

pub mod mock_engine;

// Re-export commonly used utilities
pub use fake_api::*;
pub use fixtures::*;
pub use mock_engine::*;
