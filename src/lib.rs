//! SyncBoard - Main Library
//!
//! SyncBoard is the operator console for an Odoo ERP / eBay synchronization
//! engine. It polls the engine's HTTP API, keeps a cached dashboard snapshot,
//! and lets an operator trigger syncs, browse logs and test credentials.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and errors shared by every layer
//!   - Sync log entries, system health, product mappings, credentials
//!   - Application config and its validation
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP client for the sync engine
//!   - Background refresh controller and dashboard store
//!   - Log filtering and credential testing
//!   - Views
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use syncboard::egui_app::{AppState, Config, HttpSyncClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let config = Config::from_env()?;
//! let client = HttpSyncClient::new(config.clone())?;
//! let mut state = AppState::new(config, runtime.handle().clone(), Arc::new(client));
//! state.start_polling()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Poller**: runs on tokio and publishes whole `Arc` snapshots through a `RwLock`
//! - **UI**: egui is single-threaded immediate mode; it only reads snapshots and
//!   drains `std::sync::mpsc` channels once per frame
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, with `thiserror` types in `shared::error`
//! - Network failures never panic the UI; they surface as dashboard state

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
