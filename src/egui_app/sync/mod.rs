//! # Dashboard Sync State
//!
//! Keeps the dashboard's view of the sync engine current.
//!
//! ## Architecture
//!
//! - **Store**: one owned [`DashboardStore`]; the refresh controller is its
//!   only writer and every update swaps a whole snapshot.
//! - **Poller**: [`RefreshController`] runs the repeating fetch cycle and the
//!   guarded manual trigger, with generation-checked teardown.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use syncboard::egui_app::api_client::HttpSyncClient;
//! use syncboard::egui_app::sync::RefreshController;
//! use syncboard::egui_app::Config;
//! use syncboard::shared::SyncType;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let (controller, store) =
//!     RefreshController::new(Arc::new(HttpSyncClient::new(config.clone())?), config.poll_interval());
//! let _handle = controller.start()?;
//!
//! // Force an immediate sync
//! controller.trigger_sync(SyncType::Inventory).await?;
//! println!("{} log rows", store.snapshot().await.logs.len());
//! # Ok(())
//! # }
//! ```

pub mod poller;
pub mod store;

pub use poller::{PollerHandle, RefreshController};
pub use store::{
    Connectivity, CycleState, DashboardSnapshot, DashboardStore, StoreWriter, TriggerOutcome,
};
