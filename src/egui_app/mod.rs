//! egui Native Desktop App Module
//!
//! Operator dashboard for the Odoo / eBay sync engine, built with egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Server URL, API prefix and polling settings from the environment
//! - **`api_client`** - [`api_client::SyncApi`] trait and its reqwest implementation
//! - **`sync`** - Dashboard store and the background refresh controller
//! - **`logs`** - Log filter engine for the logs tab
//! - **`settings`** - Credential form and its test flow
//! - **`state`** - [`AppState`], the bridge between the tokio runtime and the UI thread
//! - **`views`** - Tab rendering
//! - **`theme`** - Colors and frames
//! - **`main`** - Binary entry point
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── api_client.rs   - Sync engine HTTP client
//! ├── types.rs        - Tab enum
//! ├── sync/           - Store + poller
//! ├── logs/           - Log filtering
//! ├── settings/       - Credential form
//! ├── state/          - AppState
//! ├── views/          - Dashboard, mappings, logs, settings tabs
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the dashboard:
//! // CLIENT_API_URL=http://127.0.0.1:8000 cargo run --bin syncboard
//! ```

pub mod api_client;
pub mod config;
pub mod logs;
pub mod settings;
pub mod state;
pub mod sync;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api_client::{HttpSyncClient, SyncApi};
pub use config::Config;
pub use state::AppState;
pub use types::AppView;
