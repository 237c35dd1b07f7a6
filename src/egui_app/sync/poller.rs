//! # Refresh Controller
//!
//! Owns the repeating fetch cycle against the sync engine and is the only
//! writer of the [`DashboardStore`](super::store::DashboardStore).
//!
//! ## Refresh cycle
//!
//! `Idle → Fetching → {Settled, Errored}`. Health, logs and mappings are
//! requested concurrently and each result is applied as soon as it arrives, on
//! its own: a failed health check never stops a good log list from landing.
//!
//! ## Manual trigger
//!
//! Only one trigger may be outstanding. A second request is refused with
//! [`TriggerError::AlreadyInFlight`] before anything is sent. A successful
//! trigger runs one refresh cycle straight away.
//!
//! ## Teardown
//!
//! [`PollerHandle`] owns the timer task. Shutting it down (or dropping it)
//! cancels the timer and bumps the generation counter; any response that was
//! still on the wire is dropped on arrival instead of being applied.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use syncboard::egui_app::api_client::HttpSyncClient;
//! use syncboard::egui_app::sync::RefreshController;
//! use syncboard::egui_app::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let api = Arc::new(HttpSyncClient::new(config.clone())?);
//! let (controller, store) = RefreshController::new(api, config.poll_interval());
//! let handle = controller.start()?;
//!
//! let snapshot = store.snapshot().await;
//! println!("connectivity: {:?}", snapshot.connectivity);
//!
//! handle.shutdown();
//! # Ok(())
//! # }
//! ```

use crate::egui_app::api_client::SyncApi;
use crate::egui_app::sync::store::{
    Connectivity, CycleState, DashboardSnapshot, DashboardStore, StoreWriter, TriggerOutcome,
};
use crate::shared::sync_log::{merge_entry, sort_newest_first};
use crate::shared::{PollerError, SyncClientError, SyncLogEntry, SyncType, TriggerError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Drives periodic and on-demand refreshes of the dashboard state
#[derive(Clone)]
pub struct RefreshController {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn SyncApi>,
    writer: StoreWriter,
    interval: Duration,
    /// Bumped on teardown; results tagged with an older value are discarded
    generation: AtomicU64,
    shut_down: AtomicBool,
    running: AtomicBool,
    trigger_in_flight: AtomicBool,
}

/// Clears the trigger guard even if the trigger future is dropped midway
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl RefreshController {
    /// Create a controller together with a read handle on the state it writes
    pub fn new(api: Arc<dyn SyncApi>, interval: Duration) -> (Self, DashboardStore) {
        let (writer, store) = DashboardStore::new();
        let controller = Self {
            inner: Arc::new(Inner {
                api,
                writer,
                interval,
                generation: AtomicU64::new(0),
                shut_down: AtomicBool::new(false),
                running: AtomicBool::new(false),
                trigger_in_flight: AtomicBool::new(false),
            }),
        };
        (controller, store)
    }

    pub fn store(&self) -> DashboardStore {
        self.inner.writer.reader()
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.inner.shut_down.load(Ordering::SeqCst) && self.generation() == generation
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.shut_down.load(Ordering::SeqCst)
    }

    /// Whether the initiating control should be disabled
    pub fn is_trigger_in_flight(&self) -> bool {
        self.inner.trigger_in_flight.load(Ordering::SeqCst)
    }

    /// Apply `f` only if nothing was torn down since `generation` was read
    async fn apply<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&mut DashboardSnapshot),
    {
        if !self.is_current(generation) {
            tracing::debug!("Discarding result from generation {}", generation);
            return false;
        }
        self.inner.writer.update(f).await;
        true
    }

    /// Spawn the repeating refresh task. The first cycle runs immediately.
    pub fn start(&self) -> Result<PollerHandle, PollerError> {
        if self.is_shut_down() {
            return Err(PollerError::ShutDown);
        }
        if self
            .inner
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PollerError::AlreadyRunning);
        }

        let controller = self.clone();
        let task = tokio::spawn(async move {
            controller.poll_loop().await;
        });
        tracing::info!("Started refresh loop every {:?}", self.inner.interval);

        Ok(PollerHandle {
            controller: self.clone(),
            task: Some(task),
        })
    }

    async fn poll_loop(&self) {
        let mut ticker = tokio::time::interval(self.inner.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if self.is_shut_down() {
                break;
            }
            self.refresh_once().await;
        }
    }

    /// Cancel future cycles and discard results still in flight
    pub fn shutdown(&self) {
        if !self.inner.shut_down.swap(true, Ordering::SeqCst) {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            tracing::info!("Refresh controller shut down");
        }
    }

    /// Run one refresh cycle and report how it ended
    pub async fn refresh_once(&self) -> CycleState {
        let generation = self.generation();
        if !self
            .apply(generation, |s| s.cycle = CycleState::Fetching)
            .await
        {
            return CycleState::Idle;
        }

        let api = &self.inner.api;
        let health = async {
            let result = api.get_health().await;
            let ok = result.is_ok();
            self.apply_health(generation, result).await;
            ok
        };
        let logs = async {
            let result = api.get_logs().await;
            let ok = result.is_ok();
            self.apply_logs(generation, result).await;
            ok
        };
        let mappings = async {
            let result = api.get_mappings().await;
            let ok = result.is_ok();
            self.apply_mappings(generation, result).await;
            ok
        };
        let (health_ok, logs_ok, mappings_ok) = tokio::join!(health, logs, mappings);

        let outcome = if health_ok && logs_ok && mappings_ok {
            CycleState::Settled
        } else {
            CycleState::Errored
        };
        let applied = self
            .apply(generation, |s| {
                s.cycle = outcome;
                if outcome == CycleState::Settled {
                    s.last_error = None;
                }
            })
            .await;
        if !applied {
            return CycleState::Idle;
        }

        match outcome {
            CycleState::Settled => tracing::debug!("Refresh cycle settled"),
            _ => tracing::info!(
                health_ok = health_ok,
                logs_ok = logs_ok,
                mappings_ok = mappings_ok,
                "Refresh cycle finished with errors"
            ),
        }
        outcome
    }

    /// Manual retry from the unavailable state
    pub async fn retry(&self) -> CycleState {
        tracing::info!("Retrying connection to sync engine");
        self.refresh_once().await
    }

    async fn apply_health(
        &self,
        generation: u64,
        result: Result<crate::shared::SystemHealth, SyncClientError>,
    ) {
        self.apply(generation, |s| match result {
            Ok(health) => {
                s.health = Some(health);
                s.connectivity = Connectivity::Online;
                s.last_refreshed_at = Some(chrono::Utc::now());
            }
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                let error = e.to_string();
                // Keep the last good snapshot; only say "unavailable" when there is none
                s.connectivity = if s.health.is_some() {
                    Connectivity::Degraded {
                        error: error.clone(),
                    }
                } else {
                    Connectivity::Unavailable {
                        error: error.clone(),
                    }
                };
                s.last_error = Some(error);
            }
        })
        .await;
    }

    async fn apply_logs(
        &self,
        generation: u64,
        result: Result<Vec<SyncLogEntry>, SyncClientError>,
    ) {
        self.apply(generation, |s| match result {
            Ok(mut logs) => {
                sort_newest_first(&mut logs);
                s.logs = logs;
                s.logs_loaded = true;
            }
            Err(e) => {
                tracing::warn!("Fetching logs failed: {}", e);
                s.last_error = Some(e.to_string());
            }
        })
        .await;
    }

    async fn apply_mappings(
        &self,
        generation: u64,
        result: Result<Vec<crate::shared::ProductMapping>, SyncClientError>,
    ) {
        self.apply(generation, |s| match result {
            Ok(mappings) => {
                s.mappings = mappings;
                s.mappings_loaded = true;
            }
            Err(e) => {
                tracing::warn!("Fetching mappings failed: {}", e);
                s.last_error = Some(e.to_string());
            }
        })
        .await;
    }

    /// Ask the engine to start a `kind` sync now.
    ///
    /// Refused without a network call while another trigger is outstanding.
    pub async fn trigger_sync(&self, kind: SyncType) -> Result<SyncLogEntry, TriggerError> {
        if self.is_shut_down() {
            return Err(TriggerError::ShutDown);
        }
        if self
            .inner
            .trigger_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Ignoring {} trigger: another sync is outstanding", kind);
            return Err(TriggerError::AlreadyInFlight);
        }
        let _guard = InFlightGuard(&self.inner.trigger_in_flight);

        let generation = self.generation();
        tracing::info!("Triggering {} sync", kind);

        match self.inner.api.trigger_sync(kind).await {
            Ok(entry) => {
                self.refresh_once().await;
                let started = entry.clone();
                self.apply(generation, move |s| {
                    merge_entry(&mut s.logs, started.clone());
                    s.last_trigger = Some(TriggerOutcome::Started(started));
                })
                .await;
                Ok(entry)
            }
            Err(e) => {
                tracing::warn!("{} sync trigger failed: {}", kind, e);
                let message = format!("Failed to trigger sync: {}", e);
                self.apply(generation, |s| {
                    s.last_trigger = Some(TriggerOutcome::Failed(message));
                })
                .await;
                Err(e.into())
            }
        }
    }
}

/// Owned lifetime of the refresh loop. Dropping it stops the loop.
pub struct PollerHandle {
    controller: RefreshController,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn controller(&self) -> &RefreshController {
        &self.controller
    }

    /// Stop the timer and discard any response still in flight
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.controller.shutdown();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.release();
    }
}
