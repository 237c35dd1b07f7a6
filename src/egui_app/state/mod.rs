use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::egui_app::api_client::{SaveAck, SyncApi};
use crate::egui_app::logs::LogQuery;
use crate::egui_app::settings::{CredentialForm, TestStart, TestTicket};
use crate::egui_app::sync::{DashboardSnapshot, DashboardStore, PollerHandle, RefreshController};
use crate::egui_app::{AppView, Config};
use crate::shared::{CredentialTestResult, EbayConfig, OdooConfig, PollerError, SyncClientError, SyncType};

type TestReceiver = Receiver<Result<CredentialTestResult, SyncClientError>>;

/// Central application state shared across egui views.
///
/// Views read [`DashboardSnapshot`]s and call the action methods here; they
/// never write dashboard data themselves. Remote work runs on the tokio
/// runtime and reports back through the store or a channel polled each frame.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,
    /// Latest published dashboard state
    pub snapshot: Arc<DashboardSnapshot>,
    pub log_query: LogQuery,
    pub odoo_form: CredentialForm,
    pub ebay_config: EbayConfig,
    /// Outcome of the last "Save Configuration" click
    pub save_status: Option<Result<String, String>>,
    pub saving: bool,

    runtime: Handle,
    api: Arc<dyn SyncApi>,
    controller: RefreshController,
    store: DashboardStore,
    poller: Option<PollerHandle>,
    test_result: Option<(TestTicket, TestReceiver)>,
    save_result: Option<Receiver<Result<SaveAck, SyncClientError>>>,
}

impl AppState {
    pub fn new(config: Config, runtime: Handle, api: Arc<dyn SyncApi>) -> Self {
        let (controller, store) = RefreshController::new(Arc::clone(&api), config.poll_interval());
        let snapshot = store
            .try_snapshot()
            .unwrap_or_else(|| Arc::new(DashboardSnapshot::default()));

        Self {
            config,
            current_view: AppView::Dashboard,
            snapshot,
            log_query: LogQuery::default(),
            odoo_form: CredentialForm::new(OdooConfig::default()),
            ebay_config: EbayConfig::default(),
            save_status: None,
            saving: false,
            runtime,
            api,
            controller,
            store,
            poller: None,
            test_result: None,
            save_result: None,
        }
    }

    /// Start polling. The loop lives as long as this state (or until `shutdown`).
    pub fn start_polling(&mut self) -> Result<(), PollerError> {
        if self.poller.is_some() {
            return Ok(());
        }
        let _guard = self.runtime.enter();
        self.poller = Some(self.controller.start()?);
        Ok(())
    }

    pub fn shutdown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.shutdown();
        }
    }

    /// Pick up everything that finished since the last frame
    pub fn poll_background(&mut self) {
        if let Some(snapshot) = self.store.try_snapshot() {
            self.snapshot = snapshot;
        }
        self.check_test_result();
        self.check_save_result();
    }

    pub fn is_trigger_in_flight(&self) -> bool {
        self.controller.is_trigger_in_flight()
    }

    pub fn trigger_sync(&mut self, kind: SyncType) {
        if self.controller.is_trigger_in_flight() {
            return;
        }
        let controller = self.controller.clone();
        self.runtime.spawn(async move {
            // The outcome is published to the store as `last_trigger`
            let _ = controller.trigger_sync(kind).await;
        });
    }

    /// Manual retry from the "System Unavailable" screen
    pub fn retry(&mut self) {
        let controller = self.controller.clone();
        self.runtime.spawn(async move {
            controller.retry().await;
        });
    }

    pub fn refresh_now(&mut self) {
        let controller = self.controller.clone();
        self.runtime.spawn(async move {
            controller.refresh_once().await;
        });
    }

    pub fn test_credentials(&mut self) {
        let pending = match self.odoo_form.begin_test() {
            TestStart::Pending(pending) => pending,
            TestStart::Settled | TestStart::Busy => return,
        };

        let (tx, rx) = channel();
        let api = Arc::clone(&self.api);
        let config = pending.config;
        self.runtime.spawn(async move {
            let _ = tx.send(api.test_credentials(&config).await);
        });
        self.test_result = Some((pending.ticket, rx));
    }

    fn check_test_result(&mut self) {
        let Some((ticket, rx)) = self.test_result.as_ref() else {
            return;
        };
        if let Ok(outcome) = rx.try_recv() {
            let ticket = *ticket;
            self.test_result = None;
            self.odoo_form.complete_test(ticket, outcome);
        }
    }

    pub fn save_credentials(&mut self) {
        if self.saving {
            return;
        }
        self.saving = true;
        self.save_status = None;

        let (tx, rx) = channel();
        let api = Arc::clone(&self.api);
        let config = self.odoo_form.config().clone();
        self.runtime.spawn(async move {
            let _ = tx.send(api.save_odoo_config(&config).await);
        });
        self.save_result = Some(rx);
    }

    fn check_save_result(&mut self) {
        let Some(rx) = self.save_result.as_ref() else {
            return;
        };
        if let Ok(result) = rx.try_recv() {
            self.save_result = None;
            self.saving = false;
            self.save_status = Some(match result {
                Ok(_) => Ok("Configuration saved.".to_string()),
                Err(e) => {
                    tracing::warn!("Saving configuration failed: {}", e);
                    Err(format!("Failed to save configuration: {}", e))
                }
            });
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
