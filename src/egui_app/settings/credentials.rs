//! Credential Validation Flow
//!
//! State machine behind the "Test Connection" button of the Odoo settings card.
//!
//! - Editing any field clears a shown result, so a stale success is never
//!   displayed next to credentials that were not tested.
//! - `Testing` excludes showing any previous result.
//! - A transport failure becomes `Tested { success: false, .. }`; nothing
//!   propagates to the view.
//! - Saving is a separate action and never changes the test state.
//!
//! The flow is split into [`CredentialForm::begin_test`] and
//! [`CredentialForm::complete_test`] so the UI thread can hand the round trip
//! to a background task; [`CredentialForm::run_test`] does both in one call.

use crate::egui_app::api_client::{SaveAck, SyncApi};
use crate::shared::{CredentialTestResult, OdooConfig, SyncClientError};

/// What the form shows next to the test button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestState {
    #[default]
    Idle,
    Testing,
    Tested { success: bool, message: String },
}

/// Editable fields of the Odoo card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Url,
    DbName,
    Username,
    ApiKey,
}

impl CredentialField {
    pub const ALL: [CredentialField; 4] = [
        CredentialField::Url,
        CredentialField::DbName,
        CredentialField::Username,
        CredentialField::ApiKey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::Url => "Server URL",
            CredentialField::DbName => "Database Name",
            CredentialField::Username => "Username",
            CredentialField::ApiKey => "API Key",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, CredentialField::ApiKey)
    }
}

/// Identifies the edit state a test was started against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestTicket {
    edit_generation: u64,
}

/// A round trip the caller still has to perform
#[derive(Debug, Clone)]
pub struct PendingTest {
    pub ticket: TestTicket,
    pub config: OdooConfig,
}

/// Result of asking the form to start a test
#[derive(Debug, Clone)]
pub enum TestStart {
    /// Send `config` to the engine and report back with the ticket
    Pending(PendingTest),
    /// Pre-flight rejected the credentials; the result is already shown
    Settled,
    /// A test is already running
    Busy,
}

/// Transient Odoo credential form
#[derive(Debug, Clone, Default)]
pub struct CredentialForm {
    config: OdooConfig,
    state: TestState,
    edit_generation: u64,
}

impl CredentialForm {
    pub fn new(config: OdooConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &OdooConfig {
        &self.config
    }

    pub fn state(&self) -> &TestState {
        &self.state
    }

    pub fn is_testing(&self) -> bool {
        self.state == TestState::Testing
    }

    pub fn field(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Url => &self.config.url,
            CredentialField::DbName => &self.config.db_name,
            CredentialField::Username => &self.config.username,
            CredentialField::ApiKey => &self.config.api_key,
        }
    }

    /// Edit one field. Any shown or pending result is invalidated.
    pub fn set_field(&mut self, field: CredentialField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            CredentialField::Url => &mut self.config.url,
            CredentialField::DbName => &mut self.config.db_name,
            CredentialField::Username => &mut self.config.username,
            CredentialField::ApiKey => &mut self.config.api_key,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        self.edit_generation += 1;
        self.state = TestState::Idle;
    }

    pub fn begin_test(&mut self) -> TestStart {
        if self.is_testing() {
            return TestStart::Busy;
        }
        if let Err(e) = self.config.preflight() {
            tracing::debug!("Credential pre-flight failed: {}", e);
            self.state = TestState::Tested {
                success: false,
                message: e.message().to_string(),
            };
            return TestStart::Settled;
        }
        self.state = TestState::Testing;
        TestStart::Pending(PendingTest {
            ticket: TestTicket {
                edit_generation: self.edit_generation,
            },
            config: self.config.clone(),
        })
    }

    /// Record the outcome of a round trip. Returns `false` when the form was
    /// edited after the test started and the outcome was dropped.
    pub fn complete_test(
        &mut self,
        ticket: TestTicket,
        outcome: Result<CredentialTestResult, SyncClientError>,
    ) -> bool {
        if ticket.edit_generation != self.edit_generation || !self.is_testing() {
            tracing::debug!("Dropping credential test result for edited form");
            return false;
        }
        self.state = match outcome {
            Ok(result) => TestState::Tested {
                success: result.success,
                message: result.message,
            },
            Err(e) => {
                tracing::warn!("Credential test round trip failed: {}", e);
                TestState::Tested {
                    success: false,
                    message: format!("Network error connecting to API: {}", e),
                }
            }
        };
        true
    }

    /// Pre-flight, then exactly one `test_credentials` call
    pub async fn run_test(&mut self, api: &dyn SyncApi) -> &TestState {
        if let TestStart::Pending(pending) = self.begin_test() {
            let outcome = api.test_credentials(&pending.config).await;
            self.complete_test(pending.ticket, outcome);
        }
        &self.state
    }

    /// Persist the current credentials through the engine
    pub async fn save(&self, api: &dyn SyncApi) -> Result<SaveAck, SyncClientError> {
        tracing::info!("Saving Odoo configuration for {}", self.config.url);
        api.save_odoo_config(&self.config).await
    }
}
