//! Credential form tests against a scripted engine

use syncboard::egui_app::settings::{CredentialField, CredentialForm, TestState};
use syncboard::shared::{CredentialTestResult, OdooConfig, SyncClientError};

use crate::common::*;
use crate::{assert_contains, assert_ok};

fn filled(url: &str) -> CredentialForm {
    CredentialForm::new(OdooConfig {
        url: url.to_string(),
        db_name: "odoo_prod".to_string(),
        username: "admin".to_string(),
        api_key: "secret".to_string(),
    })
}

fn tested(state: &TestState) -> (bool, &str) {
    match state {
        TestState::Tested { success, message } => (*success, message.as_str()),
        other => panic!("expected a tested state, got {:?}", other),
    }
}

#[tokio::test]
async fn test_url_without_scheme_fails_without_round_trip() {
    let api = FakeApi::new();
    let mut form = filled("erp.example.com");

    let (success, message) = tested(form.run_test(&*api).await);
    assert!(!success);
    assert_contains!(message, "Invalid URL format");
    assert_eq!(FakeApi::calls(&api.credential_calls), 0);
}

#[tokio::test]
async fn test_missing_database_fails_without_round_trip() {
    let api = FakeApi::new();
    let mut form = filled("https://erp.example.com");
    form.set_field(CredentialField::DbName, "  ");

    let (success, message) = tested(form.run_test(&*api).await);
    assert!(!success);
    assert_contains!(message, "Database name and Username are required");
    assert_eq!(FakeApi::calls(&api.credential_calls), 0);
}

#[tokio::test]
async fn test_valid_credentials_make_exactly_one_call() {
    let api = FakeApi::new();
    let mut form = filled("https://erp.example.com");

    let (success, message) = tested(form.run_test(&*api).await);
    assert!(success);
    assert_eq!(message, "Connected to Odoo");
    assert_eq!(FakeApi::calls(&api.credential_calls), 1);
}

#[tokio::test]
async fn test_engine_rejection_is_shown() {
    let api = FakeApi::new();
    api.set_credentials(Ok(CredentialTestResult::rejected("Authentication failed")));
    let mut form = filled("http://erp.local:8069");

    let (success, message) = tested(form.run_test(&*api).await);
    assert!(!success);
    assert_eq!(message, "Authentication failed");
}

#[tokio::test]
async fn test_transport_failure_never_reports_success() {
    let api = FakeApi::new();
    api.set_credentials(Err(SyncClientError::network("connection refused")));
    let mut form = filled("https://erp.example.com");

    let (success, message) = tested(form.run_test(&*api).await);
    assert!(!success);
    assert_contains!(message, "Network error connecting to API");
}

#[tokio::test]
async fn test_editing_after_success_clears_result() {
    let api = FakeApi::new();
    let mut form = filled("https://erp.example.com");
    form.run_test(&*api).await;

    form.set_field(CredentialField::ApiKey, "rotated");
    assert_eq!(form.state(), &TestState::Idle);
}

#[tokio::test]
async fn test_save_leaves_test_state_alone() {
    let api = FakeApi::new();
    let mut form = filled("https://erp.example.com");
    form.run_test(&*api).await;
    let before = form.state().clone();

    assert_ok!(form.save(&*api).await);
    assert_eq!(form.state(), &before);
    assert_eq!(FakeApi::calls(&api.save_calls), 1);
}
