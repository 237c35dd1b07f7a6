//! HTTP client tests
//!
//! Runs `HttpSyncClient` against a wiremock server standing in for the engine.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use syncboard::egui_app::{HttpSyncClient, SyncApi};
use syncboard::shared::{OdooConfig, SyncClientError, SyncStatus, SyncType};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::*;
use crate::{assert_contains, assert_err, assert_ok};

fn odoo() -> OdooConfig {
    OdooConfig {
        url: "https://erp.example.com".to_string(),
        db_name: "odoo_prod".to_string(),
        username: "admin".to_string(),
        api_key: "secret".to_string(),
    }
}

/// A client pointed at a port nothing listens on
fn unreachable_client() -> HttpSyncClient {
    let port = {
        let listener = assert_ok!(std::net::TcpListener::bind("127.0.0.1:0"));
        assert_ok!(listener.local_addr()).port()
    };
    let config = assert_ok!(syncboard::egui_app::Config::with_builder(
        syncboard::shared::AppConfig::builder().server_url(format!("http://127.0.0.1:{}", port)),
    ));
    assert_ok!(HttpSyncClient::new(config))
}

#[tokio::test]
async fn test_get_health_decodes_snapshot() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_json()))
        .expect(1)
        .mount(&server)
        .await;

    let health = assert_ok!(client.get_health().await);
    assert!(health.redis_connected);
    assert_eq!(health.celery_workers_active, 3);
    assert_eq!(health.pending_tasks, 12);
    assert!(health.last_successful_sync.is_some());
}

#[tokio::test]
async fn test_non_success_status_is_transport_error_with_body() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health/")))
        .respond_with(ResponseTemplate::new(503).set_body_string("worker pool down"))
        .mount(&server)
        .await;

    let err = client.get_health().await.unwrap_err();
    assert_matches!(
        &err,
        SyncClientError::Transport { status: Some(503), message } if message.contains("worker pool down")
    );
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"redisConnected": "yes"})))
        .mount(&server)
        .await;

    assert_err!(client.get_health().await, SyncClientError::Decode { .. });
}

#[tokio::test]
async fn test_unreachable_engine_is_transport_error() {
    let client = unreachable_client();
    assert_err!(client.get_logs().await, SyncClientError::Transport { status: None, .. });
}

#[tokio::test]
async fn test_empty_log_list_is_valid() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/logs/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let logs = assert_ok!(client.get_logs().await);
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_get_logs_decodes_entries() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/logs/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            log_entry_json("1", "Success", "Order", "Imported 3 new orders from eBay."),
            log_entry_json("2", "Failed", "Product", "Error mapping SKU"),
        ])))
        .mount(&server)
        .await;

    let logs = assert_ok!(client.get_logs().await);
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].status, SyncStatus::Failed);
    assert_eq!(logs[1].sync_type, SyncType::Product);
}

#[tokio::test]
async fn test_get_mappings() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path(api_path("/mappings/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "m1",
            "odooProductId": 42,
            "ebaySku": "TSHIRT-001",
            "odooName": "Basic T-Shirt",
            "lastSyncedAt": "2024-05-01T10:15:00Z",
            "status": "OutOfSync"
        }])))
        .mount(&server)
        .await;

    let mappings = assert_ok!(client.get_mappings().await);
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].ebay_sku, "TSHIRT-001");
}

#[tokio::test]
async fn test_trigger_posts_type_and_returns_entry() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sync/trigger/")))
        .and(body_json(json!({"type": "Inventory"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(log_entry_json(
            "99",
            "Success",
            "Inventory",
            "Updated stock for 15 products.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let entry = assert_ok!(client.trigger_sync(SyncType::Inventory).await);
    assert_eq!(entry.id, "99");
    assert_eq!(entry.sync_type, SyncType::Inventory);
}

#[tokio::test]
async fn test_trigger_without_entry_is_an_error() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/sync/trigger/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "queued", "message": "ok"})),
        )
        .mount(&server)
        .await;

    assert_err!(client.trigger_sync(SyncType::Order).await, SyncClientError::Decode { .. });
}

#[tokio::test]
async fn test_credentials_rejected_by_engine() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/test-odoo/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Authentication failed: invalid API key."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = assert_ok!(client.test_credentials(&odoo()).await);
    assert!(!result.success);
    assert_contains!(result.message, "invalid API key");
}

#[tokio::test]
async fn test_credentials_sent_as_camel_case() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/test-odoo/")))
        .and(body_json(json!({
            "url": "https://erp.example.com",
            "dbName": "odoo_prod",
            "username": "admin",
            "apiKey": "secret"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "Connected"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = assert_ok!(client.test_credentials(&odoo()).await);
    assert!(result.success);
}

#[tokio::test]
async fn test_credentials_server_error_becomes_failed_result() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/test-odoo/")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = assert_ok!(client.test_credentials(&odoo()).await);
    assert!(!result.success);
    assert_contains!(result.message, "500");
}

#[tokio::test]
async fn test_credentials_malformed_response_becomes_failed_result() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/test-odoo/")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let result = assert_ok!(client.test_credentials(&odoo()).await);
    assert!(!result.success);
}

#[tokio::test]
async fn test_credentials_unreachable_is_error() {
    let client = unreachable_client();
    assert_err!(client.test_credentials(&odoo()).await, SyncClientError::Transport { .. });
}

#[tokio::test]
async fn test_save_accepts_empty_body() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/odoo/")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ack = assert_ok!(client.save_odoo_config(&odoo()).await);
    assert!(ack.is_null());
}

#[tokio::test]
async fn test_save_returns_engine_ack() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path(api_path("/config/odoo/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "saved"})))
        .mount(&server)
        .await;

    let ack = assert_ok!(client.save_odoo_config(&odoo()).await);
    assert_eq!(ack, json!({"status": "saved"}));
}

#[tokio::test]
async fn test_prefix_is_configurable() {
    let server = MockServer::start().await;
    let config = assert_ok!(syncboard::egui_app::Config::with_builder(
        syncboard::shared::AppConfig::builder()
            .server_url(format!("{}/", server.uri()))
            .api_prefix("/v2"),
    ));
    Mock::given(method("GET"))
        .and(path("/v2/logs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(HttpSyncClient::new(config));
    assert_ok!(client.get_logs().await);
}
