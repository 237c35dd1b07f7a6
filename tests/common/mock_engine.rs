//! wiremock helpers standing in for the sync engine

use std::time::Duration;

use syncboard::egui_app::{Config, HttpSyncClient};
use syncboard::shared::AppConfig;
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api";

/// A fresh mock engine and a config pointing at it
pub async fn mock_engine() -> (MockServer, Config) {
    let server = MockServer::start().await;
    let config = Config::with_builder(
        AppConfig::builder()
            .server_url(server.uri())
            .api_prefix(API_PREFIX)
            .request_timeout(Duration::from_secs(2)),
    )
    .expect("mock engine config is valid");
    (server, config)
}

pub async fn mock_client() -> (MockServer, HttpSyncClient) {
    let (server, config) = mock_engine().await;
    let client = HttpSyncClient::new(config).expect("client builds");
    (server, client)
}

/// Full request path for an endpoint under the API prefix
pub fn api_path(endpoint: &str) -> String {
    format!("{}{}", API_PREFIX, endpoint)
}
