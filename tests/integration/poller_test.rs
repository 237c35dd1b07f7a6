//! Refresh controller tests
//!
//! Drives `RefreshController` against `FakeApi` to cover partial failures,
//! trigger exclusivity, and shutdown while requests are in flight.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use chrono::Utc;
use syncboard::egui_app::sync::{
    Connectivity, CycleState, DashboardStore, RefreshController, TriggerOutcome,
};
use syncboard::shared::{
    PollerError, SyncClientError, SyncLogEntry, SyncStatus, SyncType, TriggerError,
};

use crate::common::*;
use crate::{assert_contains, assert_err, assert_ok};

const SLOW: Duration = Duration::from_secs(60);

fn new_controller(api: &Arc<FakeApi>, interval: Duration) -> (RefreshController, DashboardStore) {
    RefreshController::new(api.clone(), interval)
}

fn ids(entries: &[SyncLogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

async fn wait_for(counter: &std::sync::atomic::AtomicUsize, at_least: usize) {
    for _ in 0..1000 {
        if FakeApi::calls(counter) >= at_least {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("call count never reached {}", at_least);
}

#[tokio::test]
async fn test_health_failure_keeps_last_snapshot_and_still_applies_logs() {
    let api = FakeApi::new();
    let (controller, store) = new_controller(&api, SLOW);
    assert_eq!(controller.refresh_once().await, CycleState::Settled);
    let before = store.snapshot().await.health.clone();
    assert!(before.is_some());

    api.set_health(Err(SyncClientError::network("connection refused")));
    api.set_logs(Ok(five_entry_log(Utc::now())));
    assert_eq!(controller.refresh_once().await, CycleState::Errored);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.health, before);
    assert_matches!(&snapshot.connectivity, Connectivity::Degraded { error } if error.contains("connection refused"));
    assert_eq!(ids(&snapshot.logs), vec!["t5", "t20", "t60", "t120", "t180"]);
    assert!(snapshot.last_error.is_some());
    assert!(!snapshot.is_unavailable());
}

#[tokio::test]
async fn test_logs_failure_keeps_previous_logs() {
    let api = FakeApi::new();
    api.set_logs(Ok(five_entry_log(Utc::now())));
    let (controller, store) = new_controller(&api, SLOW);
    controller.refresh_once().await;

    api.set_logs(Err(SyncClientError::status(502, "bad gateway")));
    assert_eq!(controller.refresh_once().await, CycleState::Errored);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.logs.len(), 5);
    assert_eq!(snapshot.connectivity, Connectivity::Online);
    assert!(snapshot.last_error.as_deref().unwrap_or_default().contains("502"));
}

#[tokio::test]
async fn test_health_decode_error_keeps_snapshot_and_applies_logs() {
    let api = FakeApi::new();
    let (controller, store) = new_controller(&api, SLOW);
    assert_eq!(controller.refresh_once().await, CycleState::Settled);
    let before = store.snapshot().await.health.clone();

    api.set_health(Err(SyncClientError::decode("/health/: missing field `pendingTasks`")));
    api.set_logs(Ok(five_entry_log(Utc::now())));
    assert_eq!(controller.refresh_once().await, CycleState::Errored);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.health, before);
    assert_matches!(&snapshot.connectivity, Connectivity::Degraded { error } if error.contains("pendingTasks"));
    assert!(snapshot.last_error.is_some());
    assert_eq!(snapshot.logs.len(), 5);
}

#[tokio::test]
async fn test_logs_decode_error_keeps_previous_logs_and_applies_health() {
    let api = FakeApi::new();
    api.set_logs(Ok(five_entry_log(Utc::now())));
    let (controller, store) = new_controller(&api, SLOW);
    controller.refresh_once().await;
    let before = store.snapshot().await.logs.clone();

    let mut fresh = healthy();
    fresh.pending_tasks = 99;
    api.set_health(Ok(fresh.clone()));
    api.set_logs(Err(SyncClientError::decode("/logs/: invalid type: map, expected a sequence")));
    assert_eq!(controller.refresh_once().await, CycleState::Errored);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.logs, before);
    assert_eq!(snapshot.health, Some(fresh));
    assert_eq!(snapshot.connectivity, Connectivity::Online);
    assert_contains!(snapshot.last_error.clone().unwrap_or_default(), "expected a sequence");
}

#[tokio::test]
async fn test_successful_cycle_clears_last_error() {
    let api = FakeApi::new();
    api.set_mappings(Err(SyncClientError::network("timeout")));
    let (controller, store) = new_controller(&api, SLOW);
    controller.refresh_once().await;
    assert!(store.snapshot().await.last_error.is_some());

    api.set_mappings(Ok(Vec::new()));
    assert_eq!(controller.refresh_once().await, CycleState::Settled);
    assert!(store.snapshot().await.last_error.is_none());
}

#[tokio::test]
async fn test_first_load_unreachable_then_retry() {
    let api = FakeApi::new();
    api.set_health(Err(SyncClientError::network("connection refused")));
    let (controller, store) = new_controller(&api, SLOW);
    controller.refresh_once().await;

    let snapshot = store.snapshot().await;
    assert!(snapshot.is_unavailable());
    assert!(snapshot.health.is_none());

    api.set_health(Ok(healthy()));
    assert_eq!(controller.retry().await, CycleState::Settled);
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.connectivity, Connectivity::Online);
    assert!(snapshot.health.is_some());
}

#[tokio::test]
async fn test_trigger_entry_is_newest_without_waiting_for_timer() {
    let api = FakeApi::new();
    let now = Utc::now();
    api.set_logs(Ok(five_entry_log(now)));
    let created = log_entry("new", now, 0, SyncStatus::Success, SyncType::Inventory, "Updated stock");
    api.set_trigger(Ok(created.clone()));

    let (controller, store) = new_controller(&api, SLOW);
    let entry = assert_ok!(controller.trigger_sync(SyncType::Inventory).await);
    assert_eq!(entry, created);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.logs[0].id, "new");
    assert_eq!(snapshot.recent_logs(5).len(), 5);
    assert_eq!(snapshot.last_trigger, Some(TriggerOutcome::Started(created)));
    assert_eq!(FakeApi::calls(&api.health_calls), 1);
}

#[tokio::test]
async fn test_trigger_entry_is_not_duplicated_when_refetch_has_it() {
    let api = FakeApi::new();
    let now = Utc::now();
    let created = log_entry("new", now, 0, SyncStatus::Running, SyncType::Order, "Order sync started");
    let mut logs = five_entry_log(now);
    logs.push(created.clone());
    api.set_logs(Ok(logs));
    api.set_trigger(Ok(created));

    let (controller, store) = new_controller(&api, SLOW);
    assert_ok!(controller.trigger_sync(SyncType::Order).await);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.logs.iter().filter(|e| e.id == "new").count(), 1);
    assert_eq!(snapshot.logs.len(), 6);
}

#[tokio::test]
async fn test_trigger_failure_is_reported() {
    let api = FakeApi::new();
    api.set_trigger(Err(SyncClientError::network("connection reset")));
    let (controller, store) = new_controller(&api, SLOW);

    assert_err!(
        controller.trigger_sync(SyncType::Inventory).await,
        TriggerError::Client(SyncClientError::Transport { .. })
    );
    assert!(!controller.is_trigger_in_flight());

    let snapshot = store.snapshot().await;
    assert_matches!(
        &snapshot.last_trigger,
        Some(TriggerOutcome::Failed(message)) if message.starts_with("Failed to trigger sync")
    );
    // No refresh after a failed trigger
    assert_eq!(FakeApi::calls(&api.health_calls), 0);
}

#[tokio::test]
async fn test_concurrent_trigger_never_sends_second_request() {
    let api = FakeApi::new();
    let gate = api.gate_trigger();
    let (controller, _store) = new_controller(&api, SLOW);

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.trigger_sync(SyncType::Inventory).await }
    });
    wait_for(&api.trigger_calls, 1).await;
    assert!(controller.is_trigger_in_flight());

    assert_err!(
        controller.trigger_sync(SyncType::Order).await,
        TriggerError::AlreadyInFlight
    );
    assert_eq!(FakeApi::calls(&api.trigger_calls), 1);

    gate.notify_one();
    assert_ok!(first.await.expect("trigger task panicked"));
    assert!(!controller.is_trigger_in_flight());
}

#[tokio::test]
async fn test_late_health_result_is_discarded_after_shutdown() {
    let api = FakeApi::new();
    let gate = api.gate_health();
    let (controller, store) = new_controller(&api, SLOW);

    let cycle = tokio::spawn({
        let controller = controller.clone();
        async move { controller.refresh_once().await }
    });
    wait_for(&api.health_calls, 1).await;

    controller.shutdown();
    gate.notify_one();
    assert_eq!(cycle.await.expect("refresh task panicked"), CycleState::Idle);

    let snapshot = store.snapshot().await;
    assert!(snapshot.health.is_none());
    assert_eq!(snapshot.connectivity, Connectivity::Connecting);

    // Nothing more is requested once shut down
    assert_eq!(controller.refresh_once().await, CycleState::Idle);
    assert_eq!(FakeApi::calls(&api.health_calls), 1);
    assert_err!(controller.trigger_sync(SyncType::Order).await, TriggerError::ShutDown);
}

#[tokio::test]
async fn test_trigger_completing_after_shutdown_is_discarded() {
    let api = FakeApi::new();
    let gate = api.gate_trigger();
    let (controller, store) = new_controller(&api, SLOW);

    let trigger = tokio::spawn({
        let controller = controller.clone();
        async move { controller.trigger_sync(SyncType::Inventory).await }
    });
    wait_for(&api.trigger_calls, 1).await;

    controller.shutdown();
    gate.notify_one();
    assert_ok!(trigger.await.expect("trigger task panicked"));

    let snapshot = store.snapshot().await;
    assert!(snapshot.last_trigger.is_none());
    assert!(snapshot.logs.is_empty());
    assert_eq!(FakeApi::calls(&api.health_calls), 0);
    assert!(!controller.is_trigger_in_flight());
}

#[tokio::test]
async fn test_timer_refreshes_until_handle_is_dropped() {
    let api = FakeApi::new();
    let (controller, store) = new_controller(&api, Duration::from_millis(20));

    let handle = assert_ok!(controller.start());
    assert!(matches!(controller.start(), Err(PollerError::AlreadyRunning)));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(FakeApi::calls(&api.health_calls) >= 3);
    assert_eq!(store.snapshot().await.connectivity, Connectivity::Online);

    drop(handle);
    assert!(controller.is_shut_down());
    let calls = FakeApi::calls(&api.health_calls);
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(FakeApi::calls(&api.health_calls), calls);

    assert!(matches!(controller.start(), Err(PollerError::ShutDown)));
}

#[tokio::test]
async fn test_first_tick_is_immediate() {
    let api = FakeApi::new();
    let (controller, store) = new_controller(&api, SLOW);
    let handle = assert_ok!(controller.start());

    wait_for(&api.log_calls, 1).await;
    for _ in 0..100 {
        if store.snapshot().await.logs_loaded {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(store.snapshot().await.logs_loaded);
    handle.shutdown();
}
