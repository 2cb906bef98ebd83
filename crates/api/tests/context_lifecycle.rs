//! Integration tests for AppContext lifecycle

mod support;

use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use slotguard_core::SystemClock;
use slotguard_domain::{CalendarConfig, Config, SlotGuardError};
use slotguard_lib::{save_checkpoint, AppContext};
use support::{test_context, InMemoryProvider};

#[test]
fn context_registers_all_calendar_tools() {
    let context = test_context(InMemoryProvider::default());

    assert_eq!(
        context.pipeline.registry().names(),
        vec!["create_event", "get_events", "get_time", "remove_event", "update_event"]
    );
}

#[test]
fn invalid_timezone_fails_context_creation() {
    let config = Config {
        calendar: CalendarConfig { reference_timezone: "Nowhere/Special".into(), ..Default::default() },
        ..Config::default()
    };

    let result =
        AppContext::with_provider(config, Arc::new(InMemoryProvider::default()), Arc::new(SystemClock));
    assert!(matches!(result, Err(SlotGuardError::Config(_))));
}

#[test]
fn context_builds_against_google_client() {
    let mut token = tempfile::NamedTempFile::new().unwrap();
    token.write_all(br#"{"token": "ya29.test"}"#).unwrap();

    let config = Config {
        calendar: CalendarConfig {
            credentials_path: token.path().to_string_lossy().to_string(),
            ..Default::default()
        },
        ..Config::default()
    };

    let context = AppContext::new_with_config(config).expect("context should build");
    assert_eq!(context.pipeline.definitions().len(), 5);
}

#[tokio::test]
async fn shutdown_drops_checkpoints() {
    let context = test_context(InMemoryProvider::default());
    save_checkpoint(&context, "thread-1", json!({"messages": 3})).await.unwrap();
    assert_eq!(context.checkpoints.len(), 1);

    context.shutdown().unwrap();
    assert!(context.checkpoints.is_empty());
}
