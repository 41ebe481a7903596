//! Load / restore / clear tests

use crate::test_utils::recording_manager;
use autosave_domain::constants::{RECOVERY_NOTIFICATION_DESCRIPTION, RECOVERY_NOTIFICATION_TITLE};
use autosave_domain::ports::StateStoreProvider;
use autosave_infrastructure::{AttachOutcome, AutoSaveOptions};
use futures::{FutureExt, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GuideProfileDraft {
    display_name: String,
    country: String,
    categories: Vec<String>,
}

fn sample_profile() -> GuideProfileDraft {
    GuideProfileDraft {
        display_name: "Lucía".to_string(),
        country: "PE".to_string(),
        categories: vec!["reiki".to_string(), "meditation".to_string()],
    }
}

#[tokio::test(start_paused = true)]
async fn test_restore_returns_saved_value_and_notifies_once() {
    let (manager, _store, notifications) = recording_manager();
    let mut toasts = notifications.subscribe();

    manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 2})).interval_ms(1000))
        .await;
    sleep(Duration::from_millis(1001)).await;

    let restored: Option<serde_json::Value> = manager.restore_saved("draft1").await;
    assert_eq!(restored, Some(json!({"a": 2})));

    let toast = toasts.next().now_or_never().flatten().expect("recovery notification");
    assert_eq!(toast.title, RECOVERY_NOTIFICATION_TITLE);
    assert_eq!(toast.description, RECOVERY_NOTIFICATION_DESCRIPTION);
    assert_eq!(toast.key.as_deref(), Some("draft1"));
    assert!(toasts.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_restore_missing_draft_is_silent() {
    let (manager, _store, notifications) = recording_manager();
    let mut toasts = notifications.subscribe();

    let restored: Option<serde_json::Value> = manager.restore_saved("draft2").await;
    assert!(restored.is_none());
    assert!(toasts.next().now_or_never().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_typed_round_trip_through_manager() {
    let (manager, _store, _) = recording_manager();
    let profile = sample_profile();

    manager
        .attach(AutoSaveOptions::new("guide-profile", &profile).interval_ms(500))
        .await;
    sleep(Duration::from_millis(501)).await;

    let loaded: Option<GuideProfileDraft> = manager.load_saved("guide-profile").await;
    assert_eq!(loaded, Some(profile));
}

#[tokio::test]
async fn test_load_unknown_key_is_absent() {
    let (manager, _store, _) = recording_manager();

    let loaded: Option<serde_json::Value> = manager.load_saved("never-saved").await;
    assert!(loaded.is_none());
    assert!(manager.load_saved_value("never-saved").await.is_none());
    assert!(!manager.has_saved_data("never-saved").await);
}

#[tokio::test]
async fn test_malformed_draft_is_treated_as_absent() {
    let (manager, store, notifications) = recording_manager();
    let mut toasts = notifications.subscribe();

    store.save("autosave_broken", b"{\"a\":").await.unwrap();

    // Presence check does not decode
    assert!(manager.has_saved_data("broken").await);

    let loaded: Option<serde_json::Value> = manager.load_saved("broken").await;
    assert!(loaded.is_none());

    let restored: Option<serde_json::Value> = manager.restore_saved("broken").await;
    assert!(restored.is_none());
    assert!(toasts.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_wrong_shape_is_treated_as_absent() {
    let (manager, store, _) = recording_manager();
    store.save("autosave_guide-profile", br#"{"a":1}"#).await.unwrap();

    let loaded: Option<GuideProfileDraft> = manager.load_saved("guide-profile").await;
    assert!(loaded.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_clear_removes_draft_and_resets_last_saved() {
    let (manager, store, _) = recording_manager();
    let payload = json!({"a": 1});

    manager
        .attach(AutoSaveOptions::new("draft1", &payload).interval_ms(1000))
        .await;
    sleep(Duration::from_millis(1001)).await;
    assert!(manager.has_saved_data("draft1").await);

    manager.clear_saved("draft1").await;
    assert!(!manager.has_saved_data("draft1").await);
    assert!(manager.last_saved_serialization("draft1").await.is_none());

    // Same payload is no longer considered saved
    let outcome = manager
        .attach(AutoSaveOptions::new("draft1", &payload).interval_ms(1000))
        .await;
    assert_eq!(outcome, AttachOutcome::Scheduled);
    sleep(Duration::from_millis(1001)).await;
    assert_eq!(store.write_count(), 2);
}

#[tokio::test]
async fn test_clear_without_saved_draft_is_safe() {
    let (manager, _store, _) = recording_manager();
    manager.clear_saved("nothing-here").await;
    assert!(!manager.has_saved_data("nothing-here").await);
}

#[tokio::test]
async fn test_saved_keys_strip_prefix() {
    let (manager, store, _) = recording_manager();
    store.save("autosave_listing", b"{}").await.unwrap();
    store.save("autosave_intake", b"{}").await.unwrap();
    store.save("theme", b"\"dark\"").await.unwrap();

    assert_eq!(
        manager.saved_keys().await,
        vec!["intake".to_string(), "listing".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_clear_leaves_pending_write_armed() {
    let (manager, store, _) = recording_manager();

    manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 1})).interval_ms(1000))
        .await;
    sleep(Duration::from_millis(1001)).await;

    // Edit after the last save, then clear before the edit's interval elapses
    manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 2})).interval_ms(1000))
        .await;
    sleep(Duration::from_millis(500)).await;
    manager.clear_saved("draft1").await;

    assert!(!manager.has_saved_data("draft1").await);
    assert_eq!(manager.pending_writes().await, 1);

    sleep(Duration::from_millis(501)).await;
    assert_eq!(store.stored("autosave_draft1").as_deref(), Some(r#"{"a":2}"#));
    assert_eq!(
        manager.last_saved_serialization("draft1").await.as_deref(),
        Some(r#"{"a":2}"#)
    );

    // Callers that want the draft gone detach before clearing
    manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 3})).interval_ms(1000))
        .await;
    assert!(manager.detach("draft1").await);
    manager.clear_saved("draft1").await;
    sleep(Duration::from_millis(2000)).await;
    assert!(!manager.has_saved_data("draft1").await);
}

#[tokio::test(start_paused = true)]
async fn test_clear_releases_idle_keys() {
    let (manager, _store, _) = recording_manager();
    let keys: Vec<String> = (0..200).map(|i| format!("listing-{i}")).collect();

    for key in &keys {
        manager
            .attach(AutoSaveOptions::new(key, &json!({"id": key})).interval_ms(1000))
            .await;
    }
    sleep(Duration::from_millis(1001)).await;
    assert_eq!(manager.tracked_keys(), keys.len());

    for key in &keys {
        manager.clear_saved(key).await;
    }
    assert_eq!(manager.tracked_keys(), 0);
    assert!(manager.saved_keys().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clear_keeps_tracking_key_with_pending_write() {
    let (manager, _store, _) = recording_manager();

    manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 1})).interval_ms(1000))
        .await;
    manager.clear_saved("draft1").await;
    assert_eq!(manager.tracked_keys(), 1);

    sleep(Duration::from_millis(1001)).await;
    assert!(manager.has_saved_data("draft1").await);

    // A released key starts fresh on its next attach
    manager.clear_saved("draft1").await;
    assert_eq!(manager.tracked_keys(), 0);
    let outcome = manager
        .attach(AutoSaveOptions::new("draft1", &json!({"a": 1})).interval_ms(1000))
        .await;
    assert_eq!(outcome, AttachOutcome::Scheduled);
    sleep(Duration::from_millis(1001)).await;
    assert!(manager.has_saved_data("draft1").await);
}
