//! Filesystem State Store Tests

use autosave_domain::Error;
use autosave_domain::ports::StateStoreProvider;
use autosave_providers::state_store::FileSystemStateStoreProvider;
use tempfile::TempDir;

#[tokio::test]
async fn test_filesystem_store_basic_operations() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path().join("drafts"));

    assert!(store.load("autosave_draft1").await.unwrap().is_none());

    store.save("autosave_draft1", br#"{"a":1}"#).await.unwrap();
    let loaded = store.load("autosave_draft1").await.unwrap();
    assert_eq!(loaded.as_deref(), Some(br#"{"a":1}"#.as_slice()));

    store.delete("autosave_draft1").await.unwrap();
    assert!(store.load("autosave_draft1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_filesystem_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileSystemStateStoreProvider::new(temp_dir.path());
        store.save("autosave_listing/7", b"persisted").await.unwrap();
    }

    let reopened = FileSystemStateStoreProvider::new(temp_dir.path());
    let loaded = reopened.load("autosave_listing/7").await.unwrap();
    assert_eq!(loaded.as_deref(), Some(b"persisted".as_slice()));
}

#[tokio::test]
async fn test_filesystem_store_delete_missing_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path());
    assert!(store.delete("never-written").await.is_ok());
}

#[tokio::test]
async fn test_filesystem_store_list_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path());

    // Missing directory lists as empty
    let empty = FileSystemStateStoreProvider::new(temp_dir.path().join("missing"));
    assert!(empty.list_keys("").await.unwrap().is_empty());

    store.save("autosave_two", b"2").await.unwrap();
    store.save("autosave_one", b"1").await.unwrap();
    store.save("unrelated", b"x").await.unwrap();

    let keys = store.list_keys("autosave_").await.unwrap();
    assert_eq!(keys, vec!["autosave_one".to_string(), "autosave_two".to_string()]);
}

#[tokio::test]
async fn test_filesystem_store_quota() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path()).with_max_value_bytes(3);

    let result = store.save("k", b"four").await;
    assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
    assert!(store.load("k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_filesystem_store_unwritable_base_path() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let store = FileSystemStateStoreProvider::new(&blocker);
    let result = store.save("k", b"v").await;
    assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
}

#[tokio::test]
async fn test_filesystem_store_handles_long_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path());
    let long_key = format!("autosave_{}", "x".repeat(191));
    assert_eq!(long_key.len(), 200);

    store.save(&long_key, br#"{"a":1}"#).await.unwrap();
    store.save("autosave_short", br#"{"b":2}"#).await.unwrap();

    let loaded = store.load(&long_key).await.unwrap();
    assert_eq!(loaded.as_deref(), Some(br#"{"a":1}"#.as_slice()));

    let keys = store.list_keys("autosave_").await.unwrap();
    assert_eq!(keys, vec!["autosave_short".to_string(), long_key.clone()]);

    // Survives a reopen like any other key
    let reopened = FileSystemStateStoreProvider::new(temp_dir.path());
    store.save(&long_key, br#"{"a":2}"#).await.unwrap();
    let loaded = reopened.load(&long_key).await.unwrap();
    assert_eq!(loaded.as_deref(), Some(br#"{"a":2}"#.as_slice()));

    reopened.delete(&long_key).await.unwrap();
    assert!(reopened.load(&long_key).await.unwrap().is_none());
    assert_eq!(
        reopened.list_keys("autosave_").await.unwrap(),
        vec!["autosave_short".to_string()]
    );
}

#[tokio::test]
async fn test_filesystem_store_long_keys_stay_distinct() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStateStoreProvider::new(temp_dir.path());
    let first = format!("autosave_{}a", "y".repeat(300));
    let second = format!("autosave_{}b", "y".repeat(300));

    store.save(&first, b"first").await.unwrap();
    store.save(&second, b"second").await.unwrap();

    assert_eq!(store.load(&first).await.unwrap().as_deref(), Some(b"first".as_slice()));
    assert_eq!(store.load(&second).await.unwrap().as_deref(), Some(b"second".as_slice()));
}
