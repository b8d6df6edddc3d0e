use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("k"), None);
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_last_write_wins() {
    let store = MemoryStore::with_item("k", "1");
    store.set_item("k", "2").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("2"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_unavailable_outside_browser() {
    assert_eq!(LocalStorage.get_item("k"), None);
    assert_eq!(LocalStorage.set_item("k", "v"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage backend unavailable");
    assert_eq!(
        StorageError::Rejected("QuotaExceededError".to_owned()).to_string(),
        "storage write rejected: QuotaExceededError"
    );
}
