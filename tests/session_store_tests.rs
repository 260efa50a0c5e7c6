use reclamation_portal::{FileSessionStore, MemorySessionStore, SessionRecord, SessionStore};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

// --- Helper Functions ---

/// A unique throwaway session file path per test, so tests never race on
/// shared state and can run in parallel.
fn temp_session_path() -> PathBuf {
    std::env::temp_dir().join(format!("reclamation-session-test-{}.json", Uuid::new_v4()))
}

fn sample_record() -> SessionRecord {
    SessionRecord {
        credential: "bearer-abc123".to_string(),
        role: "guichetier".to_string(),
        department: Some("front-office".to_string()),
        ministry: Some("interior".to_string()),
        service: None,
        display_name: Some("A. Guichetier".to_string()),
        user_id: Some("42".to_string()),
    }
}

// --- Memory Store ---

#[test]
fn memory_store_round_trips() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get(), None);

    let record = sample_record();
    store.set(&record);
    assert_eq!(store.get(), Some(record));
}

#[test]
fn memory_store_clear_returns_to_absent() {
    let store = MemorySessionStore::with_record(sample_record());
    assert!(store.get().is_some());

    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_set_overwrites_fully() {
    let store = MemorySessionStore::with_record(sample_record());

    // The second record has fewer attributes; none of the first record's
    // fields may survive the overwrite.
    let replacement = SessionRecord {
        credential: "bearer-def456".to_string(),
        role: "admin".to_string(),
        ..Default::default()
    };
    store.set(&replacement);

    let current = store.get().unwrap();
    assert_eq!(current, replacement);
    assert_eq!(current.department, None);
}

// --- File Store ---

#[test]
fn file_store_round_trips() {
    let path = temp_session_path();
    let store = FileSessionStore::open(&path);
    assert_eq!(store.get(), None);

    let record = sample_record();
    store.set(&record);
    assert_eq!(store.get(), Some(record));

    let _ = fs::remove_file(&path);
}

#[test]
fn file_store_survives_reopen() {
    let path = temp_session_path();
    let record = sample_record();

    // First "page load": log in and drop the store.
    {
        let store = FileSessionStore::open(&path);
        store.set(&record);
    }

    // Second "page load": the record must still be there, intact.
    let store = FileSessionStore::open(&path);
    assert_eq!(store.get(), Some(record));

    let _ = fs::remove_file(&path);
}

#[test]
fn file_store_clear_removes_the_file() {
    let path = temp_session_path();
    let store = FileSessionStore::open(&path);
    store.set(&sample_record());
    assert!(path.exists());

    store.clear();
    assert_eq!(store.get(), None);
    assert!(!path.exists());

    // And a reopen sees the cleared state, not a stale record.
    let reopened = FileSessionStore::open(&path);
    assert_eq!(reopened.get(), None);
}

#[test]
fn file_store_degrades_malformed_data_to_absent() {
    let path = temp_session_path();
    fs::write(&path, "{not valid json at all").unwrap();

    // Must not panic, must not error: garbage on disk means anonymous.
    let store = FileSessionStore::open(&path);
    assert_eq!(store.get(), None);

    let _ = fs::remove_file(&path);
}

#[test]
fn file_store_absent_optional_keys_stay_absent() {
    let path = temp_session_path();
    let record = SessionRecord {
        credential: "bearer-xyz".to_string(),
        role: "user".to_string(),
        ..Default::default()
    };

    {
        let store = FileSessionStore::open(&path);
        store.set(&record);
    }

    // The persisted layout omits unset keys rather than writing nulls.
    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("department"));
    assert!(!raw.contains("null"));

    let store = FileSessionStore::open(&path);
    assert_eq!(store.get(), Some(record));

    let _ = fs::remove_file(&path);
}
