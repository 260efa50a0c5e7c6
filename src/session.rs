use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::SessionRecord;

// 1. SessionStore Contract
/// SessionStore
///
/// Defines the abstract contract for holding the current actor's session
/// record between navigations. This trait allows us to swap the concrete
/// implementation, from the durable file-backed store (FileSessionStore) in
/// production to the in-memory store (MemorySessionStore) during testing,
/// without affecting the navigator or the route authorizer.
///
/// All three operations are atomic with respect to one another: a reader
/// never observes a partially written record.
pub trait SessionStore: Send + Sync {
    /// Persists the full session record, overwriting any prior value.
    fn set(&self, record: &SessionRecord);

    /// Returns the current record, or `None` if never set or cleared.
    fn get(&self) -> Option<SessionRecord>;

    /// Removes the record entirely; subsequent `get` returns `None`.
    fn clear(&self);
}

// 2. The Durable Implementation (File-Backed)
/// FileSessionStore
///
/// The production store: a single JSON file on disk plus an in-memory cache.
/// The file is read exactly once, at construction, so that `get` on the
/// navigation hot path never performs I/O; `set` and `clear` write through.
///
/// Durability is the point: navigation decisions must be correct immediately
/// after a page reload, so the record has to outlive the process.
pub struct FileSessionStore {
    path: PathBuf,
    cache: Mutex<Option<SessionRecord>>,
}

impl FileSessionStore {
    /// open
    ///
    /// Constructs the store over the given file path, loading whatever
    /// record is currently persisted there. A missing file is a normal
    /// anonymous start; a malformed or unreadable file degrades to anonymous
    /// with a warning rather than failing construction.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = Mutex::new(load_record(&path));
        Self { path, cache }
    }

    fn write_through(&self, record: Option<&SessionRecord>) {
        match record {
            Some(record) => {
                // Write to a sibling temp file, then rename into place, so a
                // concurrent reload never observes a half-written record.
                let tmp = self.path.with_extension("tmp");
                if let Some(parent) = self.path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                let json = match serde_json::to_string_pretty(record) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize session record");
                        return;
                    }
                };
                if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
                    tracing::error!(
                        error = %e,
                        path = %self.path.display(),
                        "failed to persist session record"
                    );
                }
            }
            None => {
                if let Err(e) = fs::remove_file(&self.path) {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        tracing::error!(
                            error = %e,
                            path = %self.path.display(),
                            "failed to remove persisted session"
                        );
                    }
                }
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, record: &SessionRecord) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        self.write_through(Some(record));
        *cache = Some(record.clone());
    }

    fn get(&self) -> Option<SessionRecord> {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        self.write_through(None);
        *cache = None;
    }
}

/// load_record
///
/// Reads and decodes the persisted session file. Every failure mode (missing
/// file, I/O error, malformed JSON) maps to `None`: stored garbage must never
/// keep the portal from starting, it simply means "anonymous".
fn load_record(path: &Path) -> Option<SessionRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "unreadable session file");
            return None;
        }
    };

    match serde_json::from_str::<SessionRecord>(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "malformed session file, treating as anonymous"
            );
            None
        }
    }
}

// 3. The In-Memory Implementation (For Tests and Ephemeral Hosts)
/// MemorySessionStore
///
/// A non-durable implementation of `SessionStore` holding the record behind
/// a mutex. Used in tests to exercise the navigator and authorizer without
/// touching the filesystem.
#[derive(Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for tests: a store already holding `record`.
    pub fn with_record(record: SessionRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, record: &SessionRecord) {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(record.clone());
    }

    fn get(&self) -> Option<SessionRecord> {
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear(&self) {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// SessionState
///
/// The concrete type used to share the session store across the navigator
/// and the host.
pub type SessionState = Arc<dyn SessionStore>;
