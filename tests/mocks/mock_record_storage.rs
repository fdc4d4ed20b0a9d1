use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::storage::RecordStorage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record storage for testing.
///
/// Provides an in-memory implementation of RecordStorage that can be seeded
/// with records, told to fail, and tracks method calls for verification.
/// Clones share state, so a test can keep a handle after boxing one into a store.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStorage {
    records: Arc<Mutex<Vec<Record>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
    fail_loads: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRecordStorage {
    /// Create a new empty MockRecordStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with records, as if saved by an earlier run.
    pub fn with_records(records: Vec<Record>) -> Self {
        let storage = Self::new();
        *storage.records.lock().unwrap() = records;
        storage
    }

    /// Records as they were last saved.
    pub fn stored(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Make every following save fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Make every following load fail.
    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStorage for MockRecordStorage {
    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(StorageError::Corrupt {
                path: "mock".into(),
                reason: "unreadable".to_string(),
            });
        }

        Ok(self.records.lock().unwrap().clone())
    }

    fn location(&self) -> String {
        "mock".to_string()
    }
}
