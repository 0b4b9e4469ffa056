//! In-process snapshot storage.

use std::sync::{Arc, Mutex, PoisonError};

use crate::store::SnapshotStore;
use crate::{RegistryError, SnapshotFile};

/// Keeps the snapshot in memory.
///
/// Clones share the same snapshot, so a test can close a registry and reopen
/// another one from a clone of the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Option<SnapshotFile>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given snapshot.
    pub fn with_snapshot(snapshot: SnapshotFile) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<SnapshotFile> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Option<SnapshotFile>, RegistryError> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &SnapshotFile) -> Result<(), RegistryError> {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }
}
