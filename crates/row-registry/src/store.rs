//! Snapshot storage trait.
//!
//! The registry only needs to read the previous snapshot once at open and
//! replace it once at close; everything else happens in memory.

use crate::{RegistryError, SnapshotFile};

/// Trait for snapshot storage operations.
///
/// Implemented by:
/// - Filesystem storage (`FilesystemStore`)
/// - In-process storage (`MemoryStore`)
pub trait SnapshotStore: Send + Sync {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;

    /// Read the stored snapshot.
    ///
    /// Returns None if no snapshot has been saved yet.
    fn load(&self) -> Result<Option<SnapshotFile>, RegistryError>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &SnapshotFile) -> Result<(), RegistryError>;
}
