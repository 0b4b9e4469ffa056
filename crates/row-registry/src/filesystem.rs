//! Filesystem-based snapshot storage implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::store::SnapshotStore;
use crate::{RegistryError, SnapshotFile};

/// Filesystem implementation of the SnapshotStore trait.
///
/// Stores the snapshot as a single JSON file. Saves go to a temporary file
/// in the same directory which is synced and then renamed over the target,
/// so a crash mid-save leaves the previous snapshot intact.
pub struct FilesystemStore {
    path: PathBuf,
}

impl FilesystemStore {
    /// Create a new FilesystemStore for the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_error(&self, reason: impl ToString) -> RegistryError {
        RegistryError::Load {
            path: self.location(),
            reason: reason.to_string(),
        }
    }

    fn persist_error(&self, reason: impl ToString) -> RegistryError {
        RegistryError::Persist {
            path: self.location(),
            reason: reason.to_string(),
        }
    }
}

impl SnapshotStore for FilesystemStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<SnapshotFile>, RegistryError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.load_error(e))?;
        // An empty file is left behind by tools that create the snapshot up front
        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.load_error(e))
    }

    fn save(&self, snapshot: &SnapshotFile) -> Result<(), RegistryError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.persist_error(e))?;

        let mut file = NamedTempFile::new_in(&dir).map_err(|e| self.persist_error(e))?;
        serde_json::to_writer(&mut file, snapshot).map_err(|e| self.persist_error(e))?;
        file.write_all(b"\n").map_err(|e| self.persist_error(e))?;
        file.as_file().sync_all().map_err(|e| self.persist_error(e))?;
        file.persist(&self.path)
            .map_err(|e| self.persist_error(e.error))?;

        tracing::info!(
            "Stored snapshot of {} rows to {}",
            snapshot.num_rows,
            self.path.display()
        );
        Ok(())
    }
}
