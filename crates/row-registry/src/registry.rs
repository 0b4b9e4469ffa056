//! The row registry: slot-addressed rows with primary/unique key indexes.

use mess_core::{Row, TableSchema};
use rand::Rng;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::signature::KeyIndex;
use crate::store::SnapshotStore;
use crate::{FilesystemStore, RegistryError, Signature, SnapshotFile};

/// A live row and its position in the live-slot list.
#[derive(Debug, Clone)]
struct LiveRow {
    row: Row,
    position: usize,
}

/// Signatures of one row under every key, checked free and ready to record.
struct RowSignatures {
    primary: Signature,
    unique: Vec<Signature>,
}

/// Simulated table contents.
///
/// Rows live in slots numbered in insertion order. Deleting a row leaves a
/// tombstone so the numbers of other rows stay valid; tombstones are
/// compacted away only by [`RowRegistry::close`].
///
/// Every live row has exactly one entry in the primary-key index and one in
/// each unique-key index, and no two live rows share a signature under any
/// key. Failed operations leave rows and indexes unchanged.
pub struct RowRegistry {
    store: Box<dyn SnapshotStore>,
    /// `None` marks a tombstone
    slots: Vec<Option<LiveRow>>,
    /// Dense list of live slot numbers, for O(1) uniform picks
    live: Vec<usize>,
    primary: KeyIndex,
    unique: Vec<KeyIndex>,
}

impl RowRegistry {
    /// Open a registry backed by `store`, restoring its snapshot if any.
    ///
    /// Fails with [`RegistryError::Load`] if the snapshot is malformed or two
    /// stored rows share a primary-key or unique-key signature.
    pub fn open(
        schema: &TableSchema,
        store: impl SnapshotStore + 'static,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self {
            store: Box::new(store),
            slots: Vec::new(),
            live: Vec::new(),
            primary: KeyIndex::primary(schema.primary_keys()),
            unique: schema
                .unique_keys()
                .iter()
                .map(|group| KeyIndex::unique(group))
                .collect(),
        };

        let Some(snapshot) = registry.store.load()? else {
            info!(
                "No snapshot at {}, starting with an empty registry",
                registry.store.location()
            );
            return Ok(registry);
        };

        let location = registry.store.location();
        let load_error = |reason: String| RegistryError::Load {
            path: location.clone(),
            reason,
        };

        let rows = snapshot.decode(schema).map_err(load_error)?;
        for (idx, row) in rows.into_iter().enumerate() {
            registry
                .insert_row(row)
                .map_err(|e| load_error(format!("row {idx}: {e}")))?;
        }

        info!(
            "Loaded {} rows from snapshot {}",
            registry.live_count(),
            location
        );
        Ok(registry)
    }

    /// Open a registry backed by a JSON snapshot file.
    pub fn open_path(
        schema: &TableSchema,
        path: impl Into<PathBuf>,
    ) -> Result<Self, RegistryError> {
        Self::open(schema, FilesystemStore::new(path))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a row, returning its slot.
    ///
    /// Fails with [`RegistryError::ConstraintViolation`] without changing
    /// anything if a live row already owns one of its signatures.
    pub fn insert_row(&mut self, row: Row) -> Result<usize, RegistryError> {
        let signatures = self.free_signatures(&row)?;

        let slot = self.slots.len();
        self.record(slot, signatures);
        self.live.push(slot);
        self.slots.push(Some(LiveRow {
            row,
            position: self.live.len() - 1,
        }));
        Ok(slot)
    }

    /// Replace the row in `slot`.
    ///
    /// The old row's index entries are withdrawn while the new row is
    /// checked. On a collision they are restored and the old row stays in
    /// place, unchanged.
    pub fn update_row(&mut self, slot: usize, row: Row) -> Result<(), RegistryError> {
        let old = self.live_row(slot)?;
        let old_signatures = self.signatures(old);
        self.withdraw(&old_signatures);

        match self.free_signatures(&row) {
            Ok(signatures) => {
                self.record(slot, signatures);
                if let Some(Some(live)) = self.slots.get_mut(slot) {
                    live.row = row;
                }
                Ok(())
            }
            Err(e) => {
                self.record(slot, old_signatures);
                debug!("Rolled back update of slot {slot}: {e}");
                Err(e)
            }
        }
    }

    /// Tombstone the row in `slot` and return it.
    pub fn delete_row(&mut self, slot: usize) -> Result<Row, RegistryError> {
        let signatures = self.signatures(self.live_row(slot)?);
        self.withdraw(&signatures);

        let live = self.slots[slot]
            .take()
            .ok_or(RegistryError::NotFound(slot))?;

        self.live.swap_remove(live.position);
        if let Some(&moved) = self.live.get(live.position) {
            if let Some(Some(moved_row)) = self.slots.get_mut(moved) {
                moved_row.position = live.position;
            }
        }
        Ok(live.row)
    }

    /// Compact, renumber and persist the live rows, returning how many were saved.
    ///
    /// The snapshot fully replaces the previous one. A save failure is
    /// returned rather than logged, since a lost snapshot breaks the next run.
    pub fn close(self) -> Result<usize, RegistryError> {
        let snapshot = self.snapshot();
        self.store.save(&snapshot)?;
        info!(
            "Closed registry with {} rows ({} slots before compaction)",
            snapshot.num_rows,
            self.slots.len()
        );
        Ok(snapshot.num_rows)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Pick a live row uniformly at random.
    ///
    /// Returns None when no live rows remain.
    pub fn pick_row<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, &Row)> {
        if self.live.is_empty() {
            return None;
        }
        let slot = self.live[rng.random_range(0..self.live.len())];
        self.get(slot).map(|row| (slot, row))
    }

    /// Find the live row whose primary-key values match those in `key`.
    pub fn find_by_primary_key(&self, key: &Row) -> Option<(usize, &Row)> {
        let slot = self.primary.slot_of(&self.primary.signature(key))?;
        self.get(slot).map(|row| (slot, row))
    }

    /// The live row in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&Row> {
        self.slots.get(slot)?.as_ref().map(|live| &live.row)
    }

    /// Number of live rows.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of slots, tombstones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether no live rows remain.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live rows in slot order.
    pub fn live_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, live)| live.as_ref().map(|live| (slot, &live.row)))
    }

    /// The snapshot `close` would save.
    pub fn snapshot(&self) -> SnapshotFile {
        SnapshotFile::from_rows(self.live_rows().map(|(_, row)| row))
    }

    /// Where the snapshot is stored.
    pub fn location(&self) -> String {
        self.store.location()
    }

    // ========================================================================
    // Index bookkeeping
    // ========================================================================

    fn live_row(&self, slot: usize) -> Result<&Row, RegistryError> {
        self.get(slot).ok_or(RegistryError::NotFound(slot))
    }

    fn signatures(&self, row: &Row) -> RowSignatures {
        RowSignatures {
            primary: self.primary.signature(row),
            unique: self.unique.iter().map(|index| index.signature(row)).collect(),
        }
    }

    /// Signatures of `row`, or the first one already owned by a live row.
    fn free_signatures(&self, row: &Row) -> Result<RowSignatures, RegistryError> {
        let signatures = self.signatures(row);

        let keys = std::iter::once((&self.primary, &signatures.primary))
            .chain(self.unique.iter().zip(&signatures.unique));
        for (index, signature) in keys {
            if index.slot_of(signature).is_some() {
                return Err(RegistryError::ConstraintViolation {
                    key: index.label().to_string(),
                    signature: index.describe(signature),
                });
            }
        }
        Ok(signatures)
    }

    fn record(&mut self, slot: usize, signatures: RowSignatures) {
        self.primary.insert(signatures.primary, slot);
        for (index, signature) in self.unique.iter_mut().zip(signatures.unique) {
            index.insert(signature, slot);
        }
    }

    fn withdraw(&mut self, signatures: &RowSignatures) {
        self.primary.remove(&signatures.primary);
        for (index, signature) in self.unique.iter_mut().zip(&signatures.unique) {
            index.remove(signature);
        }
    }

    /// Check that every live row owns exactly its own index entries.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        let indexes = std::iter::once(&self.primary).chain(&self.unique);
        for index in indexes {
            if index.len() != self.live.len() {
                return Err(format!(
                    "{} has {} entries for {} live rows",
                    index.label(),
                    index.len(),
                    self.live.len()
                ));
            }
            for (signature, slot) in index.entries() {
                let row = self
                    .get(slot)
                    .ok_or_else(|| format!("{} points at dead slot {slot}", index.label()))?;
                if &index.signature(row) != signature {
                    return Err(format!("{} entry for slot {slot} is stale", index.label()));
                }
            }
        }
        for (position, &slot) in self.live.iter().enumerate() {
            match self.slots.get(slot) {
                Some(Some(live)) if live.position == position => {}
                _ => return Err(format!("live list position {position} is stale")),
            }
        }
        Ok(())
    }
}
