//! Row registry for the mess DML generator.
//!
//! The registry is an in-memory simulation of a single table: the rows that
//! currently exist plus derived primary-key and unique-key indexes. It lets
//! UPDATE and DELETE statements target rows that earlier INSERTs created,
//! across separate process runs, without a live database.
//!
//! # Architecture
//!
//! - [`RowRegistry`] - Slot-addressed rows with tombstones and key indexes
//! - [`Signature`] - Composite key built from a row's key-field values
//! - [`SnapshotFile`] - Persisted `{"num_rows": N, "rows": [...]}` document
//! - [`SnapshotStore`] - Storage backend for snapshots
//!
//! ## Storage Backends
//!
//! - `FilesystemStore` - JSON file, replaced atomically on every save
//! - `MemoryStore` - In-process snapshot, for tests and dry runs
//!
//! # Lifecycle
//!
//! A registry is opened from a store (restoring and re-indexing any saved
//! rows), mutated through insert, update and delete, and finally closed.
//! Closing drops tombstoned slots, renumbers the remaining rows from zero
//! and saves them. Dropping a registry without closing it discards every
//! mutation since it was opened.

mod error;
mod filesystem;
mod memory;
mod registry;
mod signature;
mod snapshot;
pub mod store;


pub use error::RegistryError;
pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;
pub use registry::RowRegistry;
pub use signature::Signature;
pub use snapshot::SnapshotFile;
pub use store::SnapshotStore;
