//! Core types for the mess DML generator.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace:
//!
//! - [`TableSchema`] - Table definition loaded from YAML (or JSON)
//! - [`FieldType`] / [`GeneratorConfig`] - Column types and their generation rules
//! - [`Value`] / [`Row`] - Generated values and simulated table rows
//! - [`KeyPart`] - Hashable composite-key element used for constraint signatures
//! - [`DmlKind`] - Which statement shape a generation request produces
//!
//! # Architecture
//!
//! ```text
//! mess-core (this crate)
//!    │
//!    ├─── value-generator      (random values per field)
//!    ├─── row-registry         (simulated rows, PK/UK indexes, snapshot)
//!    └─── statement-generator  (INSERT / UPDATE / DELETE text)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mess_core::TableSchema;
//!
//! let schema = TableSchema::from_yaml(r#"
//! table: users
//! primary_keys: [id]
//! fields:
//!   - name: id
//!     type: int
//!     generator:
//!       type: int_range
//!       min: 1
//!       max: 100
//! "#).unwrap();
//!
//! assert_eq!(schema.primary_keys(), ["id".to_string()]);
//! ```

pub mod dml;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use dml::{DmlKind, ParseDmlKindError};
pub use schema::{FieldSchema, GeneratorConfig, SchemaError, TableSchema};
pub use types::FieldType;
pub use values::{KeyPart, Row, Value, ValueDecodeError};
