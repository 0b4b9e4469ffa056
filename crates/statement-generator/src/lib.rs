//! SQL statement generation for the mess DML generator.
//!
//! This crate drives the value generator and the row registry to produce
//! INSERT, UPDATE and DELETE statements that never violate the table's
//! primary-key or unique-key constraints, given the rows earlier runs
//! created.
//!
//! # Example
//!
//! ```
//! use mess_core::{DmlKind, TableSchema};
//! use row_registry::{MemoryStore, RowRegistry};
//! use statement_generator::{GenerateConfig, MySql, StatementGenerator};
//! use value_generator::DataGenerator;
//!
//! let schema = TableSchema::from_yaml(r#"
//! table: users
//! primary_keys: [id]
//! fields:
//!   - name: id
//!     type: int
//!     generator: { type: int_range, min: 1, max: 1000 }
//!   - name: name
//!     type: string
//!     generator: { type: words, num: 2 }
//! "#).unwrap();
//!
//! let registry = RowRegistry::open(&schema, MemoryStore::new()).unwrap();
//! let mut generator = StatementGenerator::new(
//!     schema,
//!     registry,
//!     Box::new(MySql),
//!     GenerateConfig::default(),
//!     DataGenerator::seeded(42),
//! )
//! .unwrap();
//!
//! let statements = generator.generate_batch(DmlKind::Insert, 3).unwrap();
//! assert_eq!(statements.len(), 3);
//! assert!(statements[0].starts_with("INSERT INTO `users` (`id`, `name`) VALUES ("));
//! ```

pub mod args;
pub mod dialect;
pub mod error;
pub mod generator;

pub use args::GenerateArgs;
pub use dialect::{Dialect, DialectKind, MySql, PostgreSql};
pub use error::{BatchError, GenerateError};
pub use generator::{GenerateConfig, GenerateStats, StatementGenerator};
