//! mess library
//!
//! Generates synthetic INSERT, UPDATE and DELETE statements for one table
//! without a live database. A persisted snapshot of the rows earlier runs
//! created keeps every run's statements consistent with the previous ones:
//! UPDATE and DELETE only target rows that exist, and no statement breaks
//! a primary-key or unique-key constraint.
//!
//! # Crates
//!
//! - `mess_core` - Schema model, column types and values
//! - `value_generator` - Random values per column
//! - `row_registry` - Simulated table rows, key indexes and the snapshot
//! - `statement_generator` - Constraint-satisfying statement generation
//!
//! # CLI Usage
//!
//! ```bash
//! # Create 1000 rows
//! mess generate --dml insert --num-rows 1000 --schema-path demos/users.yaml
//!
//! # Then mutate them, reading and rewriting ./metadata.json each time
//! mess generate --dml update --num-rows 500 --schema-path demos/users.yaml
//! mess generate --dml delete --num-rows 100 --schema-path demos/users.yaml \
//!   --output-path delete.sql --dialect postgresql
//! ```

pub mod generate;

pub use generate::{run_generate, GenerateSummary};
pub use statement_generator::GenerateArgs;
