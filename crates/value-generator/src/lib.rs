//! Random value generation for the mess DML generator.
//!
//! This crate provides the `DataGenerator` which produces one random value per
//! schema field. The generator owns an explicit `StdRng`; given the same seed
//! and the same sequence of calls it produces the same values.
//!
//! # Architecture
//!
//! ```text
//! TableSchema (YAML)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │  null_probability?
//!          ▼
//!   generators::* primitives ──► Value
//! ```
//!
//! # Example
//!
//! ```rust
//! use mess_core::TableSchema;
//! use value_generator::DataGenerator;
//!
//! let schema = TableSchema::from_yaml(r#"
//! table: users
//! primary_keys: [id]
//! fields:
//!   - name: id
//!     type: int
//!     generator: { type: int_range, min: 1, max: 10 }
//!   - name: nickname
//!     type: string
//!     generator: { type: words, num: 2 }
//! "#).unwrap();
//!
//! let mut generator = DataGenerator::seeded(42);
//! let row = generator.generate_row(&schema).unwrap();
//! assert_eq!(row.len(), 2);
//! ```
//!
//! # Generators
//!
//! - `int_range` - Random integers in an inclusive range
//! - `float_range` - Random floats in a range
//! - `float_digits` - Random floats with fixed precision and scale
//! - `ascii` - Random strings over letters, digits and punctuation
//! - `words` / `sentences` / `paragraphs` - Lorem-style text
//! - `uuid` - UUID text derived from the RNG
//! - `date_range` / `time_range` / `datetime_range` - Temporal values
//! - `one_of` / `subset_of` - Enum and set selection
//! - `json_object` - JSON object with random integer members
//! - `static` - A fixed value

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DataGenerator, GeneratorError};
