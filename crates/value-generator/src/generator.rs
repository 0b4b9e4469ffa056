//! Main data generator for producing field values and rows.

use crate::generators::generate_value;
use mess_core::{FieldSchema, Row, TableSchema, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Bounds or parameters a primitive cannot draw from (e.g. max < min)
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// A generated value could not be represented as the field's type
    #[error("Cannot convert value for field '{field}': {reason}")]
    Conversion { field: String, reason: String },
}

/// Data generator that produces random field values.
///
/// The generator owns the random source used for every draw made during a
/// generation session, including row picks and column selection, so a seeded
/// run is fully reproducible.
pub struct DataGenerator {
    /// Seed the RNG was created from, if any
    seed: Option<u64>,
    /// Random number generator
    rng: StdRng,
    /// Number of field values produced so far
    values_generated: u64,
}

impl DataGenerator {
    /// Create a generator, seeded when `seed` is given and from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            seed,
            rng,
            values_generated: 0,
        }
    }

    /// Create a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Seed this generator was created from.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of field values produced so far.
    pub fn values_generated(&self) -> u64 {
        self.values_generated
    }

    /// Mutable access to the underlying RNG.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Returns `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        probability > 0.0 && self.rng.random_bool(probability.min(1.0))
    }

    /// Generate one value for a field, honoring its null probability.
    pub fn generate_field(&mut self, field: &FieldSchema) -> Result<Value, GeneratorError> {
        self.values_generated += 1;
        if self.chance(field.null_probability) {
            return Ok(Value::Null);
        }
        generate_value(field, &mut self.rng)
    }

    /// Generate a value for every field of the schema.
    pub fn generate_row(&mut self, schema: &TableSchema) -> Result<Row, GeneratorError> {
        self.generate_fields(schema.fields())
    }

    /// Generate a value for each of the given fields.
    pub fn generate_fields<'a, I>(&mut self, fields: I) -> Result<Row, GeneratorError>
    where
        I: IntoIterator<Item = &'a FieldSchema>,
    {
        let mut row = Row::new();
        for field in fields {
            let value = self.generate_field(field)?;
            row.insert(field.name.clone(), value);
        }
        Ok(row)
    }
}
