//! Constraint-satisfying statement generation.

use mess_core::{DmlKind, FieldSchema, Row, TableSchema, Value};
use row_registry::RowRegistry;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use value_generator::DataGenerator;

use crate::dialect::Dialect;
use crate::error::{BatchError, GenerateError};

/// Retry and UPDATE-shape settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateConfig {
    /// Conflicting candidates tolerated per statement; `None` retries forever.
    pub max_attempts: Option<u32>,
    /// Probability that an UPDATE leaves an eligible column out of its SET
    /// clause, in `[0, 1)`.
    pub update_skip_probability: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            update_skip_probability: 0.5,
        }
    }
}

impl GenerateConfig {
    fn validate(&self) -> Result<(), GenerateError> {
        if self.max_attempts == Some(0) {
            return Err(GenerateError::InvalidArgument(
                "max_attempts should be greater than zero".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.update_skip_probability) {
            return Err(GenerateError::InvalidArgument(format!(
                "update_skip_probability {} is outside [0, 1)",
                self.update_skip_probability
            )));
        }
        Ok(())
    }
}

/// Counters for a generation session.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    /// Statements generated.
    pub statements: u64,
    /// Candidates discarded because of a key collision.
    pub rejected: u64,
    /// Time spent generating.
    pub elapsed: Duration,
}

impl GenerateStats {
    /// Calculate statements per second.
    pub fn statements_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.statements as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Generates statements and applies each one to the registry.
///
/// Every returned statement corresponds to exactly one registry mutation,
/// so closing the registry afterwards saves the table state the statements
/// lead to.
pub struct StatementGenerator {
    schema: TableSchema,
    registry: RowRegistry,
    dialect: Box<dyn Dialect>,
    config: GenerateConfig,
    generator: DataGenerator,
    stats: GenerateStats,
}

impl StatementGenerator {
    /// Create a statement generator.
    ///
    /// # Arguments
    ///
    /// * `schema` - Table the statements target
    /// * `registry` - Rows currently in the simulated table
    /// * `dialect` - SQL dialect for rendering
    /// * `config` - Retry and UPDATE-shape settings
    /// * `generator` - Source of every random draw, including row picks
    pub fn new(
        schema: TableSchema,
        registry: RowRegistry,
        dialect: Box<dyn Dialect>,
        config: GenerateConfig,
        generator: DataGenerator,
    ) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self {
            schema,
            registry,
            dialect,
            config,
            generator,
            stats: GenerateStats::default(),
        })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &RowRegistry {
        &self.registry
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &GenerateStats {
        &self.stats
    }

    /// Release the registry, typically to close it.
    pub fn into_registry(self) -> RowRegistry {
        self.registry
    }

    /// Generate `count` statements of one kind, in order.
    ///
    /// Stops at the first non-retryable failure. The statements generated
    /// before it are returned inside the [`BatchError`].
    pub fn generate_batch(
        &mut self,
        kind: DmlKind,
        count: u64,
    ) -> Result<Vec<String>, BatchError> {
        if count == 0 {
            return Err(BatchError {
                statements: Vec::new(),
                requested: count,
                source: GenerateError::InvalidArgument(
                    "number of rows should be greater than zero".to_string(),
                ),
            });
        }

        info!(
            "Generating {} {} statements for table '{}' ({})",
            count,
            kind,
            self.schema.table(),
            self.dialect.name()
        );

        let start = Instant::now();
        let rejected_before = self.stats.rejected;
        let mut statements = Vec::with_capacity(count.min(1 << 16) as usize);

        for _ in 0..count {
            match self.generate_one(kind) {
                Ok(statement) => statements.push(statement),
                Err(e) => {
                    warn!(
                        "Stopped {} batch after {} of {} statements: {}",
                        kind,
                        statements.len(),
                        count,
                        e
                    );
                    return Err(BatchError {
                        statements,
                        requested: count,
                        source: e,
                    });
                }
            }
        }

        let elapsed = start.elapsed();
        info!(
            "Generated {} {} statements in {:?} ({} conflicting candidates discarded, {:.2} statements/sec)",
            statements.len(),
            kind,
            elapsed,
            self.stats.rejected - rejected_before,
            statements.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
        Ok(statements)
    }

    /// Generate one statement and apply it to the registry.
    pub fn generate_one(&mut self, kind: DmlKind) -> Result<String, GenerateError> {
        let start = Instant::now();
        let result = match kind {
            DmlKind::Insert => self.generate_insert(),
            DmlKind::Update => self.generate_update(),
            DmlKind::Delete => self.generate_delete(),
        };
        self.stats.elapsed += start.elapsed();
        if result.is_ok() {
            self.stats.statements += 1;
        }
        result
    }

    // ========================================================================
    // Per-kind generation
    // ========================================================================

    fn generate_insert(&mut self) -> Result<String, GenerateError> {
        let Self {
            schema,
            registry,
            generator,
            config,
            stats,
            dialect,
        } = self;

        // A colliding candidate is discarded whole and regenerated
        let slot = with_retries(DmlKind::Insert, config.max_attempts, stats, || {
            let row = generator.generate_row(schema)?;
            Ok(registry.insert_row(row)?)
        })?;

        let row = registry
            .get(slot)
            .ok_or(row_registry::RegistryError::NotFound(slot))?;
        let columns: Vec<(&str, &Value)> = schema
            .fields()
            .iter()
            .map(|field| (field.name.as_str(), row.value_or_null(&field.name)))
            .collect();
        Ok(dialect.insert(schema.table(), &columns))
    }

    fn generate_update(&mut self) -> Result<String, GenerateError> {
        let Self {
            schema,
            registry,
            generator,
            config,
            stats,
            dialect,
        } = self;

        let eligible: Vec<&FieldSchema> = schema.non_primary_fields().collect();
        if eligible.is_empty() {
            return Err(GenerateError::InvalidArgument(format!(
                "table '{}' has no non-primary-key fields to update",
                schema.table()
            )));
        }

        // Never a no-op: redraw until at least one column is chosen
        let chosen: Vec<&FieldSchema> = loop {
            let chosen: Vec<&FieldSchema> = eligible
                .iter()
                .copied()
                .filter(|_| !generator.chance(config.update_skip_probability))
                .collect();
            if !chosen.is_empty() {
                break chosen;
            }
        };

        let (slot, old) = registry
            .pick_row(generator.rng_mut())
            .map(|(slot, row)| (slot, row.clone()))
            .ok_or(GenerateError::NoRowsAvailable(DmlKind::Update))?;

        with_retries(DmlKind::Update, config.max_attempts, stats, || {
            let mut row = old.clone();
            for field in &chosen {
                row.insert(field.name.clone(), generator.generate_field(field)?);
            }
            Ok(registry.update_row(slot, row)?)
        })?;

        let row = registry
            .get(slot)
            .ok_or(row_registry::RegistryError::NotFound(slot))?;
        let set: Vec<(&str, &Value)> = chosen
            .iter()
            .map(|field| (field.name.as_str(), row.value_or_null(&field.name)))
            .collect();
        let key = primary_key_columns(schema, &old);
        Ok(dialect.update(schema.table(), &set, &key))
    }

    fn generate_delete(&mut self) -> Result<String, GenerateError> {
        let slot = self
            .registry
            .pick_row(self.generator.rng_mut())
            .map(|(slot, _)| slot)
            .ok_or(GenerateError::NoRowsAvailable(DmlKind::Delete))?;

        let row = self.registry.delete_row(slot)?;
        let key = primary_key_columns(&self.schema, &row);
        Ok(self.dialect.delete(self.schema.table(), &key))
    }
}

/// Primary-key columns of `row`, in key order.
fn primary_key_columns<'a>(schema: &'a TableSchema, row: &'a Row) -> Vec<(&'a str, &'a Value)> {
    schema
        .primary_keys()
        .iter()
        .map(|pk| (pk.as_str(), row.value_or_null(pk)))
        .collect()
}

/// Run `attempt` until it stops failing with a constraint violation.
///
/// Other errors are returned as they are. With `max_attempts` set, gives
/// up with [`GenerateError::ConstraintExhausted`] after that many
/// violations.
fn with_retries<T>(
    kind: DmlKind,
    max_attempts: Option<u32>,
    stats: &mut GenerateStats,
    mut attempt: impl FnMut() -> Result<T, GenerateError>,
) -> Result<T, GenerateError> {
    let mut attempts = 0u32;
    loop {
        match attempt() {
            Err(GenerateError::Registry(e)) if e.is_constraint_violation() => {
                attempts += 1;
                stats.rejected += 1;
                debug!("Discarded {kind} candidate (attempt {attempts}): {e}");
                if max_attempts.is_some_and(|max| attempts >= max) {
                    return Err(GenerateError::ConstraintExhausted { kind, attempts });
                }
            }
            other => return other,
        }
    }
}
