//! Error types for statement generation.

use mess_core::DmlKind;
use row_registry::RegistryError;
use thiserror::Error;
use value_generator::GeneratorError;

/// Errors that can occur while generating one statement.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Malformed request or configuration.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// UPDATE or DELETE requested but no live rows remain.
    #[error("No rows available to {0}")]
    NoRowsAvailable(DmlKind),

    /// Every candidate within the attempt limit collided with an existing key.
    #[error("Gave up generating {kind} after {attempts} conflicting candidates")]
    ConstraintExhausted { kind: DmlKind, attempts: u32 },

    /// Registry error other than a retryable constraint violation.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Value generation error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}

/// A batch that stopped early.
///
/// Carries the statements generated before the failure; they are already
/// reflected in the registry and must still be emitted.
#[derive(Error, Debug)]
#[error("Generated {} of {requested} statements: {source}", .statements.len())]
pub struct BatchError {
    /// Statements generated before the failure, in order
    pub statements: Vec<String>,
    /// Number of statements requested
    pub requested: u64,
    /// Why the batch stopped
    pub source: GenerateError,
}

impl BatchError {
    /// Split into the partial statements and the cause.
    pub fn into_parts(self) -> (Vec<String>, GenerateError) {
        (self.statements, self.source)
    }
}
