//! Registry error types.

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// A live row already owns the primary-key or unique-key signature
    #[error("Duplicate {key}: {signature}")]
    ConstraintViolation { key: String, signature: String },

    /// The slot does not hold a live row
    #[error("No live row in slot {0}")]
    NotFound(usize),

    /// The snapshot exists but is malformed or internally inconsistent
    #[error("Failed to load snapshot {path}: {reason}")]
    Load { path: String, reason: String },

    /// The snapshot could not be written
    #[error("Failed to persist snapshot {path}: {reason}")]
    Persist { path: String, reason: String },
}

impl RegistryError {
    /// Whether retrying with different values can succeed.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}
