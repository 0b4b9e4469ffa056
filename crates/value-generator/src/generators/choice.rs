//! Categorical generators for enum and set columns.

use crate::GeneratorError;
use rand::Rng;

/// Pick one value uniformly.
pub fn one_of<R: Rng + ?Sized>(rng: &mut R, values: &[String]) -> Result<String, GeneratorError> {
    if values.is_empty() {
        return Err(GeneratorError::InvalidBounds(
            "one_of needs at least one value".to_string(),
        ));
    }
    Ok(values[rng.random_range(0..values.len())].clone())
}

/// Pick a subset, keeping list order, joined with commas.
///
/// Each value is included independently with probability one half, so the
/// empty set is a possible (and valid) result.
pub fn subset_of<R: Rng + ?Sized>(
    rng: &mut R,
    values: &[String],
) -> Result<String, GeneratorError> {
    if values.is_empty() {
        return Err(GeneratorError::InvalidBounds(
            "subset_of needs at least one value".to_string(),
        ));
    }
    let selected: Vec<&str> = values
        .iter()
        .filter(|_| rng.random_bool(0.5))
        .map(String::as_str)
        .collect();
    Ok(selected.join(","))
}
