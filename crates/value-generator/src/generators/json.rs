//! JSON document generator.

use crate::GeneratorError;
use rand::Rng;

/// Generate a JSON object mapping each key to a random integer in `[min, max]`.
pub fn json_object<R: Rng + ?Sized>(
    rng: &mut R,
    keys: &[String],
    min: i64,
    max: i64,
) -> Result<serde_json::Value, GeneratorError> {
    if max < min {
        return Err(GeneratorError::InvalidBounds(format!(
            "json_object max {max} is less than min {min}"
        )));
    }
    let object = keys
        .iter()
        .map(|key| (key.clone(), serde_json::Value::from(rng.random_range(min..=max))))
        .collect::<serde_json::Map<_, _>>();
    Ok(serde_json::Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_json_object_members() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = vec!["a".to_string(), "b".to_string()];

        let doc = json_object(&mut rng, &keys, 1, 3).unwrap();
        let obj = doc.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        for key in &keys {
            let v = obj[key].as_i64().unwrap();
            assert!((1..=3).contains(&v));
        }
    }

    #[test]
    fn test_json_object_without_keys() {
        let mut rng = StdRng::seed_from_u64(42);
        let doc = json_object(&mut rng, &[], 0, 0).unwrap();
        assert_eq!(doc, serde_json::json!({}));
    }
}
