//! Individual value generators for different data types.
//!
//! Each primitive takes explicit bounds and a caller-supplied RNG, and fails
//! only when the bounds are malformed. [`generate_value`] dispatches on a
//! field's generator configuration and wraps the primitive's output in the
//! [`Value`] variant of the field's type.

pub mod choice;
pub mod json;
pub mod numeric;
pub mod static_value;
pub mod temporal;
pub mod text;

use crate::GeneratorError;
use mess_core::{FieldSchema, GeneratorConfig, Value};
use rand::Rng;

/// Generate a non-null value for the field from its generator configuration.
pub fn generate_value<R: Rng + ?Sized>(
    field: &FieldSchema,
    rng: &mut R,
) -> Result<Value, GeneratorError> {
    let value = match &field.generator {
        GeneratorConfig::IntRange { min, max } => Value::Int(numeric::int_range(rng, *min, *max)?),

        GeneratorConfig::FloatRange { min, max } => {
            Value::Float(numeric::float_range(rng, *min, *max)?)
        }

        GeneratorConfig::FloatDigits { precision, scale } => {
            Value::Float(numeric::float_digits(rng, *precision, *scale)?)
        }

        GeneratorConfig::Ascii {
            min_length,
            max_length,
        } => Value::String(text::ascii(rng, *min_length, *max_length)?),

        GeneratorConfig::Words { num } => Value::String(text::words(rng, *num)?),

        GeneratorConfig::Sentences { num } => Value::String(text::sentences(rng, *num)?),

        GeneratorConfig::Paragraphs { num } => Value::String(text::paragraphs(rng, *num)?),

        GeneratorConfig::Uuid => Value::String(text::uuid(rng)),

        GeneratorConfig::DateRange { start, end } => {
            Value::Date(temporal::date_range(rng, *start, *end)?)
        }

        GeneratorConfig::TimeRange { start, end } => {
            Value::Time(temporal::time_range(rng, *start, *end)?)
        }

        GeneratorConfig::DateTimeRange { start, end } => {
            Value::DateTime(temporal::datetime_range(rng, *start, *end)?)
        }

        GeneratorConfig::OneOf { .. } => Value::String(choice::one_of(rng, field.choice_values())?),

        GeneratorConfig::SubsetOf { .. } => {
            Value::String(choice::subset_of(rng, field.choice_values())?)
        }

        GeneratorConfig::JsonObject { keys, min, max } => {
            Value::json(json::json_object(rng, keys, *min, *max)?)
        }

        GeneratorConfig::Static { value } => {
            static_value::yaml_to_value(&field.field_type, value).map_err(|reason| {
                GeneratorError::Conversion {
                    field: field.name.clone(),
                    reason,
                }
            })?
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mess_core::FieldType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_value_variant_follows_field_type() {
        let mut rng = StdRng::seed_from_u64(42);
        let cases = [
            (FieldSchema::new("a", FieldType::Int), "int"),
            (FieldSchema::new("b", FieldType::Float), "float"),
            (FieldSchema::new("c", FieldType::String), "string"),
            (FieldSchema::new("d", FieldType::Date), "date"),
            (FieldSchema::new("e", FieldType::Time), "time"),
            (FieldSchema::new("f", FieldType::DateTime), "datetime"),
            (FieldSchema::new("g", FieldType::Json), "json"),
        ];

        for (field, expected) in cases {
            let value = generate_value(&field, &mut rng).unwrap();
            let actual = match value {
                Value::Int(_) => "int",
                Value::Float(_) => "float",
                Value::String(_) => "string",
                Value::Date(_) => "date",
                Value::Time(_) => "time",
                Value::DateTime(_) => "datetime",
                Value::Json(_) => "json",
                Value::Null => "null",
            };
            assert_eq!(actual, expected, "field {}", field.name);
        }
    }

    #[test]
    fn test_enum_default_choices() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = FieldSchema::new(
            "size",
            FieldType::Enum {
                values: vec!["s".into(), "m".into()],
            },
        );

        for _ in 0..20 {
            let value = generate_value(&field, &mut rng).unwrap();
            assert!(matches!(value.as_str(), Some("s") | Some("m")));
        }
    }

    #[test]
    fn test_static_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = FieldSchema::new("v", FieldType::Date).with_generator(GeneratorConfig::Static {
            value: serde_yaml::from_str("2001-02-03").unwrap(),
        });

        let value = generate_value(&field, &mut rng).unwrap();
        assert_eq!(value.temporal_text().unwrap(), "2001-02-03");
    }

    #[test]
    fn test_malformed_bounds_surface_error() {
        let mut rng = StdRng::seed_from_u64(42);
        // Built directly, bypassing schema validation
        let field = FieldSchema::new("n", FieldType::Int)
            .with_generator(GeneratorConfig::IntRange { min: 5, max: 1 });

        let result = generate_value(&field, &mut rng);
        assert!(matches!(result, Err(GeneratorError::InvalidBounds(_))));
    }
}
