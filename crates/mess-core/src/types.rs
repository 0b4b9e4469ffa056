//! Column types understood by the generator.
//!
//! `FieldType` decides two things: which values a generator may produce for a
//! column, and how those values are rendered as SQL literals and stored in the
//! snapshot.
//!
//! # YAML Format
//!
//! Simple types can be specified as strings:
//! ```yaml
//! type: int
//! type: datetime
//! ```
//!
//! Types with parameters use object format:
//! ```yaml
//! type:
//!   type: enum
//!   values: [small, medium, large]
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Column type of a table field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer
    Int,

    /// 64-bit IEEE 754 floating point
    Float,

    /// Character string
    String,

    /// Date only (YYYY-MM-DD)
    Date,

    /// Time only (HH:MM:SS)
    Time,

    /// Date and time without timezone (YYYY-MM-DD HH:MM:SS)
    DateTime,

    /// JSON document
    Json,

    /// Single choice from a fixed list
    Enum {
        /// Allowed values
        values: Vec<String>,
    },

    /// Any subset of a fixed list, stored comma-joined (MySQL SET)
    Set {
        /// Allowed values
        values: Vec<String>,
    },
}

impl FieldType {
    /// Short lowercase name of the type, as written in schema files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Json => "json",
            Self::Enum { .. } => "enum",
            Self::Set { .. } => "set",
        }
    }

    /// Whether literals of this type are rendered unquoted.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Whether values of this type are calendar dates or clock times.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }

    fn from_simple_name(name: &str) -> Option<Self> {
        match name {
            "int" | "integer" | "bigint" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "string" | "text" | "varchar" => Some(Self::String),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "datetime" | "date_time" | "timestamp" => Some(Self::DateTime),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Supports both simple string format ("int") and object format
// ({"type": "enum", "values": [...]})

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Enum { values } | Self::Set { values } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", self.name())?;
                map.serialize_entry("values", values)?;
                map.end()
            }
            _ => serializer.serialize_str(self.name()),
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct FieldTypeVisitor;

        impl<'de> Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a field type")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                FieldType::from_simple_name(value)
                    .ok_or_else(|| E::custom(format!("unknown field type: {value}")))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "enum" => Ok(FieldType::Enum {
                        values: values_field(&fields)?,
                    }),
                    "set" => Ok(FieldType::Set {
                        values: values_field(&fields)?,
                    }),
                    other => FieldType::from_simple_name(other)
                        .ok_or_else(|| M::Error::custom(format!("unknown field type: {other}"))),
                }
            }
        }

        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

fn values_field<E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
) -> Result<Vec<String>, E> {
    let value = fields
        .get("values")
        .ok_or_else(|| E::missing_field("values"))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid 'values': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_types() {
        let cases = [
            ("int", FieldType::Int),
            ("bigint", FieldType::Int),
            ("double", FieldType::Float),
            ("text", FieldType::String),
            ("date", FieldType::Date),
            ("time", FieldType::Time),
            ("datetime", FieldType::DateTime),
            ("json", FieldType::Json),
        ];
        for (name, expected) in cases {
            let parsed: FieldType = serde_yaml::from_str(name).unwrap();
            assert_eq!(parsed, expected, "parsing {name}");
        }
    }

    #[test]
    fn test_parse_map_types() {
        let parsed: FieldType =
            serde_yaml::from_str("{ type: enum, values: [a, b, c] }").unwrap();
        assert_eq!(
            parsed,
            FieldType::Enum {
                values: vec!["a".into(), "b".into(), "c".into()]
            }
        );

        let parsed: FieldType = serde_yaml::from_str("{ type: int }").unwrap();
        assert_eq!(parsed, FieldType::Int);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<FieldType, _> = serde_yaml::from_str("geometry");
        assert!(result.is_err());

        let result: Result<FieldType, _> = serde_yaml::from_str("{ type: set }");
        assert!(result.unwrap_err().to_string().contains("values"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let types = [
            FieldType::Int,
            FieldType::DateTime,
            FieldType::Set {
                values: vec!["x".into(), "y".into()],
            },
        ];
        for ty in types {
            let yaml = serde_yaml::to_string(&ty).unwrap();
            let parsed: FieldType = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(parsed, ty);
        }
    }
}
