//! Table schema definitions.
//!
//! A schema describes one table: its fields (type, generator, null
//! probability), its primary key, and its unique-key groups. It is loaded
//! once from a YAML (or JSON) file and is read-only afterwards.
//!
//! ```yaml
//! table: users
//! primary_keys: [id]
//! unique_keys:
//!   - [email]
//! fields:
//!   - name: id
//!     type: int
//!     generator: { type: int_range, min: 1, max: 1000000 }
//!   - name: email
//!     type: string
//!     null_probability: 0.1
//!     generator: { type: ascii, min_length: 8, max_length: 24 }
//! ```

use crate::types::FieldType;
use crate::values::{Value, DATETIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse schema: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table name missing
    #[error("Table name should not be empty")]
    EmptyTableName,

    /// No primary key declared
    #[error("Primary keys should not be empty")]
    EmptyPrimaryKey,

    /// A unique-key group with no fields
    #[error("Unique key group #{0} should not be empty")]
    EmptyUniqueKey(usize),

    /// Field declared twice
    #[error("Field '{0}' is defined more than once")]
    DuplicateField(String),

    /// Key references an undeclared field
    #[error("{key} field '{field}' is not defined in fields")]
    UnknownKeyField { key: &'static str, field: String },

    /// Primary-key field that may generate NULL
    #[error("Primary key field '{0}' must have null_probability 0")]
    NullablePrimaryKey(String),

    /// Generator cannot produce values of the field's type
    #[error("Generator '{generator}' cannot produce {field_type} values for field '{field}'")]
    IncompatibleGenerator {
        field: String,
        generator: &'static str,
        field_type: FieldType,
    },

    /// Malformed generator bounds or parameters
    #[error("Invalid parameters for field '{field}': {reason}")]
    InvalidBounds { field: String, reason: String },
}

// ============================================================================
// Generator Configuration
// ============================================================================

fn default_date_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("constant date is valid")
}

fn default_date_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2038, 1, 19).expect("constant date is valid")
}

fn default_time_start() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("constant time is valid")
}

fn default_time_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("constant time is valid")
}

fn default_datetime_start() -> NaiveDateTime {
    default_date_start().and_time(default_time_start())
}

fn default_datetime_end() -> NaiveDateTime {
    // Upper bound of a 32-bit TIMESTAMP
    default_date_end()
        .and_hms_opt(3, 14, 7)
        .expect("constant time is valid")
}

fn default_json_max() -> i64 {
    100
}

/// Accepts `YYYY-MM-DD HH:MM:SS` as well as ISO 8601 `YYYY-MM-DDTHH:MM:SS`.
mod datetime_text {
    use super::DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid datetime '{text}': {e}")))
    }
}

/// Generator configuration for a field.
///
/// This enum defines the different value generators available for
/// producing test data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Random floats in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Random floats fitting a DECIMAL(precision, scale)-like column
    FloatDigits {
        /// Total number of digits
        precision: u8,
        /// Digits after the decimal point
        scale: u8,
    },

    /// Random strings over letters, digits and punctuation
    Ascii {
        /// Minimum length (inclusive)
        #[serde(default)]
        min_length: usize,
        /// Maximum length (inclusive)
        max_length: usize,
    },

    /// `num` random words separated by spaces
    Words { num: usize },

    /// `num` random sentences
    Sentences { num: usize },

    /// `num` random paragraphs
    Paragraphs { num: usize },

    /// Random UUID text
    Uuid,

    /// Random dates in a range
    DateRange {
        #[serde(default = "default_date_start")]
        start: NaiveDate,
        #[serde(default = "default_date_end")]
        end: NaiveDate,
    },

    /// Random times of day in a range
    TimeRange {
        #[serde(default = "default_time_start")]
        start: NaiveTime,
        #[serde(default = "default_time_end")]
        end: NaiveTime,
    },

    /// Random datetimes in a range (second precision)
    #[serde(rename = "datetime_range", alias = "date_time_range")]
    DateTimeRange {
        #[serde(default = "default_datetime_start", with = "datetime_text")]
        start: NaiveDateTime,
        #[serde(default = "default_datetime_end", with = "datetime_text")]
        end: NaiveDateTime,
    },

    /// One value from a list (defaults to the enum type's values)
    OneOf {
        #[serde(default)]
        values: Vec<String>,
    },

    /// Any subset of a list, comma-joined (defaults to the set type's values)
    SubsetOf {
        #[serde(default)]
        values: Vec<String>,
    },

    /// JSON object with the given keys mapped to random integers
    JsonObject {
        keys: Vec<String>,
        #[serde(default)]
        min: i64,
        #[serde(default = "default_json_max")]
        max: i64,
    },

    /// A fixed value
    Static { value: serde_yaml::Value },
}

impl GeneratorConfig {
    /// Generator name as written in schema files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntRange { .. } => "int_range",
            Self::FloatRange { .. } => "float_range",
            Self::FloatDigits { .. } => "float_digits",
            Self::Ascii { .. } => "ascii",
            Self::Words { .. } => "words",
            Self::Sentences { .. } => "sentences",
            Self::Paragraphs { .. } => "paragraphs",
            Self::Uuid => "uuid",
            Self::DateRange { .. } => "date_range",
            Self::TimeRange { .. } => "time_range",
            Self::DateTimeRange { .. } => "datetime_range",
            Self::OneOf { .. } => "one_of",
            Self::SubsetOf { .. } => "subset_of",
            Self::JsonObject { .. } => "json_object",
            Self::Static { .. } => "static",
        }
    }

    /// Generator used when a field declares none.
    pub fn default_for(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Int => Self::IntRange {
                min: 0,
                max: i32::MAX as i64,
            },
            FieldType::Float => Self::FloatDigits {
                precision: 10,
                scale: 2,
            },
            FieldType::String => Self::Ascii {
                min_length: 1,
                max_length: 32,
            },
            FieldType::Date => Self::DateRange {
                start: default_date_start(),
                end: default_date_end(),
            },
            FieldType::Time => Self::TimeRange {
                start: default_time_start(),
                end: default_time_end(),
            },
            FieldType::DateTime => Self::DateTimeRange {
                start: default_datetime_start(),
                end: default_datetime_end(),
            },
            FieldType::Json => Self::JsonObject {
                keys: vec!["value".to_string()],
                min: 0,
                max: default_json_max(),
            },
            FieldType::Enum { .. } => Self::OneOf { values: Vec::new() },
            FieldType::Set { .. } => Self::SubsetOf { values: Vec::new() },
        }
    }

    fn supports(&self, field_type: &FieldType) -> bool {
        match self {
            Self::IntRange { .. } => *field_type == FieldType::Int,
            Self::FloatRange { .. } | Self::FloatDigits { .. } => *field_type == FieldType::Float,
            Self::Ascii { .. }
            | Self::Words { .. }
            | Self::Sentences { .. }
            | Self::Paragraphs { .. }
            | Self::Uuid => *field_type == FieldType::String,
            Self::DateRange { .. } => *field_type == FieldType::Date,
            Self::TimeRange { .. } => *field_type == FieldType::Time,
            Self::DateTimeRange { .. } => *field_type == FieldType::DateTime,
            Self::OneOf { .. } => {
                matches!(field_type, FieldType::String | FieldType::Enum { .. })
            }
            Self::SubsetOf { .. } => {
                matches!(field_type, FieldType::String | FieldType::Set { .. })
            }
            Self::JsonObject { .. } => *field_type == FieldType::Json,
            Self::Static { .. } => true,
        }
    }
}

// ============================================================================
// Field and Table Definitions
// ============================================================================

/// Field as written in the schema file, before defaults and validation.
#[derive(Debug, Clone, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default)]
    generator: Option<GeneratorConfig>,
    #[serde(default)]
    null_probability: f64,
}

/// Table as written in the schema file, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawTableSchema {
    table: String,
    primary_keys: Vec<String>,
    #[serde(default)]
    unique_keys: Vec<Vec<String>>,
    fields: Vec<RawField>,
}

/// A validated field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Field name
    pub name: String,

    /// Column type
    pub field_type: FieldType,

    /// Generator producing this field's values
    pub generator: GeneratorConfig,

    /// Probability (0.0 to 1.0) that a generated value is NULL
    pub null_probability: f64,
}

impl FieldSchema {
    /// Create a field using the type's default generator and no NULLs.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let generator = GeneratorConfig::default_for(&field_type);
        Self {
            name: name.into(),
            field_type,
            generator,
            null_probability: 0.0,
        }
    }

    /// Replace the generator.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Replace the null probability.
    pub fn with_null_probability(mut self, null_probability: f64) -> Self {
        self.null_probability = null_probability;
        self
    }

    /// Options a `one_of`/`subset_of` generator draws from: its own list, or
    /// the enum/set type's values when the list is empty.
    pub fn choice_values(&self) -> &[String] {
        let own = match &self.generator {
            GeneratorConfig::OneOf { values } | GeneratorConfig::SubsetOf { values } => {
                values.as_slice()
            }
            _ => &[],
        };
        if !own.is_empty() {
            return own;
        }
        match &self.field_type {
            FieldType::Enum { values } | FieldType::Set { values } => values,
            _ => own,
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> SchemaError {
        SchemaError::InvalidBounds {
            field: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(self.invalid("field name should not be empty"));
        }
        if !(0.0..=1.0).contains(&self.null_probability) {
            return Err(self.invalid(format!(
                "null_probability {} is outside [0, 1]",
                self.null_probability
            )));
        }
        if !self.generator.supports(&self.field_type) {
            return Err(SchemaError::IncompatibleGenerator {
                field: self.name.clone(),
                generator: self.generator.name(),
                field_type: self.field_type.clone(),
            });
        }

        match &self.generator {
            GeneratorConfig::IntRange { min, max } if min > max => {
                Err(self.invalid(format!("max {max} is less than min {min}")))
            }
            GeneratorConfig::FloatRange { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    Err(self.invalid("float bounds must be finite"))
                } else if min > max {
                    Err(self.invalid(format!("max {max} is less than min {min}")))
                } else {
                    Ok(())
                }
            }
            GeneratorConfig::FloatDigits { precision, scale } => {
                if *precision == 0 || *precision > 18 {
                    Err(self.invalid(format!("precision {precision} is outside 1..=18")))
                } else if scale > precision {
                    Err(self.invalid(format!(
                        "scale {scale} is greater than precision {precision}"
                    )))
                } else {
                    Ok(())
                }
            }
            GeneratorConfig::Ascii {
                min_length,
                max_length,
            } if min_length > max_length => Err(self.invalid(format!(
                "max_length {max_length} is less than min_length {min_length}"
            ))),
            GeneratorConfig::Words { num }
            | GeneratorConfig::Sentences { num }
            | GeneratorConfig::Paragraphs { num }
                if *num == 0 =>
            {
                Err(self.invalid("num should be at least 1"))
            }
            GeneratorConfig::DateRange { start, end } if start > end => {
                Err(self.invalid(format!("end {end} is before start {start}")))
            }
            GeneratorConfig::TimeRange { start, end } if start > end => {
                Err(self.invalid(format!("end {end} is before start {start}")))
            }
            GeneratorConfig::DateTimeRange { start, end } if start > end => {
                Err(self.invalid(format!("end {end} is before start {start}")))
            }
            GeneratorConfig::OneOf { .. } | GeneratorConfig::SubsetOf { .. } => {
                self.validate_choices()
            }
            GeneratorConfig::JsonObject { min, max, .. } if min > max => {
                Err(self.invalid(format!("max {max} is less than min {min}")))
            }
            GeneratorConfig::Static { value } => {
                let json = serde_json::to_value(value)
                    .map_err(|e| self.invalid(format!("static value: {e}")))?;
                Value::from_json(&self.field_type, &json)
                    .map(|_| ())
                    .map_err(|e| self.invalid(format!("static value: {e}")))
            }
            _ => Ok(()),
        }
    }

    fn validate_choices(&self) -> Result<(), SchemaError> {
        let choices = self.choice_values();
        if choices.is_empty() {
            return Err(self.invalid("no values to choose from"));
        }
        if let FieldType::Enum { values } | FieldType::Set { values } = &self.field_type {
            if let Some(unknown) = choices.iter().find(|c| !values.contains(c)) {
                return Err(self.invalid(format!(
                    "value '{unknown}' is not allowed by the {} type",
                    self.field_type
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<RawField> for FieldSchema {
    type Error = SchemaError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let generator = raw
            .generator
            .unwrap_or_else(|| GeneratorConfig::default_for(&raw.field_type));
        let field = FieldSchema {
            name: raw.name,
            field_type: raw.field_type,
            generator,
            null_probability: raw.null_probability,
        };
        field.validate()?;
        Ok(field)
    }
}

/// A validated table schema.
///
/// Primary keys and each unique-key group are sorted by field name, so
/// signatures built from them are canonical. Fields keep their declaration
/// order, which is the column order of generated INSERT statements.
#[derive(Debug, Clone)]
pub struct TableSchema {
    table: String,
    fields: Vec<FieldSchema>,
    primary_keys: Vec<String>,
    unique_keys: Vec<Vec<String>>,

    /// Cached field lookup
    field_map: HashMap<String, usize>,
}

impl TableSchema {
    /// Build and validate a schema.
    pub fn new(
        table: impl Into<String>,
        fields: Vec<FieldSchema>,
        mut primary_keys: Vec<String>,
        mut unique_keys: Vec<Vec<String>>,
    ) -> Result<Self, SchemaError> {
        let table = table.into();
        if table.is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        let mut field_map = HashMap::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            field.validate()?;
            if field_map.insert(field.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        if primary_keys.is_empty() {
            return Err(SchemaError::EmptyPrimaryKey);
        }
        primary_keys.sort();
        primary_keys.dedup();
        for pk in &primary_keys {
            let idx = field_map
                .get(pk)
                .ok_or_else(|| SchemaError::UnknownKeyField {
                    key: "Primary key",
                    field: pk.clone(),
                })?;
            if fields[*idx].null_probability > 0.0 {
                return Err(SchemaError::NullablePrimaryKey(pk.clone()));
            }
        }

        let mut seen_groups = HashSet::new();
        for (group_idx, group) in unique_keys.iter_mut().enumerate() {
            if group.is_empty() {
                return Err(SchemaError::EmptyUniqueKey(group_idx));
            }
            group.sort();
            group.dedup();
            if let Some(unknown) = group.iter().find(|f| !field_map.contains_key(*f)) {
                return Err(SchemaError::UnknownKeyField {
                    key: "Unique key",
                    field: unknown.clone(),
                });
            }
            seen_groups.insert(group.clone());
        }
        // Identical groups would only duplicate index work
        if seen_groups.len() != unique_keys.len() {
            let mut kept = HashSet::new();
            unique_keys.retain(|group| kept.insert(group.clone()));
        }

        Ok(Self {
            table,
            fields,
            primary_keys,
            unique_keys,
            field_map,
        })
    }

    /// Load schema from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from a YAML (or JSON) string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let raw: RawTableSchema = serde_yaml::from_str(yaml)?;
        let fields = raw
            .fields
            .into_iter()
            .map(FieldSchema::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(raw.table, fields, raw.primary_keys, raw.unique_keys)
    }

    /// Table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.field_map.get(name).map(|&idx| &self.fields[idx])
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Primary-key field names, sorted.
    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    /// Unique-key groups, each sorted.
    pub fn unique_keys(&self) -> &[Vec<String>] {
        &self.unique_keys
    }

    /// Whether `name` is part of the primary key.
    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_keys.iter().any(|pk| pk == name)
    }

    /// Fields that are not part of the primary key, in declaration order.
    pub fn non_primary_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| !self.is_primary_key(&f.name))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
table: users
primary_keys: [tenant, id]
unique_keys:
  - [handle, email]
fields:
  - name: id
    type: int
    generator:
      type: int_range
      min: 1
      max: 1000
  - name: tenant
    type: int
    generator:
      type: int_range
      min: 1
      max: 3
  - name: email
    type: string
    generator:
      type: ascii
      min_length: 5
      max_length: 20
  - name: handle
    type: string
    null_probability: 0.25
    generator:
      type: words
      num: 2
  - name: size
    type:
      type: enum
      values: [s, m, l]
  - name: created_at
    type: datetime
    generator:
      type: datetime_range
      start: "2020-01-01 00:00:00"
      end: "2020-12-31T23:59:59"
"#;

    #[test]
    fn test_parse_schema() {
        let schema = TableSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.table(), "users");
        assert_eq!(
            schema.field_names(),
            vec!["id", "tenant", "email", "handle", "size", "created_at"]
        );
        // Keys are sorted canonically
        assert_eq!(schema.primary_keys(), ["id".to_string(), "tenant".to_string()]);
        assert_eq!(
            schema.unique_keys(),
            [vec!["email".to_string(), "handle".to_string()]]
        );

        let handle = schema.field("handle").unwrap();
        assert_eq!(handle.null_probability, 0.25);
        assert_eq!(handle.generator, GeneratorConfig::Words { num: 2 });
    }

    #[test]
    fn test_default_generator_for_enum() {
        let schema = TableSchema::from_yaml(SAMPLE_SCHEMA).unwrap();
        let size = schema.field("size").unwrap();

        assert_eq!(size.generator, GeneratorConfig::OneOf { values: vec![] });
        assert_eq!(size.choice_values(), ["s", "m", "l"]);
    }

    #[test]
    fn test_datetime_bounds_accept_both_formats() {
        let schema = TableSchema::from_yaml(SAMPLE_SCHEMA).unwrap();
        let created_at = schema.field("created_at").unwrap();

        let GeneratorConfig::DateTimeRange { start, end } = &created_at.generator else {
            panic!("expected datetime_range, got {:?}", created_at.generator);
        };
        assert_eq!(start.to_string(), "2020-01-01 00:00:00");
        assert_eq!(end.to_string(), "2020-12-31 23:59:59");
    }

    #[test]
    fn test_is_primary_key_and_non_primary_fields() {
        let schema = TableSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert!(schema.is_primary_key("id"));
        assert!(!schema.is_primary_key("email"));
        let names: Vec<_> = schema.non_primary_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "handle", "size", "created_at"]);
    }

    #[test]
    fn test_json_schema_is_accepted() {
        let json = r#"{
            "table": "t",
            "primary_keys": ["id"],
            "fields": [{"name": "id", "type": "int"}]
        }"#;
        let schema = TableSchema::from_yaml(json).unwrap();
        assert_eq!(schema.fields().len(), 1);
    }

    #[test]
    fn test_empty_primary_keys() {
        let yaml = r#"
table: t
primary_keys: []
fields:
  - name: id
    type: int
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::EmptyPrimaryKey)));
    }

    #[test]
    fn test_unknown_primary_key_field() {
        let yaml = r#"
table: t
primary_keys: [missing]
fields:
  - name: id
    type: int
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::UnknownKeyField { field, .. }) if field == "missing"
        ));
    }

    #[test]
    fn test_unknown_unique_key_field() {
        let yaml = r#"
table: t
primary_keys: [id]
unique_keys: [[id, nope]]
fields:
  - name: id
    type: int
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::UnknownKeyField { key: "Unique key", .. })
        ));
    }

    #[test]
    fn test_malformed_int_bounds() {
        let yaml = r#"
table: t
primary_keys: [id]
fields:
  - name: id
    type: int
    generator: { type: int_range, min: 10, max: 1 }
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::InvalidBounds { .. })));
    }

    #[test]
    fn test_incompatible_generator() {
        let yaml = r#"
table: t
primary_keys: [id]
fields:
  - name: id
    type: int
    generator: { type: ascii, min_length: 1, max_length: 2 }
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::IncompatibleGenerator { generator: "ascii", .. })
        ));
    }

    #[test]
    fn test_nullable_primary_key_rejected() {
        let yaml = r#"
table: t
primary_keys: [id]
fields:
  - name: id
    type: int
    null_probability: 0.5
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::NullablePrimaryKey(f)) if f == "id"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let fields = vec![
            FieldSchema::new("id", FieldType::Int),
            FieldSchema::new("id", FieldType::String),
        ];
        let result = TableSchema::new("t", fields, vec!["id".into()], vec![]);
        assert!(matches!(result, Err(SchemaError::DuplicateField(f)) if f == "id"));
    }

    #[test]
    fn test_static_value_must_match_type() {
        let ok = FieldSchema::new("n", FieldType::Int).with_generator(GeneratorConfig::Static {
            value: serde_yaml::from_str("7").unwrap(),
        });
        assert!(ok.validate().is_ok());

        let bad = FieldSchema::new("n", FieldType::Int).with_generator(GeneratorConfig::Static {
            value: serde_yaml::from_str("seven").unwrap(),
        });
        assert!(matches!(bad.validate(), Err(SchemaError::InvalidBounds { .. })));
    }

    #[test]
    fn test_enum_choices_must_be_allowed() {
        let field = FieldSchema::new(
            "size",
            FieldType::Enum {
                values: vec!["s".into(), "m".into()],
            },
        )
        .with_generator(GeneratorConfig::OneOf {
            values: vec!["xl".into()],
        });
        assert!(matches!(field.validate(), Err(SchemaError::InvalidBounds { .. })));
    }

    #[test]
    fn test_duplicate_unique_groups_collapse() {
        let fields = vec![
            FieldSchema::new("id", FieldType::Int),
            FieldSchema::new("a", FieldType::String),
            FieldSchema::new("b", FieldType::String),
        ];
        let schema = TableSchema::new(
            "t",
            fields,
            vec!["id".into()],
            vec![vec!["b".into(), "a".into()], vec!["a".into(), "b".into()]],
        )
        .unwrap();
        assert_eq!(schema.unique_keys(), [vec!["a".to_string(), "b".to_string()]]);
    }
}
