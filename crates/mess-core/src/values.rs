//! Value representations for generated rows.
//!
//! This module defines the values the generator produces, the rows the
//! registry simulates, and the typed JSON representation used when rows are
//! written to (and read back from) the snapshot file.

use crate::types::FieldType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical text format of `date` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical text format of `time` values.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Canonical text format of `datetime` values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single generated column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point (always finite)
    Float(f64),

    /// Character string; also carries enum and set values
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Clock time
    Time(NaiveTime),

    /// Date and time without timezone
    DateTime(NaiveDateTime),

    /// JSON document (never the JSON `null` literal, see [`Value::json`])
    Json(serde_json::Value),
}

/// Error decoding a stored JSON value into a [`Value`] of a given field type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected {expected} value, found {found}")]
pub struct ValueDecodeError {
    /// Field type the value was decoded as
    pub expected: String,
    /// The offending JSON text
    pub found: String,
}

impl Value {
    /// Wrap a JSON document, mapping the JSON `null` literal to SQL NULL.
    pub fn json(document: serde_json::Value) -> Self {
        if document.is_null() {
            Self::Null
        } else {
            Self::Json(document)
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text of temporal values (`YYYY-MM-DD`, `HH:MM:SS`,
    /// `YYYY-MM-DD HH:MM:SS`).
    pub fn temporal_text(&self) -> Option<String> {
        match self {
            Self::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            Self::Time(t) => Some(t.format(TIME_FORMAT).to_string()),
            Self::DateTime(dt) => Some(dt.format(DATETIME_FORMAT).to_string()),
            _ => None,
        }
    }

    /// Convert to the JSON representation stored in snapshots.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => {
                serde_json::Value::String(self.temporal_text().unwrap_or_default())
            }
            Self::Json(doc) => doc.clone(),
        }
    }

    /// Decode a stored JSON value as the given field type.
    pub fn from_json(
        field_type: &FieldType,
        json: &serde_json::Value,
    ) -> Result<Self, ValueDecodeError> {
        if json.is_null() {
            return Ok(Self::Null);
        }

        let mismatch = || ValueDecodeError {
            expected: field_type.name().to_string(),
            found: json.to_string(),
        };

        match field_type {
            FieldType::Int => json.as_i64().map(Self::Int).ok_or_else(mismatch),
            FieldType::Float => json.as_f64().map(Self::Float).ok_or_else(mismatch),
            FieldType::String | FieldType::Enum { .. } | FieldType::Set { .. } => json
                .as_str()
                .map(|s| Self::String(s.to_string()))
                .ok_or_else(mismatch),
            FieldType::Date => json
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
                .map(Self::Date)
                .ok_or_else(mismatch),
            FieldType::Time => json
                .as_str()
                .and_then(|s| NaiveTime::parse_from_str(s, TIME_FORMAT).ok())
                .map(Self::Time)
                .ok_or_else(mismatch),
            FieldType::DateTime => json
                .as_str()
                .and_then(|s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok())
                .map(Self::DateTime)
                .ok_or_else(mismatch),
            FieldType::Json => Ok(Self::Json(json.clone())),
        }
    }

    /// Hashable form of this value for composite-key signatures.
    pub fn key_part(&self) -> KeyPart {
        match self {
            Self::Null => KeyPart::Null,
            Self::Int(i) => KeyPart::Int(*i),
            // -0.0 and 0.0 are the same key in SQL
            Self::Float(f) if *f == 0.0 => KeyPart::Float(0.0f64.to_bits()),
            Self::Float(f) => KeyPart::Float(f.to_bits()),
            Self::String(s) => KeyPart::Text(s.clone()),
            Self::Date(d) => KeyPart::Date(*d),
            Self::Time(t) => KeyPart::Time(*t),
            Self::DateTime(dt) => KeyPart::DateTime(*dt),
            Self::Json(doc) => KeyPart::Json(doc.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => {
                write!(f, "{}", self.temporal_text().unwrap_or_default())
            }
            Self::Json(doc) => write!(f, "{doc}"),
        }
    }
}

/// One element of a primary-key or unique-key signature.
///
/// Unlike `field=value` string concatenation, a tuple of `KeyPart`s cannot
/// collide because of separator characters inside string values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyPart {
    /// NULL (NULLs compare equal inside signatures)
    Null,
    /// Integer
    Int(i64),
    /// Float by bit pattern, with -0.0 folded into 0.0
    Float(u64),
    /// String, enum or set text
    Text(String),
    /// Date
    Date(NaiveDate),
    /// Time
    Time(NaiveTime),
    /// Date and time
    DateTime(NaiveDateTime),
    /// JSON document by its serialized text
    Json(String),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::Time(t) => write!(f, "{}", t.format(TIME_FORMAT)),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Self::Json(text) => f.write_str(text),
        }
    }
}

/// A simulated table row: field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field value by name, reading a missing field as NULL.
    pub fn value_or_null(&self, name: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Set a field value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Number of fields present in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_temporal_text_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let time = NaiveTime::from_hms_opt(7, 5, 9).unwrap();

        assert_eq!(Value::Date(date).temporal_text().unwrap(), "2024-02-29");
        assert_eq!(Value::Time(time).temporal_text().unwrap(), "07:05:09");
        assert_eq!(
            Value::DateTime(date.and_time(time)).temporal_text().unwrap(),
            "2024-02-29 07:05:09"
        );
        assert!(Value::Int(1).temporal_text().is_none());
    }

    #[test]
    fn test_json_roundtrip_per_type() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let cases = [
            (FieldType::Int, Value::Int(-42)),
            (FieldType::Float, Value::Float(0.1 + 0.2)),
            (FieldType::String, Value::String("a=b&c".into())),
            (FieldType::Date, Value::Date(date)),
            (
                FieldType::DateTime,
                Value::DateTime(date.and_hms_opt(23, 59, 59).unwrap()),
            ),
            (FieldType::Json, Value::Json(json!({"k": [1, 2]}))),
            (FieldType::Int, Value::Null),
        ];

        for (ty, value) in cases {
            let decoded = Value::from_json(&ty, &value.to_json()).unwrap();
            assert_eq!(decoded, value, "round trip of {ty}");
        }
    }

    #[test]
    fn test_from_json_type_mismatch() {
        let err = Value::from_json(&FieldType::Int, &json!("12")).unwrap_err();
        assert_eq!(err.expected, "int");
        assert_eq!(err.found, "\"12\"");

        assert!(Value::from_json(&FieldType::Date, &json!("2024-13-01")).is_err());
        assert!(Value::from_json(&FieldType::Int, &json!(1.5)).is_err());
    }

    #[test]
    fn test_json_null_document_is_sql_null() {
        assert_eq!(Value::json(json!(null)), Value::Null);
        assert_eq!(Value::json(json!([])), Value::Json(json!([])));
    }

    #[test]
    fn test_key_part_float_zero_folding() {
        assert_eq!(Value::Float(-0.0).key_part(), Value::Float(0.0).key_part());
        assert_ne!(Value::Float(1.0).key_part(), Value::Float(2.0).key_part());
    }

    #[test]
    fn test_key_part_has_no_separator_ambiguity() {
        // "a&b" + "c" and "a" + "b&c" would collide under string concatenation
        let left = vec![
            Value::String("a&b".into()).key_part(),
            Value::String("c".into()).key_part(),
        ];
        let right = vec![
            Value::String("a".into()).key_part(),
            Value::String("b&c".into()).key_part(),
        ];
        assert_ne!(left, right);
    }

    #[test]
    fn test_row_missing_field_reads_as_null() {
        let row: Row = [("id", Value::Int(1))].into_iter().collect();
        assert_eq!(row.value_or_null("id"), &Value::Int(1));
        assert_eq!(row.value_or_null("name"), &Value::Null);
        assert_eq!(row.len(), 1);
    }
}
