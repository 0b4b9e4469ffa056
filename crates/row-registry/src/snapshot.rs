//! Snapshot document written at close and read back at open.

use mess_core::{Row, TableSchema, Value};
use serde::{Deserialize, Deserializer, Serialize};

/// A JSON object mapping field names to stored values.
pub type StoredRow = serde_json::Map<String, serde_json::Value>;

/// Persisted registry contents.
///
/// # File Format
///
/// ```json
/// {
///     "num_rows": 2,
///     "rows": [
///         {"id": 1, "name": "a", "created": "2024-01-01 00:00:00"},
///         {"id": 2, "name": null, "created": "2024-01-02 12:30:00"}
///     ]
/// }
/// ```
///
/// Temporal values are stored in their canonical text form and JSON
/// columns as nested documents. `"rows": null` reads as no rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Number of rows; must equal `rows.len()`
    pub num_rows: usize,
    /// Live rows in slot order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rows: Vec<StoredRow>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<StoredRow>, D::Error> {
    Ok(Option::<Vec<StoredRow>>::deserialize(d)?.unwrap_or_default())
}

impl SnapshotFile {
    /// Build a snapshot of the given rows, in order.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let rows: Vec<StoredRow> = rows
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect()
            })
            .collect();
        Self {
            num_rows: rows.len(),
            rows,
        }
    }

    /// Decode the stored rows against the schema.
    ///
    /// Fails on a row count mismatch, fields the schema does not declare,
    /// values that do not decode as their field's type and rows whose
    /// primary-key fields are missing or null.
    pub fn decode(&self, schema: &TableSchema) -> Result<Vec<Row>, String> {
        if self.num_rows != self.rows.len() {
            return Err(format!(
                "num_rows is {} but {} rows are stored",
                self.num_rows,
                self.rows.len()
            ));
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(idx, stored)| {
                let row = stored
                    .iter()
                    .map(|(name, json)| {
                        let field = schema
                            .field(name)
                            .ok_or_else(|| format!("row {idx}: unknown field '{name}'"))?;
                        let value = Value::from_json(&field.field_type, json)
                            .map_err(|e| format!("row {idx}, field '{name}': {e}"))?;
                        Ok((name.clone(), value))
                    })
                    .collect::<Result<Row, String>>()?;

                if let Some(key) = schema
                    .primary_keys()
                    .iter()
                    .find(|key| row.value_or_null(key).is_null())
                {
                    return Err(format!(
                        "row {idx}: primary key field '{key}' is missing or null"
                    ));
                }
                Ok(row)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> TableSchema {
        TableSchema::from_yaml(
            r#"
table: t
primary_keys: [id]
fields:
  - name: id
    type: int
  - name: born
    type: date
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_null_rows_read_as_empty() {
        let file: SnapshotFile = serde_json::from_str(r#"{"num_rows":0,"rows":null}"#).unwrap();
        assert!(file.rows.is_empty());
        assert!(file.decode(&schema()).unwrap().is_empty());
    }

    #[test]
    fn test_stored_format() {
        let row: Row = [
            ("id", Value::Int(3)),
            (
                "born",
                Value::Date(chrono::NaiveDate::from_ymd_opt(2001, 2, 3).unwrap()),
            ),
        ]
        .into_iter()
        .collect();

        let file = SnapshotFile::from_rows([&row]);
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({"num_rows": 1, "rows": [{"born": "2001-02-03", "id": 3}]})
        );
        assert_eq!(file.decode(&schema()).unwrap(), vec![row]);
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let file: SnapshotFile =
            serde_json::from_value(json!({"num_rows": 2, "rows": [{"id": 1}]})).unwrap();
        let err = file.decode(&schema()).unwrap_err();
        assert!(err.contains("num_rows is 2"), "{err}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file: SnapshotFile =
            serde_json::from_value(json!({"num_rows": 1, "rows": [{"id": 1, "age": 3}]}))
                .unwrap();
        let err = file.decode(&schema()).unwrap_err();
        assert!(err.contains("unknown field 'age'"), "{err}");
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let file: SnapshotFile =
            serde_json::from_value(json!({"num_rows": 1, "rows": [{"id": "one"}]})).unwrap();
        let err = file.decode(&schema()).unwrap_err();
        assert!(err.contains("row 0, field 'id'"), "{err}");
    }
}
