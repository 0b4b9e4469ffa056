//! Static value generator and YAML to `Value` conversion.

use mess_core::{FieldType, Value};
use serde_yaml::Value as YamlValue;

/// Convert a YAML value from the schema file to a value of the field's type.
pub fn yaml_to_value(field_type: &FieldType, yaml: &YamlValue) -> Result<Value, String> {
    let json = serde_json::to_value(yaml).map_err(|e| e.to_string())?;
    Value::from_json(field_type, &json).map_err(|e| e.to_string())
}
