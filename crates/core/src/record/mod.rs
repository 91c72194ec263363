//! The resume record: an order-preserving mapping from section key to section data.
//!
//! The record is read-only. Builders receive borrowed slices of it and convert
//! each entry into one of the optional-field structs in [`entries`] exactly
//! once, at the boundary, so no type checks leak into block construction.

pub mod entries;
pub(crate) mod fields;

use crate::error::CoreError;
use serde_json::{Map, Value};

/// A parsed resume document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeRecord {
    sections: Map<String, Value>,
}

impl ResumeRecord {
    /// Wraps an already-parsed JSON value. Only a JSON object is a record.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            other => Err(CoreError::NotAnObject(json_type_name(&other).to_string())),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }

    /// Section keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Sections in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `key` holds data that would produce output.
    pub fn has_section(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_present)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.sections
    }
}

impl TryFrom<Value> for ResumeRecord {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for ResumeRecord {
    fn from(sections: Map<String, Value>) -> Self {
        Self { sections }
    }
}

/// A section value is present unless it is `null`, `false`, zero, or an empty
/// string, sequence or mapping.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
