//! Lenient field deserializers.
//!
//! Every field of a resume entry is optional and may hold the wrong JSON type.
//! These helpers never fail: a value of an unusable type becomes "absent" so
//! only that fragment is dropped, never the whole entry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text content of a scalar. Empty strings, `null`, booleans and containers are absent.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Converts a mapping into `T`; anything else (or a failed conversion) is `None`.
pub(crate) fn object_of<T: DeserializeOwned>(value: &Value) -> Option<T> {
    if value.is_object() {
        T::deserialize(value).ok()
    } else {
        None
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(object_of).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_accepts_strings_and_numbers() {
        assert_eq!(text_of(&json!("MIT")), Some("MIT".to_string()));
        assert_eq!(text_of(&json!(3.8)), Some("3.8".to_string()));
        assert_eq!(text_of(&json!(2019)), Some("2019".to_string()));
    }

    #[test]
    fn test_text_of_rejects_empty_and_non_scalars() {
        assert_eq!(text_of(&json!("")), None);
        assert_eq!(text_of(&json!(null)), None);
        assert_eq!(text_of(&json!(true)), None);
        assert_eq!(text_of(&json!(["a"])), None);
        assert_eq!(text_of(&json!({"a": 1})), None);
    }
}
