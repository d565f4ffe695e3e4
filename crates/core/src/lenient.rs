//! Shape-tolerant deserialisation helpers.
//!
//! Used through `#[serde(default, deserialize_with = "...")]` on record fields. Each helper first
//! reads the raw JSON value and then decides whether it has the expected shape; anything else is
//! replaced by "absent" instead of failing the whole record.

use case_types::FieldValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A nested mapping. Non-objects (strings, numbers, arrays, `null`) become `None`.
///
/// Arrays are rejected explicitly because serde would otherwise fill struct fields by position.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    })
}

/// A sequence of mappings. Non-arrays become `None`; elements that are not objects become
/// `T::default()` so list positions are kept.
pub(crate) fn sequence<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => T::deserialize(item).unwrap_or_default(),
                _ => T::default(),
            })
            .collect(),
    ))
}

/// A sequence of scalars. Non-arrays become `None`; `null` elements are dropped.
pub(crate) fn values<'de, D>(deserializer: D) -> Result<Option<Vec<FieldValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };

    Ok(Some(
        items.into_iter().filter_map(FieldValue::from_value).collect(),
    ))
}
