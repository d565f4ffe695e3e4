//! Scalar value types shared by the case presenter crates.
//!
//! Case records arrive from loosely maintained JSON or YAML files, so a leaf field may hold text,
//! a number, a boolean or something structured where a scalar was expected. [`FieldValue`] keeps
//! whatever was supplied and knows how to display it and how to answer the two presence
//! questions the presenter asks: "is it truthy?" and "is it exactly `true`?".

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Errors that can occur when interpreting a [`FieldValue`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValueError {
    /// A JSON `null` was offered where a value was required.
    #[error("value is null")]
    Null,
    /// The value could not be read as a number.
    #[error("value is not numeric: {0}")]
    NotNumeric(String),
}

/// A single leaf value from a case record.
///
/// `null` never becomes a `FieldValue`; optional fields hold `Option<FieldValue>` and a JSON
/// `null` deserialises to `None`, exactly like a missing key.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string value.
    Text(String),
    /// A JSON number, kept in its original integer or float form.
    Number(Number),
    /// A boolean value.
    Bool(bool),
    /// An array or object supplied where a scalar was expected.
    Structured(Value),
}

impl FieldValue {
    /// Converts a JSON value, returning `None` for `null`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::Bool(b) => Some(Self::Bool(b)),
            other => Some(Self::Structured(other)),
        }
    }

    /// Builds a numeric value from a float. Returns `None` for NaN and infinities, which JSON
    /// cannot represent.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// JavaScript-style truthiness: empty text, zero, NaN and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Bool(b) => *b,
            Self::Structured(_) => true,
        }
    }

    /// True only for the boolean `true`. Truthy text or numbers do not count.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Reads the value as a number.
    ///
    /// Numbers convert directly; text is accepted when it parses as a float after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotNumeric`] for booleans, structured values and non-numeric text.
    pub fn number(&self) -> Result<f64, ValueError> {
        match self {
            Self::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValueError::NotNumeric(n.to_string())),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ValueError::NotNumeric(s.clone())),
            other => Err(ValueError::NotNumeric(other.to_string())),
        }
    }
}

/// Formats a float the way a browser prints a number: integral values drop the fractional
/// part, everything else uses the shortest round-tripping form.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn format_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{}", format_number(n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Structured(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        FieldValue::from_value(value).ok_or_else(|| serde::de::Error::custom(ValueError::Null))
    }
}
