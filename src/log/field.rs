//! Typed key-value fields for structured log records.

use std::error::Error;
use std::fmt;

/// Value carried by a [`Field`].
///
/// These are the only value kinds a structured record can hold: text,
/// 64-bit integer, boolean, ordered string sequence, and a failure
/// description extracted from an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// UTF-8 text.
    Str(String),
    /// 64-bit signed integer. Durations are logged as integer nanoseconds.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Ordered sequence of strings (traces, type name lists).
    Strings(Vec<String>),
    /// Display description of an error value.
    Error(String),
}

/// A named, typed field attached to a log record.
///
/// Field keys are static strings; the set of keys a record can carry is
/// fixed by the code emitting it, not by runtime data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: &'static str,
    value: FieldValue,
}

impl Field {
    /// Creates a text field.
    pub fn str(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: FieldValue::Str(value.into()),
        }
    }

    /// Creates an integer field.
    pub fn int(key: &'static str, value: i64) -> Self {
        Self {
            key,
            value: FieldValue::Int(value),
        }
    }

    /// Creates a boolean field.
    pub fn bool(key: &'static str, value: bool) -> Self {
        Self {
            key,
            value: FieldValue::Bool(value),
        }
    }

    /// Creates a string sequence field.
    pub fn strings(key: &'static str, values: impl Into<Vec<String>>) -> Self {
        Self {
            key,
            value: FieldValue::Strings(values.into()),
        }
    }

    /// Creates a failure field from an error value.
    ///
    /// The key is always `error`; the value is the error's display
    /// description.
    pub fn error(err: &(dyn Error + 'static)) -> Self {
        Self {
            key: "error",
            value: FieldValue::Error(err.to_string()),
        }
    }

    /// Returns the field key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the field value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl fmt::Display for Field {
    /// Renders `key=value`, suitable for flattening records into text lines.
    ///
    /// String sequences render as `key=[a, b]`; failure descriptions are
    /// double-quoted because they routinely contain spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            FieldValue::Str(s) => write!(f, "{}={}", self.key, s),
            FieldValue::Int(i) => write!(f, "{}={}", self.key, i),
            FieldValue::Bool(b) => write!(f, "{}={}", self.key, b),
            FieldValue::Strings(items) => write!(f, "{}=[{}]", self.key, items.join(", ")),
            FieldValue::Error(desc) => write!(f, "{}=\"{}\"", self.key, desc),
        }
    }
}
