//! Runtime kinds of the dynamic values flowing through a chain
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dynamically-typed payload a chain operates on
pub type Value = serde_json::Value;

/// Runtime kind of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    /// A number representable as `i64` or `u64`
    Integer,
    /// Any other number
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Determine the kind of a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this kind holds a single value rather than a collection
    pub fn is_scalar(&self) -> bool {
        !matches!(self, ValueKind::Array | ValueKind::Object)
    }

    /// Whether `value` can be converted into this kind without losing its meaning.
    ///
    /// - `Integer`/`Float` accept numbers, bools, and strings that parse as numbers
    /// - `String` accepts any scalar
    /// - `Bool` accepts bools, numbers, and the strings `"true"`/`"false"`
    /// - `Null`, `Array`, `Object` only accept themselves
    pub fn accepts(&self, value: &Value) -> bool {
        let kind = ValueKind::of(value);
        if kind == *self {
            return true;
        }

        match self {
            ValueKind::Integer | ValueKind::Float => match value {
                Value::Number(_) | Value::Bool(_) => true,
                Value::String(s) => parse_number(s).is_some(),
                _ => false,
            },
            ValueKind::String => kind.is_scalar(),
            ValueKind::Bool => match value {
                Value::Number(_) => true,
                Value::String(s) => matches!(s.as_str(), "true" | "false"),
                _ => false,
            },
            ValueKind::Null | ValueKind::Array | ValueKind::Object => false,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Parsed numeric string, keeping integers exact
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Int(i64),
    Float(f64),
}

/// Parse a string as an integer first, then as a float
pub(crate) fn parse_number(s: &str) -> Option<Numeric> {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Numeric::Int(i));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Numeric::Float(f)),
        _ => None,
    }
}
