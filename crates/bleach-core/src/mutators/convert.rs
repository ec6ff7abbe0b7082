//! Kind conversion mutators
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::step::Mutator;
use crate::value::{parse_number, Numeric, Value};

/// Converts any value to a string.
///
/// | input          | output              |
/// |----------------|---------------------|
/// | `null`         | `"null"`            |
/// | `true`/`false` | `"true"`/`"false"`  |
/// | `3.14`, `-3`   | `"3.14"`, `"-3"`    |
/// | `1e300`        | `"1e+300"`          |
/// | array/object   | compact JSON        |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringMutator;

impl Mutator for StringMutator {
    fn mutate(&self, value: Value) -> Value {
        let s = match value {
            Value::String(s) => s,
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => i.to_string(),
                (None, Some(u), _) => u.to_string(),
                (None, None, Some(f)) => format_float(f),
                (None, None, None) => n.to_string(),
            },
            other => other.to_string(),
        };
        Value::String(s)
    }
}

/// Shortest round-trip digits, in scientific notation when the decimal
/// exponent is below -4 or at least 6.
fn format_float(f: f64) -> String {
    let scientific = format!("{:e}", f);
    let exp = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));

    match exp {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        _ => f.to_string(),
    }
}

/// Converts any value to an `i64`.
///
/// Floats truncate toward zero, strings are parsed as an integer and then as
/// a float, bools become `1`/`0`, anything else becomes `0`. Out of range
/// values saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntMutator;

impl IntMutator {
    fn convert(value: &Value) -> i64 {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i
                } else if n.as_u64().is_some() {
                    i64::MAX
                } else {
                    n.as_f64().map_or(0, |f| f as i64)
                }
            }
            Value::String(s) => match parse_number(s) {
                Some(Numeric::Int(i)) => i,
                Some(Numeric::Float(f)) => f as i64,
                None => 0,
            },
            Value::Bool(b) => i64::from(*b),
            _ => 0,
        }
    }
}

impl Mutator for IntMutator {
    fn mutate(&self, value: Value) -> Value {
        Value::from(Self::convert(&value))
    }
}

/// Converts any value to an `f64`, with the same rules as [`IntMutator`]
/// minus the truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatMutator;

impl FloatMutator {
    fn convert(value: &Value) -> f64 {
        let f = match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => match parse_number(s) {
                Some(Numeric::Int(i)) => i as f64,
                Some(Numeric::Float(f)) => f,
                None => 0.0,
            },
            Value::Bool(true) => 1.0,
            _ => 0.0,
        };

        if f.is_finite() {
            f
        } else {
            0.0
        }
    }
}

impl Mutator for FloatMutator {
    fn mutate(&self, value: Value) -> Value {
        Value::from(Self::convert(&value))
    }
}
