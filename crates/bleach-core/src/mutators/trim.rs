//! Trimming mutators
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::step::Mutator;
use crate::value::Value;

/// Which end of the string to trim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
    Left,
    Right,
    Both,
}

/// Strips characters in a cutset from a string.
///
/// Non-string values become `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimMutator {
    cutset: Vec<char>,
    side: TrimSide,
}

impl TrimMutator {
    pub fn new(cutset: &str, side: TrimSide) -> Self {
        Self {
            cutset: cutset.chars().collect(),
            side,
        }
    }
}

impl Mutator for TrimMutator {
    fn mutate(&self, value: Value) -> Value {
        let s = value.as_str().unwrap_or_default();
        let cut = |c: char| self.cutset.contains(&c);

        let trimmed = match self.side {
            TrimSide::Left => s.trim_start_matches(cut),
            TrimSide::Right => s.trim_end_matches(cut),
            TrimSide::Both => s.trim_matches(cut),
        };

        Value::String(trimmed.to_string())
    }
}

/// Strips leading and trailing Unicode whitespace.
///
/// Non-string values become `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimSpaceMutator;

impl Mutator for TrimSpaceMutator {
    fn mutate(&self, value: Value) -> Value {
        Value::String(value.as_str().unwrap_or_default().trim().to_string())
    }
}
