//! Case folding mutators
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::step::Mutator;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

/// Changes the case of a string. Non-string values become `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMutator {
    case: Case,
}

impl CaseMutator {
    pub fn new(case: Case) -> Self {
        Self { case }
    }
}

impl Mutator for CaseMutator {
    fn mutate(&self, value: Value) -> Value {
        let s = value.as_str().unwrap_or_default();
        Value::String(match self.case {
            Case::Lower => s.to_lowercase(),
            Case::Upper => s.to_uppercase(),
        })
    }
}
