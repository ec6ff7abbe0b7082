//! Built-in mutators
//!
//! Mutators never fail. A value of an unexpected kind becomes the
//! zero-equivalent of the output kind (`""`, `0`, `0.0`).
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

pub mod case;
pub mod convert;
pub mod trim;

pub use case::{Case, CaseMutator};
pub use convert::{FloatMutator, IntMutator, StringMutator};
pub use trim::{TrimMutator, TrimSide, TrimSpaceMutator};

/// Strip any character in `cutset` from both ends of a string
pub fn trim(cutset: &str) -> TrimMutator {
    TrimMutator::new(cutset, TrimSide::Both)
}

/// Strip any character in `cutset` from the start of a string
pub fn trim_left(cutset: &str) -> TrimMutator {
    TrimMutator::new(cutset, TrimSide::Left)
}

/// Strip any character in `cutset` from the end of a string
pub fn trim_right(cutset: &str) -> TrimMutator {
    TrimMutator::new(cutset, TrimSide::Right)
}

/// Strip leading and trailing whitespace
pub fn trim_space() -> TrimSpaceMutator {
    TrimSpaceMutator
}

/// Lowercase a string
pub fn to_lowercase() -> CaseMutator {
    CaseMutator::new(Case::Lower)
}

/// Uppercase a string
pub fn to_uppercase() -> CaseMutator {
    CaseMutator::new(Case::Upper)
}

/// Convert any value to a string
pub fn to_string() -> StringMutator {
    StringMutator
}

/// Convert any value to an integer
pub fn to_int() -> IntMutator {
    IntMutator
}

/// Convert any value to a float
pub fn to_float() -> FloatMutator {
    FloatMutator
}
