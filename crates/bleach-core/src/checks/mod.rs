//! Built-in checkers
//!
//! Every checker renders its message once at construction, from the provider
//! passed to `with_messages` or from [`MessageCatalog::default`] otherwise.
//! [`Throws::throws`] replaces the rendered message with a custom one.
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license
//!
//! [`MessageCatalog::default`]: crate::messages::MessageCatalog::default

pub mod kind;
pub mod length;
pub mod pattern;
pub mod required;

pub use kind::TypeChecker;
pub use length::LengthChecker;
pub use pattern::PatternChecker;
pub use required::RequiredChecker;

use crate::step::Checker;
use crate::value::ValueKind;

/// A checker whose error message can be overridden
///
/// ```rust
/// use bleach_core::checks::{self, Throws};
/// use bleach_core::Checker;
/// use serde_json::json;
///
/// let check = checks::length(0, 3).throws("keep it short");
/// assert_eq!(check.check(&json!("toolong")).unwrap_err().message, "keep it short");
/// ```
pub trait Throws: Checker + Sized {
    /// Replace the error message reported on failure
    fn throws<M: Into<String>>(self, message: M) -> Self;
}

/// Check a string's length in characters, see [`LengthChecker::new`]
pub fn length(min: usize, max: usize) -> LengthChecker {
    LengthChecker::new(min, max)
}

/// Check that a value converts to `kind`
pub fn is_type(kind: ValueKind) -> TypeChecker {
    TypeChecker::new(kind)
}

/// Check that a value is exactly of `kind`
pub fn is_type_strict(kind: ValueKind) -> TypeChecker {
    TypeChecker::strict(kind)
}

/// Check that a value is a string matching `pattern`
pub fn matches(pattern: &str) -> Result<PatternChecker, regex::Error> {
    PatternChecker::new(pattern)
}

/// Cancel the chain when the value is null
pub fn required() -> RequiredChecker {
    RequiredChecker::new()
}
