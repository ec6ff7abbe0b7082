//! Error types for the Bleach core library
//!
//! Three families of errors live here:
//! - [`CheckError`]: produced by checkers while a chain runs, collected into
//!   [`CheckErrors`]
//! - [`ChainError`]: a chain was assembled from an invalid step
//! - [`ConfigError`]: a declarative chain configuration could not be built

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How a chain reacts to a [`CheckError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Recorded, and the chain keeps going
    Invalid,
    /// Recorded, and the chain stops immediately
    Cancel,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Invalid => write!(f, "invalid"),
            ErrorKind::Cancel => write!(f, "cancel"),
        }
    }
}

/// A validation failure reported by a checker
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct CheckError {
    /// Human-readable error message
    pub message: String,
    /// Whether the chain should keep running after this error
    pub kind: ErrorKind,
}

impl CheckError {
    /// Create an ordinary validation error
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Invalid,
        }
    }

    /// Create a cancellation error. A chain that sees one stops at once.
    pub fn cancel<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Cancel,
        }
    }

    /// Check if this error cancels the chain
    pub fn is_cancel(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancel)
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors collected by a failed chain run, in the order they were raised
///
/// Never empty once it leaves the crate. Deserializing an empty list is an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(try_from = "RawCheckErrors")]
pub struct CheckErrors {
    errors: Vec<CheckError>,
}

#[derive(Deserialize)]
struct RawCheckErrors {
    errors: Vec<CheckError>,
}

impl TryFrom<RawCheckErrors> for CheckErrors {
    type Error = String;

    fn try_from(raw: RawCheckErrors) -> std::result::Result<Self, Self::Error> {
        if raw.errors.is_empty() {
            return Err("a failed run carries at least one check error".to_string());
        }
        Ok(Self { errors: raw.errors })
    }
}

impl fmt::Display for CheckErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} check(s) failed:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl CheckErrors {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, error: CheckError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the errors in the order they were raised
    pub fn iter(&self) -> std::slice::Iter<'_, CheckError> {
        self.errors.iter()
    }

    /// The first error raised
    pub fn first(&self) -> Option<&CheckError> {
        self.errors.first()
    }

    /// Whether the run was cut short by a cancellation error
    pub fn is_cancelled(&self) -> bool {
        self.errors.last().is_some_and(CheckError::is_cancel)
    }

    /// Error messages only
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(CheckError::message).collect()
    }

    /// Take ownership of the underlying errors
    pub fn into_vec(self) -> Vec<CheckError> {
        self.errors
    }

    /// Ok if no errors were collected, Err otherwise
    pub(crate) fn into_result<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a CheckErrors {
    type Item = &'a CheckError;
    type IntoIter = std::slice::Iter<'a, CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for CheckErrors {
    type Item = CheckError;
    type IntoIter = std::vec::IntoIter<CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Chain construction errors. These are programmer errors, not bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A step has neither a check nor a mutation
    #[error("chain step {index} must be a checker and/or a mutator")]
    EmptyStep { index: usize },
}

/// Errors raised while turning a [`crate::ChainConfig`] into a chain
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed
    #[error("Failed to parse chain configuration: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A length bound was negative
    #[error("Step {step}: '{field}' cannot be negative (got {value})")]
    NegativeBound {
        step: usize,
        field: &'static str,
        value: i64,
    },

    /// A pattern failed to compile
    #[error("Step {step}: invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        step: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The built steps were rejected by the chain
    #[error("Invalid chain: {source}")]
    Chain {
        #[from]
        source: ChainError,
    },
}

/// Convenience type alias for configuration results
pub type Result<T> = std::result::Result<T, ConfigError>;
