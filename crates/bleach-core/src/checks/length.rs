//! String length checking
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::checks::Throws;
use crate::error::CheckError;
use crate::messages::{format_message, keys, MessageCatalog, MessageProvider};
use crate::step::Checker;
use crate::value::Value;

/// Checks the number of characters in a string.
///
/// Values that are not strings count as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthChecker {
    min: usize,
    max: usize,
    message: String,
}

impl LengthChecker {
    /// Create a length checker with the default messages.
    ///
    /// `min` and `max` are inclusive bounds; a zero bound is not checked.
    ///
    /// ```rust
    /// use bleach_core::checks::LengthChecker;
    /// use bleach_core::Checker;
    /// use serde_json::json;
    ///
    /// // between 5 and 10 characters
    /// let between = LengthChecker::new(5, 10);
    /// // at most 10 characters
    /// let at_most = LengthChecker::new(0, 10);
    /// // at least 5 characters
    /// let at_least = LengthChecker::new(5, 0);
    ///
    /// assert!(between.check(&json!("bleach")).is_ok());
    /// assert!(at_most.check(&json!("")).is_ok());
    /// assert!(at_least.check(&json!("four")).is_err());
    /// ```
    pub fn new(min: usize, max: usize) -> Self {
        Self::with_messages(min, max, &MessageCatalog::default())
    }

    /// Create a length checker rendering its message from `messages`
    pub fn with_messages(min: usize, max: usize, messages: &dyn MessageProvider) -> Self {
        let min_arg = ("min", min.to_string());
        let max_arg = ("max", max.to_string());

        let message = match (min > 0, max > 0) {
            (true, true) => format_message(messages, keys::LENGTH_OUT_OF_RANGE, &[min_arg, max_arg]),
            (true, false) => format_message(messages, keys::LENGTH_TOO_SHORT, &[min_arg]),
            (false, true) => format_message(messages, keys::LENGTH_TOO_LONG, &[max_arg]),
            (false, false) => String::new(),
        };

        Self { min, max, message }
    }

    /// The message reported on failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Throws for LengthChecker {
    fn throws<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }
}

impl Checker for LengthChecker {
    fn check(&self, value: &Value) -> Result<(), CheckError> {
        let length = value.as_str().map_or(0, |s| s.chars().count());

        if (self.min > 0 && length < self.min) || (self.max > 0 && length > self.max) {
            return Err(CheckError::new(self.message.clone()));
        }

        Ok(())
    }
}
