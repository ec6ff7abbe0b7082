//! Presence checking
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::checks::Throws;
use crate::error::CheckError;
use crate::messages::{format_message, keys, MessageCatalog, MessageProvider};
use crate::step::Checker;
use crate::value::Value;

/// Cancels the chain when the value is null.
///
/// Nothing downstream can do useful work on a missing value, so the error is
/// a cancellation rather than an ordinary failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredChecker {
    message: String,
}

impl RequiredChecker {
    /// Create a checker with the default messages
    pub fn new() -> Self {
        Self::with_messages(&MessageCatalog::default())
    }

    /// Create a checker rendering its message from `messages`
    pub fn with_messages(messages: &dyn MessageProvider) -> Self {
        Self {
            message: format_message(messages, keys::REQUIRED_MISSING, &[]),
        }
    }

    /// The message reported on failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for RequiredChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Throws for RequiredChecker {
    fn throws<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }
}

impl Checker for RequiredChecker {
    fn check(&self, value: &Value) -> Result<(), CheckError> {
        if value.is_null() {
            Err(CheckError::cancel(self.message.clone()))
        } else {
            Ok(())
        }
    }
}
