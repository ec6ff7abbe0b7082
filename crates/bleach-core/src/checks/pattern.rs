//! Regular expression checking
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::checks::Throws;
use crate::error::CheckError;
use crate::messages::{format_message, keys, MessageCatalog, MessageProvider};
use crate::step::Checker;
use crate::value::Value;
use regex::Regex;

/// Checks that a value is a string matching a regular expression.
///
/// Anchor the pattern (`^...$`) to require a full match.
#[derive(Debug, Clone)]
pub struct PatternChecker {
    regex: Regex,
    message: String,
}

impl PatternChecker {
    /// Compile `pattern` and use the default messages
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_messages(pattern, &MessageCatalog::default())
    }

    /// Compile `pattern` and render the message from `messages`
    pub fn with_messages(pattern: &str, messages: &dyn MessageProvider) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::from_regex(regex, messages))
    }

    /// Use an already compiled regex
    pub fn from_regex(regex: Regex, messages: &dyn MessageProvider) -> Self {
        let message = format_message(
            messages,
            keys::PATTERN_MISMATCH,
            &[("pattern", regex.as_str().to_string())],
        );
        Self { regex, message }
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The message reported on failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Throws for PatternChecker {
    fn throws<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }
}

impl Checker for PatternChecker {
    fn check(&self, value: &Value) -> Result<(), CheckError> {
        match value.as_str() {
            Some(s) if self.regex.is_match(s) => Ok(()),
            _ => Err(CheckError::new(self.message.clone())),
        }
    }
}
