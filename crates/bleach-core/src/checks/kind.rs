//! Value kind checking
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::checks::Throws;
use crate::error::CheckError;
use crate::messages::{format_message, keys, MessageCatalog, MessageProvider};
use crate::step::Checker;
use crate::value::{Value, ValueKind};

/// Checks the runtime kind of a value.
///
/// Loose checking accepts anything [`ValueKind::accepts`] considers
/// convertible; strict checking only accepts the exact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChecker {
    kind: ValueKind,
    strict: bool,
    message: String,
}

impl TypeChecker {
    /// Loose checker with the default messages
    pub fn new(kind: ValueKind) -> Self {
        Self::with_messages(kind, false, &MessageCatalog::default())
    }

    /// Strict checker with the default messages
    pub fn strict(kind: ValueKind) -> Self {
        Self::with_messages(kind, true, &MessageCatalog::default())
    }

    /// Create a checker rendering its message from `messages`
    pub fn with_messages(kind: ValueKind, strict: bool, messages: &dyn MessageProvider) -> Self {
        let key = if strict {
            keys::TYPE_STRICT_BAD_TYPE
        } else {
            keys::TYPE_NOT_CONVERTIBLE
        };

        Self {
            kind,
            strict,
            message: format_message(messages, key, &[("kind", kind.to_string())]),
        }
    }

    /// The expected kind
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether only the exact kind is accepted
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The message reported on failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Throws for TypeChecker {
    fn throws<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }
}

impl Checker for TypeChecker {
    fn check(&self, value: &Value) -> Result<(), CheckError> {
        let ok = if self.strict {
            ValueKind::of(value) == self.kind
        } else {
            self.kind.accepts(value)
        };

        if ok {
            Ok(())
        } else {
            Err(CheckError::new(self.message.clone()))
        }
    }
}
