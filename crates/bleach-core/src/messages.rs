//! Message catalogs for human-readable check errors
//!
//! Checkers render their error message once, when they are built, by looking
//! up a key in a [`MessageProvider`]. A catalog is created at startup, is not
//! modified afterwards, and is handed explicitly to the checkers that need it.
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;

/// Message keys used by the built-in checkers
pub mod keys {
    pub const LENGTH_TOO_SHORT: &str = "check_length_too_short";
    pub const LENGTH_TOO_LONG: &str = "check_length_too_long";
    pub const LENGTH_OUT_OF_RANGE: &str = "check_length_out_of_range";
    pub const TYPE_NOT_CONVERTIBLE: &str = "check_type_not_convertible";
    pub const TYPE_STRICT_BAD_TYPE: &str = "check_type_strict_bad_type";
    pub const PATTERN_MISMATCH: &str = "check_pattern_mismatch";
    pub const REQUIRED_MISSING: &str = "check_required_missing";
}

const EN_US: &[(&str, &str)] = &[
    (keys::LENGTH_TOO_SHORT, "must be at least {min} characters long"),
    (keys::LENGTH_TOO_LONG, "must be at most {max} characters long"),
    (keys::LENGTH_OUT_OF_RANGE, "must be between {min} and {max} characters long"),
    (keys::TYPE_NOT_CONVERTIBLE, "must be convertible to {kind}"),
    (keys::TYPE_STRICT_BAD_TYPE, "must be of type {kind}"),
    (keys::PATTERN_MISMATCH, "must match the pattern {pattern}"),
    (keys::REQUIRED_MISSING, "is required"),
];

/// Key-to-message lookup consumed by checkers
pub trait MessageProvider {
    /// Look up a message, `None` if the key is unknown
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Look up a message, an empty string if the key is unknown
    fn get(&self, key: &str) -> &str {
        match self.lookup(key) {
            Some(message) => message,
            None => {
                log::trace!("No message for key '{}'", key);
                ""
            }
        }
    }
}

impl MessageProvider for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// An owned key-to-message map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create a catalog with no messages. Every lookup renders `""`.
    ///
    /// [`MessageCatalog::default`] is the built-in English catalog.
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// The built-in English messages
    pub fn en_us() -> Self {
        EN_US.iter().copied().collect()
    }

    /// Create a catalog from an existing map
    pub fn from_map(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Parse a flat JSON object of string messages.
    ///
    /// Non-string values are rejected so a typo in a translation shows up
    /// when the catalog is loaded, not when a check fails.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let messages: HashMap<String, String> = serde_json::from_str(content)?;
        log::debug!("Loaded message catalog with {} entries", messages.len());
        Ok(Self { messages })
    }

    /// Add messages from `other`, replacing existing keys
    pub fn merge(mut self, other: MessageCatalog) -> Self {
        self.messages.extend(other.messages);
        self
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::en_us()
    }
}

impl MessageProvider for MessageCatalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.messages
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Substitute `{name}` placeholders in a message template.
///
/// Placeholders without a matching argument are left as they are.
pub fn render(template: &str, args: &[(&str, String)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in args {
        let placeholder = format!("{{{}}}", name);
        if rendered.contains(&placeholder) {
            rendered = rendered.replace(&placeholder, value);
        }
    }
    rendered
}

/// Render a message for `key` from `provider`
pub(crate) fn format_message(
    provider: &dyn MessageProvider,
    key: &str,
    args: &[(&str, String)],
) -> String {
    render(provider.get(key), args)
}
