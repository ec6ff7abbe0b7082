//! Declarative chain configuration
//!
//! A [`ChainConfig`] describes a chain as data, so chains can live in
//! application configuration rather than code:
//!
//! ```rust
//! use bleach_core::{ChainConfig, MessageCatalog};
//! use serde_json::json;
//!
//! let config = ChainConfig::from_json(r#"{
//!     "steps": [
//!         {"type": "required"},
//!         {"type": "trim_space"},
//!         {"type": "length", "min": 1, "max": 3}
//!     ]
//! }"#)?;
//!
//! let chain = config.build(&MessageCatalog::default())?;
//! assert_eq!(chain.run(json!("  ab  ")).unwrap(), json!("ab"));
//! # Ok::<(), bleach_core::ConfigError>(())
//! ```
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::chain::Chain;
use crate::checks::{LengthChecker, PatternChecker, RequiredChecker, Throws, TypeChecker};
use crate::error::{ConfigError, Result};
use crate::messages::MessageProvider;
use crate::mutators;
use crate::step::Step;
use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};

/// One step of a configured chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepConfig {
    /// String length bounds; `0` disables a bound
    Length {
        #[serde(default)]
        min: i64,
        #[serde(default)]
        max: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Value kind check
    IsType {
        kind: ValueKind,
        #[serde(default)]
        strict: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Regular expression check
    Matches {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Cancel the chain on null
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Trim { cutset: String },
    TrimLeft { cutset: String },
    TrimRight { cutset: String },
    TrimSpace,
    Lowercase,
    Uppercase,
    ToString,
    ToInt,
    ToFloat,
}

impl StepConfig {
    /// Build the step at position `index` of a chain
    pub fn build(&self, index: usize, messages: &dyn MessageProvider) -> Result<Step> {
        let step = match self {
            StepConfig::Length { min, max, message } => {
                let min = non_negative(index, "min", *min)?;
                let max = non_negative(index, "max", *max)?;
                let checker = LengthChecker::with_messages(min, max, messages);
                Step::check(with_message(index, checker, message))
            }
            StepConfig::IsType { kind, strict, message } => {
                let checker = TypeChecker::with_messages(*kind, *strict, messages);
                Step::check(with_message(index, checker, message))
            }
            StepConfig::Matches { pattern, message } => {
                let checker = PatternChecker::with_messages(pattern, messages).map_err(|source| {
                    ConfigError::InvalidPattern {
                        step: index,
                        pattern: pattern.clone(),
                        source,
                    }
                })?;
                Step::check(with_message(index, checker, message))
            }
            StepConfig::Required { message } => {
                let checker = RequiredChecker::with_messages(messages);
                Step::check(with_message(index, checker, message))
            }
            StepConfig::Trim { cutset } => Step::mutate(mutators::trim(cutset)),
            StepConfig::TrimLeft { cutset } => Step::mutate(mutators::trim_left(cutset)),
            StepConfig::TrimRight { cutset } => Step::mutate(mutators::trim_right(cutset)),
            StepConfig::TrimSpace => Step::mutate(mutators::trim_space()),
            StepConfig::Lowercase => Step::mutate(mutators::to_lowercase()),
            StepConfig::Uppercase => Step::mutate(mutators::to_uppercase()),
            StepConfig::ToString => Step::mutate(mutators::to_string()),
            StepConfig::ToInt => Step::mutate(mutators::to_int()),
            StepConfig::ToFloat => Step::mutate(mutators::to_float()),
        };

        Ok(step.named(self.name()))
    }

    /// The `type` tag of this step
    pub fn name(&self) -> &'static str {
        match self {
            StepConfig::Length { .. } => "length",
            StepConfig::IsType { .. } => "is_type",
            StepConfig::Matches { .. } => "matches",
            StepConfig::Required { .. } => "required",
            StepConfig::Trim { .. } => "trim",
            StepConfig::TrimLeft { .. } => "trim_left",
            StepConfig::TrimRight { .. } => "trim_right",
            StepConfig::TrimSpace => "trim_space",
            StepConfig::Lowercase => "lowercase",
            StepConfig::Uppercase => "uppercase",
            StepConfig::ToString => "to_string",
            StepConfig::ToInt => "to_int",
            StepConfig::ToFloat => "to_float",
        }
    }
}

/// A chain described as data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

impl ChainConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a configuration from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build a chain, rendering checker messages from `messages`
    pub fn build(&self, messages: &dyn MessageProvider) -> Result<Chain> {
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| step.build(index, messages))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Built chain from configuration with {} step(s)", steps.len());
        Ok(Chain::try_new(steps)?)
    }
}

fn non_negative(step: usize, field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeBound { step, field, value })
}

fn with_message<C: Throws>(index: usize, checker: C, message: &Option<String>) -> C {
    match message {
        Some(message) => {
            if message.is_empty() {
                log::warn!("Step {} has an empty custom message", index);
            }
            checker.throws(message.as_str())
        }
        None => checker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCatalog;
    use serde_json::json;

    #[test]
    fn test_parse_and_build() {
        let config = ChainConfig::from_value(json!({
            "steps": [
                {"type": "trim", "cutset": "*"},
                {"type": "lowercase"},
                {"type": "matches", "pattern": "^[a-z]+$"}
            ]
        }))
        .unwrap();

        assert_eq!(config.steps.len(), 3);
        let chain = config.build(&MessageCatalog::default()).unwrap();
        assert_eq!(chain.run(json!("**HeLLo**")), Ok(json!("hello")));
        assert!(chain.run(json!("*a b*")).is_err());
    }

    #[test]
    fn test_steps_are_named_after_their_tag() {
        let config = ChainConfig {
            steps: vec![StepConfig::TrimSpace, StepConfig::ToInt],
        };
        let chain = config.build(&MessageCatalog::default()).unwrap();
        let names: Vec<_> = chain.steps().iter().filter_map(Step::name).collect();
        assert_eq!(names, vec!["trim_space", "to_int"]);
    }

    #[test]
    fn test_negative_bound_is_rejected() {
        let config = ChainConfig {
            steps: vec![
                StepConfig::TrimSpace,
                StepConfig::Length { min: -1, max: 0, message: None },
            ],
        };

        match config.build(&MessageCatalog::default()) {
            Err(ConfigError::NegativeBound { step, field, value }) => {
                assert_eq!(step, 1);
                assert_eq!(field, "min");
                assert_eq!(value, -1);
            }
            other => panic!("expected NegativeBound, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let config = ChainConfig::from_json(r#"{"steps": [{"type": "matches", "pattern": "("}]}"#).unwrap();
        let err = config.build(&MessageCatalog::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { step: 0, .. }));
        assert!(err.to_string().contains("invalid pattern '('"));
    }

    #[test]
    fn test_unknown_step_type_fails_to_parse() {
        let err = ChainConfig::from_json(r#"{"steps": [{"type": "explode"}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_custom_messages_override_catalog() {
        let config = ChainConfig::from_value(json!({
            "steps": [
                {"type": "is_type", "kind": "integer", "strict": true, "message": "whole numbers only"},
                {"type": "length", "min": 2}
            ]
        }))
        .unwrap();

        let catalog: MessageCatalog =
            [("check_length_too_short", "au moins {min} caractères")].into_iter().collect();
        let chain = config.build(&catalog).unwrap();

        let errors = chain.run(json!("x")).unwrap_err();
        assert_eq!(errors.messages(), vec!["whole numbers only", "au moins 2 caractères"]);
    }

    #[test]
    fn test_custom_message_on_every_checker_step() {
        let config = ChainConfig::from_value(json!({
            "steps": [
                {"type": "length", "max": 1, "message": "length"},
                {"type": "is_type", "kind": "bool", "message": "kind"},
                {"type": "matches", "pattern": "^[0-9]+$", "message": "pattern"},
                {"type": "to_float"},
                {"type": "required", "message": "unused"}
            ]
        }))
        .unwrap();
        let chain = config.build(&MessageCatalog::empty()).unwrap();

        let errors = chain.run(json!("abc")).unwrap_err();
        assert_eq!(errors.messages(), vec!["length", "kind", "pattern"]);
    }

    #[test]
    fn test_required_in_config_cancels() {
        let config = ChainConfig::from_json(
            r#"{"steps": [{"type": "required", "message": "missing"}, {"type": "to_string"}]}"#,
        )
        .unwrap();
        let chain = config.build(&MessageCatalog::default()).unwrap();

        let errors = chain.run(json!(null)).unwrap_err();
        assert!(errors.is_cancelled());
        assert_eq!(errors.messages(), vec!["missing"]);
        assert_eq!(chain.run(json!(7)), Ok(json!("7")));
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = ChainConfig {
            steps: vec![
                StepConfig::Length { min: 1, max: 3, message: None },
                StepConfig::TrimLeft { cutset: "0".to_string() },
            ],
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["steps"][0], json!({"type": "length", "min": 1, "max": 3}));
        assert_eq!(ChainConfig::from_value(value).unwrap(), config);
    }

    #[test]
    fn test_empty_config_builds_empty_chain() {
        let chain = ChainConfig::from_json("{}").unwrap().build(&MessageCatalog::empty()).unwrap();
        assert!(chain.is_empty());
    }
}
