//! Property-based testing strategies and properties for chains
//!
//! Strategies generate random JSON payloads and random chains of built-in
//! steps; the properties below pin down the run contract for any of them.

#![cfg(test)]

use crate::chain::Chain;
use crate::checks;
use crate::error::CheckError;
use crate::mutators;
use crate::step::Step;
use crate::value::{Value, ValueKind};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Strategy for generating random JSON values with controlled complexity
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-zA-Z0-9 \t]{0,30}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::hash_map("[a-z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for generating value kinds
pub fn value_kind_strategy() -> impl Strategy<Value = ValueKind> {
    prop_oneof![
        Just(ValueKind::Null),
        Just(ValueKind::Bool),
        Just(ValueKind::Integer),
        Just(ValueKind::Float),
        Just(ValueKind::String),
        Just(ValueKind::Array),
        Just(ValueKind::Object),
    ]
}

/// Strategy for generating steps built from the stock checkers and mutators
pub fn builtin_step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..5, 0usize..10).prop_map(|(min, max)| Step::check(checks::length(min, max))),
        (value_kind_strategy(), any::<bool>()).prop_map(|(kind, strict)| {
            if strict {
                Step::check(checks::is_type_strict(kind))
            } else {
                Step::check(checks::is_type(kind))
            }
        }),
        Just(Step::check(checks::required())),
        "[ a-c]{0,3}".prop_map(|cutset| Step::mutate(mutators::trim(&cutset))),
        Just(Step::mutate(mutators::trim_space())),
        Just(Step::mutate(mutators::to_lowercase())),
        Just(Step::mutate(mutators::to_string())),
        Just(Step::mutate(mutators::to_int())),
        Just(Step::mutate(mutators::to_float())),
    ]
}

/// Strategy for generating chains of stock steps
pub fn builtin_chain_strategy() -> impl Strategy<Value = Chain> {
    proptest::collection::vec(builtin_step_strategy(), 0..8).prop_map(Chain::new)
}

/// Outcome of one step in a recorded chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Cancel,
}

/// Strategy for generating step outcomes, weighted towards passing
pub fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        6 => Just(Outcome::Pass),
        3 => Just(Outcome::Fail),
        1 => Just(Outcome::Cancel),
    ]
}

fn checker_for(outcome: Outcome, index: usize) -> impl Fn(&Value) -> Result<(), CheckError> + Send + Sync {
    move |_: &Value| match outcome {
        Outcome::Pass => Ok(()),
        Outcome::Fail => Err(CheckError::new(format!("step {}", index))),
        Outcome::Cancel => Err(CheckError::cancel(format!("step {}", index))),
    }
}

proptest! {
    #[test]
    fn empty_chain_is_identity(value in json_value_strategy()) {
        let chain = Chain::new(Vec::<Step>::new());
        prop_assert_eq!(chain.run(value.clone()), Ok(value));
    }

    #[test]
    fn identity_steps_are_lossless(value in json_value_strategy(), steps in 0usize..6) {
        let chain = Chain::new((0..steps).map(|_| {
            Step::both(|_: &Value| -> Result<(), CheckError> { Ok(()) }, |v: Value| v)
        }));
        prop_assert_eq!(chain.run(value.clone()), Ok(value));
    }

    #[test]
    fn builtin_steps_never_panic(chain in builtin_chain_strategy(), value in json_value_strategy()) {
        match chain.run(value) {
            Ok(_) => {}
            Err(errors) => prop_assert!(!errors.is_empty()),
        }
    }

    #[test]
    fn errors_and_mutations_follow_outcomes(outcomes in proptest::collection::vec(outcome_strategy(), 0..12)) {
        let mutated = Arc::new(AtomicUsize::new(0));
        let steps: Vec<Step> = outcomes
            .iter()
            .enumerate()
            .map(|(index, outcome)| {
                let mutated = mutated.clone();
                Step::both(checker_for(*outcome, index), move |v: Value| {
                    mutated.fetch_add(1, Ordering::SeqCst);
                    v
                })
            })
            .collect();
        let chain = Chain::new(steps);

        let cancel_at = outcomes.iter().position(|o| *o == Outcome::Cancel);
        let executed = cancel_at.map_or(outcomes.len(), |i| i + 1);
        let expected_errors: Vec<String> = outcomes[..executed]
            .iter()
            .enumerate()
            .filter(|(_, o)| **o != Outcome::Pass)
            .map(|(i, _)| format!("step {}", i))
            .collect();

        match chain.run(Value::Null) {
            Ok(value) => {
                prop_assert!(expected_errors.is_empty());
                prop_assert_eq!(value, Value::Null);
            }
            Err(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
                prop_assert_eq!(messages, expected_errors);
                prop_assert_eq!(errors.is_cancelled(), cancel_at.is_some());
            }
        }

        // the cancelling step never mutates
        let expected_mutations = cancel_at.unwrap_or(outcomes.len());
        prop_assert_eq!(mutated.load(Ordering::SeqCst), expected_mutations);
    }
}
