//! Property-based tests for the stock mutators and checkers
//!
//! These tests verify that mutators always produce the kind they promise and
//! that chains built from them behave consistently across a wide range of
//! inputs.

use bleach_core::{checks, mutators, Chain, Checker, Mutator, Value, ValueKind};
use proptest::prelude::*;
use serde_json::json;

/// Strategy for generating scalar JSON values
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        ".{0,40}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn to_string_always_yields_a_string(value in scalar_strategy()) {
        prop_assert!(mutators::to_string().mutate(value).is_string());
    }

    #[test]
    fn to_int_always_yields_an_integer(value in scalar_strategy()) {
        let out = mutators::to_int().mutate(value);
        prop_assert_eq!(ValueKind::of(&out), ValueKind::Integer);
    }

    #[test]
    fn to_float_always_yields_a_number(value in scalar_strategy()) {
        prop_assert!(mutators::to_float().mutate(value).is_number());
    }

    #[test]
    fn integers_survive_string_round_trip(n in any::<i64>()) {
        let chain = Chain::builder()
            .mutate(mutators::to_string())
            .mutate(mutators::to_int())
            .build();
        prop_assert_eq!(chain.run(json!(n)), Ok(json!(n)));
    }

    #[test]
    fn trim_space_is_idempotent(s in "\\s{0,3}[a-z ]{0,10}\\s{0,3}") {
        let once = mutators::trim_space().mutate(json!(s));
        let twice = mutators::trim_space().mutate(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn length_agrees_with_char_count(s in ".{0,20}", min in 0usize..10, max in 0usize..10) {
        let count = s.chars().count();
        let expected = (min == 0 || count >= min) && (max == 0 || count <= max);
        prop_assert_eq!(checks::length(min, max).check(&json!(s)).is_ok(), expected);
    }

    #[test]
    fn strict_type_check_matches_kind(value in scalar_strategy()) {
        let kind = ValueKind::of(&value);
        prop_assert!(checks::is_type_strict(kind).check(&value).is_ok());
        prop_assert!(checks::is_type(kind).check(&value).is_ok());
    }
}
