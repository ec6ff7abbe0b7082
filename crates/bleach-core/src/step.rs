//! Checker and mutator capabilities, and the steps that carry them
//!
//! A [`Step`] holds an optional check and an optional mutation. A chain
//! refuses steps that carry neither.
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::error::CheckError;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Validates a value without changing it
pub trait Checker: Send + Sync {
    /// Return an error describing why `value` is not acceptable
    fn check(&self, value: &Value) -> Result<(), CheckError>;
}

/// Transforms a value into a new one
pub trait Mutator: Send + Sync {
    /// Produce the next working value
    fn mutate(&self, value: Value) -> Value;
}

impl<F> Checker for F
where
    F: Fn(&Value) -> Result<(), CheckError> + Send + Sync,
{
    fn check(&self, value: &Value) -> Result<(), CheckError> {
        self(value)
    }
}

impl<F> Mutator for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn mutate(&self, value: Value) -> Value {
        self(value)
    }
}

/// A chain element: a check, a mutation, or both
#[derive(Clone, Default)]
pub struct Step {
    name: Option<String>,
    checker: Option<Arc<dyn Checker>>,
    mutator: Option<Arc<dyn Mutator>>,
}

impl Step {
    /// Create a step from optional capabilities.
    ///
    /// A step with neither capability can be built, but no chain will accept it.
    pub fn new(checker: Option<Arc<dyn Checker>>, mutator: Option<Arc<dyn Mutator>>) -> Self {
        Self {
            name: None,
            checker,
            mutator,
        }
    }

    /// A step that only checks
    pub fn check<C: Checker + 'static>(checker: C) -> Self {
        Self::new(Some(Arc::new(checker)), None)
    }

    /// A step that only mutates
    pub fn mutate<M: Mutator + 'static>(mutator: M) -> Self {
        Self::new(None, Some(Arc::new(mutator)))
    }

    /// A step that checks with one value and mutates with another
    pub fn both<C, M>(checker: C, mutator: M) -> Self
    where
        C: Checker + 'static,
        M: Mutator + 'static,
    {
        Self::new(Some(Arc::new(checker)), Some(Arc::new(mutator)))
    }

    /// A step backed by one value that is both a checker and a mutator
    pub fn checked_mutator<T>(inner: T) -> Self
    where
        T: Checker + Mutator + 'static,
    {
        let shared = Arc::new(inner);
        Self::new(Some(shared.clone()), Some(shared))
    }

    /// Attach a name shown in debug output
    pub fn named<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The step's name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the step checks
    pub fn has_check(&self) -> bool {
        self.checker.is_some()
    }

    /// Whether the step mutates
    pub fn has_mutate(&self) -> bool {
        self.mutator.is_some()
    }

    /// A step is usable in a chain when it has at least one capability
    pub fn is_valid(&self) -> bool {
        self.has_check() || self.has_mutate()
    }

    pub(crate) fn checker(&self) -> Option<&dyn Checker> {
        self.checker.as_deref()
    }

    pub(crate) fn mutator(&self) -> Option<&dyn Mutator> {
        self.mutator.as_deref()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("check", &self.has_check())
            .field("mutate", &self.has_mutate())
            .finish()
    }
}
