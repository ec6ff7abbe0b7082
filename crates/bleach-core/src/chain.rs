//! Chain construction and execution
//!
//! A [`Chain`] runs a value through its steps in order. For every step the
//! check (if any) sees the current working value first, then the mutation (if
//! any) replaces it. Failed checks are collected and the chain keeps going, so
//! a single run reports every problem it can find. A cancellation error stops
//! the run on the spot.
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

use crate::error::{ChainError, CheckErrors};
use crate::step::{Checker, Mutator, Step};
use crate::value::Value;

/// An ordered, immutable sequence of steps
#[derive(Debug, Clone, Default)]
pub struct Chain {
    steps: Vec<Step>,
}

impl Chain {
    /// Create a chain from the given steps.
    ///
    /// # Panics
    ///
    /// Panics if any step has neither a check nor a mutation. That is a
    /// programming mistake, use [`Chain::try_new`] when steps come from data.
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        match Self::try_new(steps) {
            Ok(chain) => chain,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a chain, rejecting steps that have neither capability
    pub fn try_new<I>(steps: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = Step>,
    {
        let steps: Vec<Step> = steps.into_iter().collect();

        if let Some(index) = steps.iter().position(|step| !step.is_valid()) {
            return Err(ChainError::EmptyStep { index });
        }

        log::debug!("Built chain with {} step(s)", steps.len());
        Ok(Self { steps })
    }

    /// Start building a chain step by step
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps, in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run `value` through every step.
    ///
    /// Returns the final working value when no check failed. Otherwise returns
    /// every collected error and drops the value, even if only one step failed.
    pub fn run(&self, value: Value) -> Result<Value, CheckErrors> {
        let mut working = value;
        let mut errors = CheckErrors::new();

        for step in &self.steps {
            if let Some(checker) = step.checker() {
                if let Err(error) = checker.check(&working) {
                    let cancel = error.is_cancel();
                    errors.push(error);
                    if cancel {
                        break;
                    }
                }
            }

            if let Some(mutator) = step.mutator() {
                working = mutator.mutate(working);
            }
        }

        errors.into_result(working)
    }

    /// Run a copy of `value`, leaving the caller's value untouched
    pub fn run_ref(&self, value: &Value) -> Result<Value, CheckErrors> {
        self.run(value.clone())
    }
}

/// Incremental [`Chain`] construction
#[derive(Debug, Default)]
pub struct ChainBuilder {
    steps: Vec<Step>,
}

impl ChainBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prepared step
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a check-only step
    pub fn check<C: Checker + 'static>(self, checker: C) -> Self {
        self.step(Step::check(checker))
    }

    /// Append a mutate-only step
    pub fn mutate<M: Mutator + 'static>(self, mutator: M) -> Self {
        self.step(Step::mutate(mutator))
    }

    /// Append a step that checks and then mutates
    pub fn both<C, M>(self, checker: C, mutator: M) -> Self
    where
        C: Checker + 'static,
        M: Mutator + 'static,
    {
        self.step(Step::both(checker, mutator))
    }

    /// Finish the chain, rejecting invalid steps
    pub fn try_build(self) -> Result<Chain, ChainError> {
        Chain::try_new(self.steps)
    }

    /// Finish the chain.
    ///
    /// # Panics
    ///
    /// Panics if any step has neither a check nor a mutation.
    pub fn build(self) -> Chain {
        Chain::new(self.steps)
    }
}
