//! Bleach Core - check and mutate chains for sanitizing input
//!
//! Bleach runs a dynamic value through an ordered chain of steps. Each step
//! checks the value, mutates it, or both. A run returns the final value when
//! every check passed, or every error that was collected along the way.
//!
//! # Main Components
//!
//! - **Chain**: ordered steps, check-then-mutate per step, error accumulation
//!   and early cancellation
//! - **Checkers**: length, type, pattern and presence checks
//! - **Mutators**: trimming, case folding and kind conversion
//! - **Messages**: key-to-message catalogs injected into checkers
//! - **Configuration**: chains described as JSON
//!
//! # Example
//!
//! ```rust
//! use bleach_core::{checks, mutators, Chain};
//! use serde_json::json;
//!
//! let username = Chain::builder()
//!     .check(checks::required())
//!     .mutate(mutators::trim_space())
//!     .mutate(mutators::to_lowercase())
//!     .check(checks::length(3, 16))
//!     .build();
//!
//! assert_eq!(username.run(json!("  Alice ")).unwrap(), json!("alice"));
//!
//! let errors = username.run(json!("  x ")).unwrap_err();
//! assert_eq!(errors.messages(), vec!["must be between 3 and 16 characters long"]);
//! ```
//!
//! Copyright (c) 2025 Bleach Team
//! Licensed under the Apache-2.0 license

pub mod chain;
pub mod checks;
pub mod config;
pub mod error;
pub mod messages;
pub mod mutators;
pub mod step;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use chain::{Chain, ChainBuilder};
pub use checks::Throws;
pub use config::{ChainConfig, StepConfig};
pub use error::{ChainError, CheckError, CheckErrors, ConfigError, ErrorKind, Result};
pub use messages::{MessageCatalog, MessageProvider};
pub use step::{Checker, Mutator, Step};
pub use value::{Value, ValueKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
