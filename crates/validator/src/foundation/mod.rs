//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`DynValidate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`OptionsError`]
//! - **Outputs**: [`Either`], [`Absent`]
//!
//! # Architecture
//!
//! ## 1. A closed input type
//!
//! Untrusted input is a [`serde_json::Value`]: null, bool, number, string,
//! array or object. Validators pattern-match on the variant they expect and
//! never assume a shape without checking it. `Value::Null` is "absent".
//!
//! ## 2. Typed outputs
//!
//! Each validator declares what it produces:
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let tags = array(string(StringOptions::new().max(16)), ArrayOptions::new().max(8));
//! let tags: Vec<String> = tags.validate(&json!(["a", "b"])).unwrap();
//! assert_eq!(tags, ["a", "b"]);
//! ```
//!
//! ## 3. Composition
//!
//! Combinators take validators and return validators. Object schemas hold
//! their children as [`SharedValidator`]s, so one child can be reused by
//! several parents.
//!
//! ## 4. Fail fast
//!
//! The first violated constraint aborts validation. Only
//! [`or`](crate::combinators::or) recovers from a failure.

pub mod error;
pub mod output;
pub mod traits;

pub use error::{ErrorKind, OptionsError, ValidationError};
pub use output::{Absent, Either, number_value};
pub use traits::{DynValidate, SharedValidator, Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
