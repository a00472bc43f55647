//! Core traits for the validation system
//!
//! Two views of the same validator:
//!
//! - [`Validate`] is the typed view. It reads an input [`Value`] and
//!   produces a strongly-typed output (`f64`, `String`, `Vec<T>`, ...).
//! - [`DynValidate`] is the object-safe view. It maps a `Value` to a
//!   `Value`, so validators of different output types can sit side by side
//!   in an object schema, and it carries the in-place mutation mode.
//!
//! Every built-in validator implements both.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{Optional, Or};
use crate::foundation::{Absent, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The typed validation capability.
///
/// Validators are immutable once built and never mutate their input through
/// this trait: aggregates are copied before being transformed.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let age = number(NumberOptions::new().only_int(OnlyInt::Floor).min(0.0));
/// assert_eq!(age.validate(&json!("3.7")).unwrap(), 3.0);
/// ```
pub trait Validate {
    /// The strongly-typed value produced on success.
    type Output;

    /// Validates the input, returning the typed output or the first failure.
    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationError>;
}

// ============================================================================
// OBJECT-SAFE VALIDATOR TRAIT
// ============================================================================

/// Value-to-value validation, usable as `dyn DynValidate`.
///
/// `validate_value` is copy-on-validate. `validate_in_place` is the explicit
/// opt-in to mutate the caller's value: object and array validators rewrite
/// their aggregate field by field, and a failure part-way through leaves the
/// fields already processed in their coerced form.
pub trait DynValidate: Send + Sync {
    /// Validates the input and returns the coerced value.
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError>;

    /// Validates `slot` and replaces its contents with the coerced value.
    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        *slot = self.validate_value(slot)?;
        Ok(())
    }
}

/// A validator that can be shared across several parent trees.
pub type SharedValidator = Arc<dyn DynValidate>;

impl<T: DynValidate + ?Sized> DynValidate for Arc<T> {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        (**self).validate_value(input)
    }

    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        (**self).validate_in_place(slot)
    }
}

impl<T: DynValidate + ?Sized> DynValidate for Box<T> {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        (**self).validate_value(input)
    }

    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        (**self).validate_in_place(slot)
    }
}

impl<T: DynValidate + ?Sized> Validate for Arc<T> {
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        (**self).validate_value(input)
    }
}

impl<T: DynValidate + ?Sized> Validate for Box<T> {
    type Output = Value;

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        (**self).validate_value(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let id = number(NumberOptions::default()).or(string(StringOptions::default()));
/// assert!(id.validate(&json!("5")).unwrap().is_left());
///
/// let retries = number(NumberOptions::default()).optional(3.0);
/// assert_eq!(retries.validate(&json!(null)).unwrap().into_inner(), 3.0);
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Falls back to `other` when `self` rejects the input.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate,
    {
        Or::new(self, other)
    }

    /// Returns `default` when the input is absent.
    fn optional<D: Clone>(self, default: D) -> Optional<Self, D> {
        Optional::new(self, default)
    }

    /// Returns [`Absent`] when the input is absent.
    fn nullable(self) -> Optional<Self, Absent> {
        Optional::new(self, Absent)
    }

    /// Erases the output type so the validator can be shared across schemas.
    fn shared(self) -> SharedValidator
    where
        Self: DynValidate + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
