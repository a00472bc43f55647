//! OPTIONAL combinator - defaults for absent input

use serde_json::Value;

use crate::foundation::{Absent, DynValidate, Either, Validate, ValidationError};

/// Substitutes a default for absent input.
///
/// When the input is `null` the default is returned and the wrapped
/// validator is not invoked. Any other input is handed to the wrapped
/// validator, failures included.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let page_size = optional(number(NumberOptions::new().max(100.0)), 20.0);
/// assert_eq!(page_size.validate(&json!(null)).unwrap(), Either::Right(20.0));
/// assert_eq!(page_size.validate(&json!("50")).unwrap(), Either::Left(50.0));
/// assert!(page_size.validate(&json!(500)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V, D> {
    pub(crate) inner: V,
    pub(crate) default: D,
}

impl<V, D> Optional<V, D> {
    /// Wraps `inner`, answering absent input with `default`.
    pub fn new(inner: V, default: D) -> Self {
        Self { inner, default }
    }

    /// Returns a reference to the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the value substituted for absent input.
    pub fn default_value(&self) -> &D {
        &self.default
    }

    /// Unwraps the inner validator, dropping the default.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, D> Validate for Optional<V, D>
where
    V: Validate,
    D: Clone,
{
    type Output = Either<V::Output, D>;

    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationError> {
        match input {
            Value::Null => Ok(Either::Right(self.default.clone())),
            present => self.inner.validate(present).map(Either::Left),
        }
    }
}

impl<V, D> DynValidate for Optional<V, D>
where
    V: DynValidate,
    D: Clone + Into<Value> + Send + Sync,
{
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        match input {
            Value::Null => Ok(self.default.clone().into()),
            present => self.inner.validate_value(present),
        }
    }

    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        if slot.is_null() {
            *slot = self.default.clone().into();
            Ok(())
        } else {
            self.inner.validate_in_place(slot)
        }
    }
}

/// Wraps a validator with a default for absent input.
pub fn optional<V, D>(validator: V, default: D) -> Optional<V, D>
where
    V: Validate,
    D: Clone,
{
    Optional::new(validator, default)
}

/// Wraps a validator so absent input yields [`Absent`].
pub fn nullable<V: Validate>(validator: V) -> Optional<V, Absent> {
    Optional::new(validator, Absent)
}
