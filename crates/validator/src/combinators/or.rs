//! OR combinator - alternation between two validators
//!
//! [`Or`] applies its first validator and, if that one fails for any reason,
//! applies the second to the same input. It is the only place in the crate
//! where a failure is recovered from.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let id = or(number(NumberOptions::default()), string(StringOptions::default()));
//!
//! // First branch succeeds via numeric-string coercion
//! assert_eq!(id.validate(&json!("5")).unwrap(), Either::Left(5.0));
//!
//! // First branch fails, second succeeds
//! assert_eq!(id.validate(&json!("abc")).unwrap(), Either::Right("abc".to_owned()));
//! ```

use serde_json::Value;

use crate::foundation::{DynValidate, Either, Validate, ValidationError};

/// Alternation of two validators.
///
/// If the first validator fails, its error is discarded and the second
/// validator's outcome, success or failure, is returned as-is. When both
/// fail, the caller sees only the second error.
///
/// # Type Parameters
///
/// * `L` - The first validator, tried on every input
/// * `R` - The fallback validator, tried when `L` fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to try
    /// * `right` - The validator to try if the first fails
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    type Output = Either<L::Output, R::Output>;

    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationError> {
        match self.left.validate(input) {
            Ok(value) => Ok(Either::Left(value)),
            Err(error) => {
                tracing::trace!(%error, "first alternative rejected input, trying second");
                self.right.validate(input).map(Either::Right)
            }
        }
    }
}

// In-place mode keeps the default copy-on-validate behavior: a first branch
// that fails half-way must not leave its partial rewrite behind.
impl<L, R> DynValidate for Or<L, R>
where
    L: DynValidate,
    R: DynValidate,
{
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        match self.left.validate_value(input) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::trace!(%error, "first alternative rejected input, trying second");
                self.right.validate_value(input)
            }
        }
    }
}

/// Creates an `Or` combinator from two validators.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let v = or(string(StringOptions::new().min(5)), number(NumberOptions::default()));
/// let err = v.validate(&json!("ab")).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::WrongType); // from the second branch
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}
