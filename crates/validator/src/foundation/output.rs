//! Output types shared by the combinators
//!
//! - [`Either`]: union output of `or` and `optional`
//! - [`Absent`]: the "no value" default of `nullable`
//! - [`number_value`]: folds a validated `f64` back into a JSON value

use serde_json::{Number, Value};

/// Largest integer that `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// EITHER
// ============================================================================

/// Output of a validator that can succeed along one of two paths.
///
/// For [`Or`](crate::combinators::Or), `Left` is the first branch and
/// `Right` the second. For [`Optional`](crate::combinators::Optional),
/// `Left` is the wrapped validator's output and `Right` the default.
///
/// # Examples
///
/// ```
/// use tollgate_validator::foundation::Either;
///
/// let port: Either<f64, f64> = Either::Right(8080.0);
/// assert!(port.is_right());
/// assert_eq!(port.into_inner(), 8080.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// Produced by the first (or wrapped) validator.
    Left(L),
    /// Produced by the second validator (or the default).
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is the `Left` variant.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is the `Right` variant.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Maps the left value.
    pub fn map_left<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Maps the right value.
    pub fn map_right<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }
}

impl<T> Either<T, T> {
    /// Collapses an `Either` whose sides share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }
}

impl<L, R> From<Either<L, R>> for Value
where
    L: Into<Value>,
    R: Into<Value>,
{
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => l.into(),
            Either::Right(r) => r.into(),
        }
    }
}

// ============================================================================
// ABSENT
// ============================================================================

/// The "no value" produced by `nullable` when its input is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl From<Absent> for Value {
    fn from(_: Absent) -> Self {
        Self::Null
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Converts a validated number into a JSON value.
///
/// Integral values within ±2^53 become JSON integers so `"2"` coerced by the
/// number validator reads back as `2`, not `2.0`. Everything else becomes a
/// JSON float. Non-finite values cannot be represented and become `null`;
/// the number validator never produces them.
#[must_use]
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_either_accessors() {
        let left: Either<i32, &str> = Either::Left(1);
        assert!(left.is_left());
        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);

        let right: Either<i32, &str> = Either::Right("x");
        assert!(right.is_right());
        assert_eq!(right.map_right(str::len), Either::Right(1));
    }

    #[test]
    fn test_either_into_value() {
        let v: Value = Either::<String, bool>::Right(true).into();
        assert_eq!(v, json!(true));
        let v: Value = Either::<String, bool>::Left("a".to_owned()).into();
        assert_eq!(v, json!("a"));
    }

    #[test]
    fn test_absent_is_null() {
        assert_eq!(Value::from(Absent), Value::Null);
    }

    #[test]
    fn test_number_value_integral() {
        assert_eq!(number_value(3.0), json!(3));
        assert_eq!(number_value(-0.0), json!(0));
        assert_eq!(number_value(-42.0), json!(-42));
    }

    #[test]
    fn test_number_value_fractional() {
        assert_eq!(number_value(3.5), json!(3.5));
        assert_eq!(number_value(1e300), json!(1e300));
    }
}
