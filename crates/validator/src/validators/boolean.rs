//! Boolean validator
//!
//! Strict by default. In leniency mode any present value is coerced by a
//! loose truthiness rule:
//!
//! | input                         | result  |
//! |-------------------------------|---------|
//! | `true` / `false`              | as-is   |
//! | number equal to zero          | `false` |
//! | any other number              | `true`  |
//! | `""`, `"false"`, `"0"`        | `false` |
//! | any other string              | `true`  |
//! | arrays and objects            | `true`  |
//!
//! Strings are compared literally: `"False"`, `" 0"` and `"0.0"` are truthy,
//! although the number `0.0` is falsy.

use serde_json::Value;

use crate::foundation::{DynValidate, Validate, ValidationError};

/// Validates booleans, optionally coercing other values.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let lenient = boolean(true, false);
/// assert_eq!(lenient.validate(&json!("0")).unwrap(), false);
/// assert_eq!(lenient.validate(&json!("anything")).unwrap(), true);
///
/// let strict = boolean(false, false);
/// assert!(strict.validate(&json!(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolValidator {
    /// Coerce non-boolean input instead of rejecting it.
    pub leniency: bool,
    /// Treat absent input as `false` instead of failing.
    pub optional_accept: bool,
}

impl BoolValidator {
    /// Creates a boolean validator.
    #[must_use]
    pub fn new(leniency: bool, optional_accept: bool) -> Self {
        Self {
            leniency,
            optional_accept,
        }
    }
}

impl Validate for BoolValidator {
    type Output = bool;

    fn validate(&self, input: &Value) -> Result<bool, ValidationError> {
        match input {
            Value::Null if self.optional_accept => Ok(false),
            Value::Null => Err(ValidationError::required()),
            Value::Bool(b) => Ok(*b),
            other if !self.leniency => Err(ValidationError::wrong_type("boolean", other)),
            Value::Number(n) => Ok(n.as_f64().is_none_or(|n| n != 0.0)),
            Value::String(s) => Ok(!matches!(s.as_str(), "" | "false" | "0")),
            _ => Ok(true),
        }
    }
}

impl DynValidate for BoolValidator {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        self.validate(input).map(Value::Bool)
    }
}

/// Creates a boolean validator.
///
/// `leniency` enables truthiness coercion; `optional_accept` maps absent
/// input to `false`.
#[must_use]
pub fn boolean(leniency: bool, optional_accept: bool) -> BoolValidator {
    BoolValidator::new(leniency, optional_accept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(-0.0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(2), true)]
    #[case(json!(-1.5), true)]
    #[case(json!(""), false)]
    #[case(json!("false"), false)]
    #[case(json!("0"), false)]
    #[case(json!("False"), true)]
    #[case(json!("0.0"), true)]
    #[case(json!(" "), true)]
    #[case(json!("anything"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    fn test_leniency_table(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(boolean(true, false).validate(&input).unwrap(), expected);
    }

    #[rstest]
    #[case(json!(1))]
    #[case(json!("true"))]
    #[case(json!([]))]
    fn test_strict_rejects_non_boolean(#[case] input: Value) {
        let err = boolean(false, false).validate(&input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongType);
    }

    #[test]
    fn test_absent_input() {
        let err = boolean(true, false).validate(&Value::Null).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);

        assert!(!boolean(false, true).validate(&Value::Null).unwrap());
        assert!(!boolean(true, true).validate(&Value::Null).unwrap());
    }

    #[test]
    fn test_in_place_coerces() {
        let mut slot = json!("0");
        boolean(true, false).validate_in_place(&mut slot).unwrap();
        assert_eq!(slot, json!(false));
    }
}
