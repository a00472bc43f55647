//! Array validator

use serde_json::Value;

use crate::foundation::{DynValidate, Validate, ValidationError};

/// Options for [`array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArrayOptions {
    /// Minimum number of elements, inclusive.
    pub min: Option<usize>,
    /// Maximum number of elements, inclusive.
    pub max: Option<usize>,
}

impl ArrayOptions {
    /// Options with no size constraint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// Validates every element of a JSON array with the same validator.
///
/// The size is checked before any element (maximum first, then minimum).
/// Elements are then validated in index order and the first failure aborts,
/// reported with the element's index as its path.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let scores = array(number(NumberOptions::default()), ArrayOptions::new().max(3));
/// assert_eq!(scores.validate(&json!([1, "2", 3])).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(scores.validate(&json!([1, 2, 3, 4])).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArrayValidator<V> {
    element: V,
    options: ArrayOptions,
}

impl<V> ArrayValidator<V> {
    /// Creates an array validator.
    pub fn new(element: V, options: ArrayOptions) -> Self {
        Self { element, options }
    }

    /// Returns the element validator.
    pub fn element(&self) -> &V {
        &self.element
    }

    /// Returns the configured options.
    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    fn items<'a>(&self, input: &'a Value) -> Result<&'a [Value], ValidationError> {
        match input {
            Value::Null => Err(ValidationError::required()),
            Value::Array(items) => {
                self.check_size(items.len())?;
                Ok(items)
            }
            other => Err(ValidationError::wrong_type("array", other)),
        }
    }

    fn check_size(&self, len: usize) -> Result<(), ValidationError> {
        if let Some(max) = self.options.max {
            if len > max {
                return Err(ValidationError::too_many_items(max, len));
            }
        }
        if let Some(min) = self.options.min {
            if len < min {
                return Err(ValidationError::too_few_items(min, len));
            }
        }
        Ok(())
    }
}

impl<V: Validate> Validate for ArrayValidator<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, input: &Value) -> Result<Vec<V::Output>, ValidationError> {
        self.items(input)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.element
                    .validate(item)
                    .map_err(|err| err.at_index(index))
            })
            .collect()
    }
}

impl<V: DynValidate> DynValidate for ArrayValidator<V> {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        let mut copy = Value::Array(self.items(input)?.to_vec());
        self.validate_in_place(&mut copy)?;
        Ok(copy)
    }

    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        let items = match slot {
            Value::Null => return Err(ValidationError::required()),
            Value::Array(items) => items,
            other => return Err(ValidationError::wrong_type("array", other)),
        };
        self.check_size(items.len())?;

        for (index, item) in items.iter_mut().enumerate() {
            self.element
                .validate_in_place(item)
                .map_err(|err| err.at_index(index))?;
        }
        Ok(())
    }
}

/// Creates an array validator.
pub fn array<V>(element: V, options: ArrayOptions) -> ArrayValidator<V> {
    ArrayValidator::new(element, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::validators::{NumberOptions, StringOptions, number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_elements_are_coerced() {
        let v = array(number(NumberOptions::default()), ArrayOptions::default());
        assert_eq!(v.validate(&json!([1, "2", 3])).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(v.validate_value(&json!([1, "2", 3])).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_empty_array() {
        let v = array(number(NumberOptions::default()), ArrayOptions::default());
        assert!(v.validate(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_size_checked_before_elements() {
        let v = array(number(NumberOptions::default()), ArrayOptions::new().max(2));
        let err = v.validate(&json!(["x", "y", "z"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfRange);
        assert_eq!(err.field, None);
    }

    #[test]
    fn test_max_checked_before_min() {
        let v = array(
            number(NumberOptions::default()),
            ArrayOptions::new().min(5).max(2),
        );
        let err = v.validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.param("max"), Some("2"));
    }

    #[test]
    fn test_too_few_items() {
        let v = array(number(NumberOptions::default()), ArrayOptions::new().min(1));
        let err = v.validate(&json!([])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutOfRange);
        assert!(err.message.contains("too small"));
    }

    #[test]
    fn test_first_element_failure_carries_index() {
        let v = array(string(StringOptions::default()), ArrayOptions::default());
        let err = v.validate(&json!(["a", 1, null])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongType);
        assert_eq!(err.field.as_deref(), Some("[1]"));
    }

    #[test]
    fn test_rejects_non_arrays() {
        let v = array(number(NumberOptions::default()), ArrayOptions::default());
        assert_eq!(v.validate(&Value::Null).unwrap_err().kind, ErrorKind::Required);
        assert_eq!(v.validate(&json!({"0": 1})).unwrap_err().kind, ErrorKind::WrongType);
    }

    #[test]
    fn test_in_place_rewrites_elements() {
        let v = array(number(NumberOptions::default()), ArrayOptions::default());
        let mut input = json!(["1", "2"]);
        v.validate_in_place(&mut input).unwrap();
        assert_eq!(input, json!([1, 2]));
    }

    #[test]
    fn test_nested_arrays() {
        let v = array(
            array(number(NumberOptions::default()), ArrayOptions::default()),
            ArrayOptions::default(),
        );
        assert_eq!(
            v.validate(&json!([[1], ["2", 3]])).unwrap(),
            vec![vec![1.0], vec![2.0, 3.0]]
        );
        let err = v.validate(&json!([[1], [2, "x"]])).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("[1][1]"));
    }
}
