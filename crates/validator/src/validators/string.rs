//! String validator
//!
//! Unlike [`number`](super::number), this validator never coerces: a JSON
//! number is rejected even when it would print as a valid string.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{DynValidate, OptionsError, Validate, ValidationError};

/// Options for [`string`].
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    /// Minimum length in characters, inclusive.
    pub min: Option<usize>,
    /// Maximum length in characters, inclusive.
    pub max: Option<usize>,
    /// Pattern searched anywhere in the string; anchor it for a full match.
    pub regexp: Option<Regex>,
}

impl StringOptions {
    /// Options with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets an already compiled pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn regexp(mut self, regexp: Regex) -> Self {
        self.regexp = Some(regexp);
        self
    }

    /// Compiles and sets a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidPattern`] if `pattern` does not compile.
    pub fn pattern(self, pattern: &str) -> Result<Self, OptionsError> {
        Ok(self.regexp(Regex::new(pattern)?))
    }
}

/// Validates strings by length and pattern.
///
/// Checks run in order: minimum length, maximum length, pattern.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let code = string(StringOptions::new().min(2).max(4).pattern("^[A-Z]+$").unwrap());
/// assert_eq!(code.validate(&json!("AB")).unwrap(), "AB");
/// assert!(code.validate(&json!("ab")).is_err());
/// assert!(code.validate(&json!(12)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    options: StringOptions,
}

impl StringValidator {
    /// Creates a string validator.
    #[must_use]
    pub fn new(options: StringOptions) -> Self {
        Self { options }
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> &StringOptions {
        &self.options
    }

    fn check<'a>(&self, input: &'a Value) -> Result<&'a str, ValidationError> {
        let value = match input {
            Value::Null => return Err(ValidationError::required()),
            Value::String(s) => s.as_str(),
            other => return Err(ValidationError::wrong_type("string", other)),
        };

        if self.options.min.is_some() || self.options.max.is_some() {
            let length = value.chars().count();
            if let Some(min) = self.options.min {
                if length < min {
                    return Err(ValidationError::too_short(min, length));
                }
            }
            if let Some(max) = self.options.max {
                if length > max {
                    return Err(ValidationError::too_long(max, length));
                }
            }
        }

        if let Some(regexp) = &self.options.regexp {
            if !regexp.is_match(value) {
                return Err(ValidationError::invalid_format(regexp.as_str()));
            }
        }

        Ok(value)
    }
}

impl Validate for StringValidator {
    type Output = String;

    fn validate(&self, input: &Value) -> Result<String, ValidationError> {
        self.check(input).map(str::to_owned)
    }
}

impl DynValidate for StringValidator {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        self.check(input)?;
        Ok(input.clone())
    }

    // Strings are returned unchanged, so there is nothing to write back.
    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        self.check(slot).map(|_| ())
    }
}

/// Creates a string validator.
#[must_use]
pub fn string(options: StringOptions) -> StringValidator {
    StringValidator::new(options)
}
