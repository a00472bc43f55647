//! Number validator
//!
//! Accepts JSON numbers and numeric strings, optionally forces integers, and
//! checks inclusive bounds.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{DynValidate, Validate, ValidationError, number_value};

/// Longest numeric prefix, in host float-literal syntax.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

// ============================================================================
// OPTIONS
// ============================================================================

/// What to do with a number that has a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnlyInt {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to nearest; halves go toward positive infinity.
    Round,
    /// Reject with [`ErrorKind::NonInteger`](crate::foundation::ErrorKind::NonInteger).
    Error,
}

impl OnlyInt {
    fn apply(self, value: f64) -> Result<f64, ValidationError> {
        match self {
            Self::Floor => Ok(value.floor()),
            Self::Ceil => Ok(value.ceil()),
            Self::Round => Ok(round_half_up(value)),
            Self::Error => Err(ValidationError::non_integer(value)),
        }
    }
}

/// Options for [`number`].
///
/// Bounds are inclusive and apply to the value after rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberOptions {
    /// Integer handling; `None` accepts fractions as-is.
    pub only_int: Option<OnlyInt>,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
}

impl NumberOptions {
    /// Options with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets integer handling.
    #[must_use = "builder methods must be chained or built"]
    pub fn only_int(mut self, mode: OnlyInt) -> Self {
        self.only_int = Some(mode);
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates numbers and numeric strings.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let v = number(NumberOptions::new().only_int(OnlyInt::Floor).min(0.0));
/// assert_eq!(v.validate(&json!("3.7")).unwrap(), 3.0);
/// assert!(v.validate(&json!("-1")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberValidator {
    options: NumberOptions,
}

impl NumberValidator {
    /// Creates a number validator.
    #[must_use]
    pub fn new(options: NumberOptions) -> Self {
        Self { options }
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> &NumberOptions {
        &self.options
    }
}

impl Validate for NumberValidator {
    type Output = f64;

    fn validate(&self, input: &Value) -> Result<f64, ValidationError> {
        let mut value = match input {
            Value::Null => return Err(ValidationError::required()),
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValidationError::wrong_type("number", input))?,
            Value::String(s) => {
                parse_float(s).ok_or_else(|| ValidationError::wrong_type("number", input))?
            }
            other => return Err(ValidationError::wrong_type("number", other)),
        };

        if let Some(mode) = self.options.only_int {
            if value.fract() != 0.0 {
                value = mode.apply(value)?;
            }
        }

        if let Some(min) = self.options.min {
            if value < min {
                return Err(ValidationError::too_small(min, value));
            }
        }
        if let Some(max) = self.options.max {
            if value > max {
                return Err(ValidationError::too_large(max, value));
            }
        }

        Ok(value)
    }
}

impl DynValidate for NumberValidator {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        self.validate(input).map(number_value)
    }
}

/// Creates a number validator.
#[must_use]
pub fn number(options: NumberOptions) -> NumberValidator {
    NumberValidator::new(options)
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses the longest numeric prefix of `s`, after leading whitespace.
///
/// Only ASCII digits count, and the skipped whitespace is the ECMAScript
/// set (see `is_leading_space`), not Unicode `White_Space`.
/// `"  12.5kg"` yields `12.5`. Returns `None` when there is no numeric prefix
/// or the result is not finite.
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.find(s.trim_start_matches(is_leading_space))?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Whitespace and line terminators skipped before a numeric string.
///
/// Includes U+FEFF; excludes U+0085 and U+180E.
fn is_leading_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// ============================================================================
// TESTS
// ============================================================================
