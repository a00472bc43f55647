//! Error types for validation failures
//!
//! Every validator reports failure through [`ValidationError`]: a classified
//! [`ErrorKind`], a human-readable message, the path of the offending field
//! (when the failure happened below an object or array), and a short list of
//! parameters describing the violated constraint.
//!
//! Static codes and messages use `Cow<'static, str>` so the common case does
//! not allocate.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was absent where a value was mandatory.
    Required,
    /// Input's runtime type did not match and no coercion applied.
    WrongType,
    /// Numeric value, string length or array size outside its bounds.
    OutOfRange,
    /// String did not match the configured pattern.
    InvalidFormat,
    /// Number was not an integer under `OnlyInt::Error`.
    NonInteger,
    /// Object carried a field the schema does not declare.
    UnknownProperty,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::WrongType => "wrong_type",
            Self::OutOfRange => "out_of_range",
            Self::InvalidFormat => "invalid_format",
            Self::NonInteger => "non_integer",
            Self::UnknownProperty => "unknown_property",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A classified validation failure.
///
/// # Examples
///
/// ```
/// use tollgate_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::too_long(4, 7).at_field("name");
/// assert_eq!(error.kind, ErrorKind::OutOfRange);
/// assert_eq!(error.field.as_deref(), Some("name"));
/// assert_eq!(error.param("max"), Some("4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What kind of constraint was violated.
    pub kind: ErrorKind,

    /// Human-readable description in English.
    pub message: Cow<'static, str>,

    /// Path to the failing value, e.g. `user.tags[2]`.
    ///
    /// `None` when the failure is at the root of the validated value.
    pub field: Option<String>,

    /// Constraint parameters, in insertion order.
    ///
    /// Example: `[("min", "5"), ("actual", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the field path, replacing any existing one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Prefixes the path with an object field name.
    ///
    /// Called by the object validator as a child failure travels upward, so
    /// the innermost segment is added first.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_field(mut self, name: &str) -> Self {
        self.field = Some(match self.field.take() {
            None => name.to_owned(),
            Some(rest) if rest.starts_with('[') => format!("{name}{rest}"),
            Some(rest) => format!("{name}.{rest}"),
        });
        self
    }

    /// Prefixes the path with an array index.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_index(mut self, index: usize) -> Self {
        self.field = Some(match self.field.take() {
            None => format!("[{index}]"),
            Some(rest) if rest.starts_with('[') => format!("[{index}]{rest}"),
            Some(rest) => format!("[{index}].{rest}"),
        });
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Shorthand for `self.kind.code()`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Input was absent.
    #[must_use]
    pub fn required() -> Self {
        Self::new(ErrorKind::Required, "input is required")
    }

    /// Input had the wrong runtime type.
    #[must_use]
    pub fn wrong_type(expected: &'static str, actual: &Value) -> Self {
        let actual = json_type_name(actual);
        Self::new(
            ErrorKind::WrongType,
            format!("expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// Number below its lower bound.
    pub fn too_small<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("value {actual} is smaller than the minimum {min}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Number above its upper bound.
    pub fn too_large<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("value {actual} is larger than the maximum {max}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// String shorter than its minimum length.
    #[must_use]
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("input is too short: {actual} characters, at least {min} required"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// String longer than its maximum length.
    #[must_use]
    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("input is too long: {actual} characters, at most {max} allowed"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Array with fewer elements than its minimum.
    #[must_use]
    pub fn too_few_items(min: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("array is too small: {actual} items, at least {min} required"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Array with more elements than its maximum.
    #[must_use]
    pub fn too_many_items(max: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("array is too large: {actual} items, at most {max} allowed"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// String did not match its pattern.
    #[must_use]
    pub fn invalid_format(pattern: &str) -> Self {
        Self::new(
            ErrorKind::InvalidFormat,
            format!("input format is invalid: does not match /{pattern}/"),
        )
        .with_param("pattern", pattern.to_owned())
    }

    /// Number had a fractional part where only integers are accepted.
    #[must_use]
    pub fn non_integer(actual: f64) -> Self {
        Self::new(
            ErrorKind::NonInteger,
            format!("only integers are accepted, got {actual}"),
        )
        .with_param("actual", actual.to_string())
    }

    /// Object carried a field outside its schema.
    #[must_use]
    pub fn unknown_property(name: &str) -> Self {
        Self::new(
            ErrorKind::UnknownProperty,
            format!("unknown property '{name}'"),
        )
        .with_param("property", name.to_owned())
    }
}

/// Returns the JSON type name of a value, as used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// OPTIONS ERROR
// ============================================================================

/// Failure while building validator options.
///
/// Raised at configuration time, never during validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// The string pattern did not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

// ============================================================================
// TESTS
// ============================================================================
