//! Prelude module for convenient imports.
//!
//! Provides a single `use tollgate_validator::prelude::*;` import that brings
//! in the traits, error types, validators, and combinators.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let login = obj(
//!     schema! {
//!         "user" => string(StringOptions::new().min(3)),
//!         "remember" => boolean(true, true),
//!     },
//!     ObjectOptions::default(),
//! );
//! assert!(login.validate(&json!({"user": "alice"})).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, outputs
// ============================================================================

pub use crate::foundation::{
    Absent, DynValidate, Either, ErrorKind, OptionsError, SharedValidator, Validate, ValidateExt,
    ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    ArrayOptions, ArrayValidator, BoolValidator, NumberOptions, NumberValidator, ObjectOptions,
    ObjectValidator, OnlyInt, Schema, StringOptions, StringValidator, UnknownProperties, array,
    boolean, number, obj, string,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Optional, Or, nullable, optional, or};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::schema;
