//! # tollgate-validator
//!
//! Composable validators that turn untrusted, loosely-typed input into
//! strongly-typed, constraint-satisfying values, or fail with a classified
//! error.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let signup = obj(
//!     schema! {
//!         "email" => string(StringOptions::new().pattern("@").unwrap()),
//!         "age" => number(NumberOptions::new().only_int(OnlyInt::Floor).min(13.0)),
//!         "newsletter" => boolean(true, true),
//!         "tags" => array(string(StringOptions::new().max(20)), ArrayOptions::new().max(5)),
//!     },
//!     ObjectOptions::new().unknown_properties(UnknownProperties::OnlyRemove),
//! );
//!
//! let out = signup
//!     .validate(&json!({"email": "a@b.c", "age": "21.9", "newsletter": "0", "utm": "x"}))
//!     .unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(out),
//!     json!({"email": "a@b.c", "age": 21, "newsletter": false})
//! );
//! ```
//!
//! ## Building blocks
//!
//! - **Primitive**: [`number`](validators::number), [`string`](validators::string),
//!   [`boolean`](validators::boolean)
//! - **Structural**: [`obj`](validators::obj), [`array`](validators::array)
//! - **Combinators**: [`or`](combinators::or), [`optional`](combinators::optional),
//!   [`nullable`](combinators::nullable)
//!
//! Validators are immutable after construction and `Send + Sync`, so one tree
//! can validate many inputs from many threads.
//!
//! ## Copy or rewrite
//!
//! [`Validate::validate`](foundation::Validate::validate) never touches its
//! input. [`DynValidate::validate_in_place`](foundation::DynValidate::validate_in_place)
//! and [`ObjectValidator::validate_owned`](validators::ObjectValidator::validate_owned)
//! rewrite the caller's aggregate instead; after a failure the fields visited
//! so far stay rewritten.

// ValidationError is the single error type for every validator; boxing it
// would add indirection to every call.
#![allow(clippy::result_large_err)]
// Nested combinators (Or<Optional<...>, ...>) produce deep generic types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
