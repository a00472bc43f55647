//! Built-in validators
//!
//! # Categories
//!
//! - **Primitive**: [`number`], [`string`], [`boolean`]
//! - **Structural**: [`obj`], [`array`]
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let order = obj(
//!     Schema::new()
//!         .field("sku", string(StringOptions::new().pattern("^[A-Z]{3}-\\d+$").unwrap()))
//!         .field("quantity", number(NumberOptions::new().only_int(OnlyInt::Error).min(1.0)))
//!         .field("gift", boolean(true, true)),
//!     ObjectOptions::new().unknown_properties(UnknownProperties::Error),
//! );
//!
//! let out = order.validate(&json!({"sku": "ABC-12", "quantity": "2", "gift": "0"})).unwrap();
//! assert_eq!(out["quantity"], json!(2));
//! assert_eq!(out["gift"], json!(false));
//! ```

pub mod array;
pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use array::{ArrayOptions, ArrayValidator, array};
pub use boolean::{BoolValidator, boolean};
pub use number::{NumberOptions, NumberValidator, OnlyInt, number};
pub use object::{ObjectOptions, ObjectValidator, Schema, UnknownProperties, obj};
pub use string::{StringOptions, StringValidator, string};
