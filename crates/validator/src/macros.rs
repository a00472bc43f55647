//! Macros for declaring validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`schema!`] — Build an object [`Schema`](crate::validators::Schema) from
//!   `name => validator` pairs

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`Schema`](crate::validators::Schema) from `name => validator`
/// pairs.
///
/// Each validator is moved into the schema. Pass an `Arc` to share one
/// child between several schemas.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::prelude::*;
///
/// let address = schema! {
///     "street" => string(StringOptions::new().min(1)),
///     "zip" => string(StringOptions::new().pattern(r"^\d{5}$").unwrap()),
/// };
/// assert_eq!(address.len(), 2);
///
/// let empty = schema! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::validators::Schema::new()
    };
    ($($name:expr => $validator:expr),+ $(,)?) => {
        $crate::validators::Schema::new()
            $(.field($name, $validator))+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{ErrorKind, Validate, ValidateExt};
    use crate::validators::{NumberOptions, ObjectOptions, StringOptions, number, obj, string};
    use serde_json::json;

    #[test]
    fn test_schema_macro_declares_fields_in_order() {
        let schema = schema! {
            "b" => number(NumberOptions::default()),
            "a" => string(StringOptions::default()),
        };
        assert_eq!(schema.names().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn test_schema_macro_accepts_shared_children() {
        let id = number(NumberOptions::default()).shared();
        let v = obj(
            schema! { "id" => id.clone(), "parent" => id },
            ObjectOptions::default(),
        );
        let err = v
            .validate(&json!({"id": 1, "parent": "none"}))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::WrongType);
        assert_eq!(err.field.as_deref(), Some("parent"));
    }
}
