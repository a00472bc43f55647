//! Object validator
//!
//! Applies a [`Schema`] of child validators to the fields of a JSON object.
//!
//! # Visiting rules
//!
//! The validator walks the fields the *input* carries, in insertion order:
//!
//! - a field declared in the schema is replaced by its child's output, and a
//!   child failure aborts the whole validation;
//! - an undeclared field is kept, dropped or rejected according to
//!   [`UnknownProperties`].
//!
//! A field declared in the schema but missing from the input is **never
//! visited**. Its child validator does not run, so a child that would reject
//! absent input does not make the field mandatory:
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let user = obj(
//!     Schema::new().field("name", string(StringOptions::default())),
//!     ObjectOptions::default(),
//! );
//! assert!(user.validate(&json!({})).is_ok());
//! ```
//!
//! A field that is present with a `null` value *is* visited, so the same
//! schema rejects `{"name": null}`.

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::foundation::{DynValidate, SharedValidator, Validate, ValidationError};

// ============================================================================
// OPTIONS
// ============================================================================

/// Handling of fields the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownProperties {
    /// Leave the field untouched.
    #[default]
    Accept,
    /// Remove the field from the output.
    OnlyRemove,
    /// Fail with [`ErrorKind::UnknownProperty`](crate::foundation::ErrorKind::UnknownProperty).
    Error,
}

/// Options for [`obj`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectOptions {
    /// Handling of undeclared fields.
    pub unknown_properties: UnknownProperties,
}

impl ObjectOptions {
    /// Options accepting unknown properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handling of undeclared fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn unknown_properties(mut self, mode: UnknownProperties) -> Self {
        self.unknown_properties = mode;
        self
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Field name to child validator mapping.
///
/// Children are held as [`SharedValidator`]s, so the same child may be
/// registered in several schemas.
#[derive(Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, SharedValidator>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, replacing any previous declaration of the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: DynValidate + 'static,
    {
        self.shared_field(name, Arc::new(validator))
    }

    /// Declares a field backed by an already shared validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared_field(mut self, name: impl Into<String>, validator: SharedValidator) -> Self {
        self.fields.insert(name.into(), validator);
        self
    }

    /// Returns the validator declared for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SharedValidator> {
        self.fields.get(name)
    }

    /// Returns `true` if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared field names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields.keys()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, SharedValidator)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, SharedValidator)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, validator)| (name.into(), validator))
                .collect(),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates JSON objects field by field.
///
/// [`Validate::validate`] works on a copy of the input.
/// [`DynValidate::validate_in_place`] and [`validate_owned`](Self::validate_owned)
/// rewrite the caller's object itself.
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    schema: Schema,
    options: ObjectOptions,
}

impl ObjectValidator {
    /// Creates an object validator.
    #[must_use]
    pub fn new(schema: Schema, options: ObjectOptions) -> Self {
        Self { schema, options }
    }

    /// Returns the schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> &ObjectOptions {
        &self.options
    }

    /// Validates an owned input and returns the same map, rewritten.
    ///
    /// No copy is made: the returned map is the input's own allocation.
    pub fn validate_owned(&self, input: Value) -> Result<Map<String, Value>, ValidationError> {
        let mut map = match input {
            Value::Null => return Err(ValidationError::required()),
            Value::Object(map) => map,
            other => return Err(ValidationError::wrong_type("object", &other)),
        };
        self.apply(&mut map)?;
        Ok(map)
    }

    // Unknown fields visited before a failure are removed too.
    fn apply(&self, map: &mut Map<String, Value>) -> Result<(), ValidationError> {
        let mut removed = IndexSet::new();
        let outcome = self.visit(map, &mut removed);

        if !removed.is_empty() {
            tracing::trace!(properties = ?removed, "removing unknown properties");
            map.retain(|name, _| !removed.contains(name));
        }

        outcome
    }

    fn visit(
        &self,
        map: &mut Map<String, Value>,
        removed: &mut IndexSet<String>,
    ) -> Result<(), ValidationError> {
        let names: Vec<String> = map.keys().cloned().collect();

        for name in names {
            if let Some(child) = self.schema.get(&name) {
                if let Some(slot) = map.get_mut(&name) {
                    child
                        .validate_in_place(slot)
                        .map_err(|err| err.at_field(&name))?;
                }
                continue;
            }

            match self.options.unknown_properties {
                UnknownProperties::Accept => {}
                UnknownProperties::OnlyRemove => {
                    removed.insert(name);
                }
                UnknownProperties::Error => {
                    return Err(ValidationError::unknown_property(&name));
                }
            }
        }

        Ok(())
    }
}

impl Validate for ObjectValidator {
    type Output = Map<String, Value>;

    fn validate(&self, input: &Value) -> Result<Map<String, Value>, ValidationError> {
        match input {
            Value::Null => Err(ValidationError::required()),
            Value::Object(map) => {
                let mut map = map.clone();
                self.apply(&mut map)?;
                Ok(map)
            }
            other => Err(ValidationError::wrong_type("object", other)),
        }
    }
}

impl DynValidate for ObjectValidator {
    fn validate_value(&self, input: &Value) -> Result<Value, ValidationError> {
        self.validate(input).map(Value::Object)
    }

    fn validate_in_place(&self, slot: &mut Value) -> Result<(), ValidationError> {
        match slot {
            Value::Null => Err(ValidationError::required()),
            Value::Object(map) => self.apply(map),
            other => Err(ValidationError::wrong_type("object", other)),
        }
    }
}

/// Creates an object validator.
#[must_use]
pub fn obj(schema: Schema, options: ObjectOptions) -> ObjectValidator {
    ObjectValidator::new(schema, options)
}

// ============================================================================
// TESTS
// ============================================================================
