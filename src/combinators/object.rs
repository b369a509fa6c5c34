//! Object combinator - declared properties, validated explicitly
//!
//! Every declared property is validated even when the value does not carry
//! it; the missing property reads as `undefined`, so optional properties are
//! expressed by wrapping the property validator in
//! [`optional`](crate::combinators::optional), never by omission. A property
//! failure is re-raised with the property key prepended to the trace.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::Value;

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// Validates objects property by property.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let user = object()
///     .property("name", string().min(1))
///     .property("age", number().min(0.0));
///
/// let ok = Value::from_json(serde_json::json!({"name": "Ada", "age": 36}));
/// assert!(user.is_valid(&ok));
///
/// let err = user
///     .validate(&Value::from_json(serde_json::json!({"name": "Ada", "age": -1})))
///     .unwrap_err();
/// assert_eq!(err.message(), "value is too small (age)");
/// ```
#[derive(Clone, Default)]
pub struct ObjectValidator {
    properties: Vec<(String, SharedValidator)>,
    no_overload: bool,
    allow_null: bool,
    rules: Rules<Value>,
}

/// Creates an object validator with no declared properties.
#[must_use]
pub fn object() -> ObjectValidator {
    ObjectValidator::default()
}

impl ObjectValidator {
    /// Declares a property and the validator applied to it.
    ///
    /// Properties are validated in declaration order. Redeclaring a key adds
    /// a second entry rather than replacing the first.
    #[must_use = "builder methods must be chained or built"]
    pub fn property(
        mut self,
        key: impl Into<String>,
        validator: impl Validate + Send + Sync + 'static,
    ) -> Self {
        self.properties
            .push((key.into(), std::sync::Arc::new(validator)));
        self
    }

    /// Rejects objects carrying any own key that was not declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_overload(mut self) -> Self {
        self.no_overload = true;
        self
    }

    /// Accepts `null` as a whole in place of an object.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    fn is_declared(&self, key: &str) -> bool {
        self.properties.iter().any(|(declared, _)| declared == key)
    }
}

crate::macros::impl_fluent_rules!(ObjectValidator, Value);

impl Validate for ObjectValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if self.allow_null && value.is_null() {
            return Ok(value);
        }
        let Some(entries) = value.as_object() else {
            return Err(self.rules.fail(messages::NOT_AN_OBJECT));
        };
        for (key, validator) in &self.properties {
            validator
                .validate(value.property(key))
                .map_err(|error| {
                    self.rules
                        .raise(ValidationError::nested(key.as_str(), error))
                })?;
        }
        if self.no_overload {
            for key in entries.keys() {
                if !self.is_declared(key) {
                    return Err(self.rules.raise(ValidationError::nested(
                        key.as_str(),
                        ValidationError::new(messages::UNKNOWN_PROPERTY),
                    )));
                }
            }
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectValidator")
            .field(
                "properties",
                &self
                    .properties
                    .iter()
                    .map(|(key, _)| key.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("no_overload", &self.no_overload)
            .field("allow_null", &self.allow_null)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
