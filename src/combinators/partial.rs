//! Partial-object combinator - validates a declared subset of keys
//!
//! The permissive sibling of [`object`](crate::combinators::object): only
//! `null` and `undefined` fail the base check, undeclared keys are always
//! ignored, and there is no overload rejection. Declared keys are still
//! validated explicitly, reading as `undefined` when absent.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::Value;

// ============================================================================
// PARTIAL VALIDATOR
// ============================================================================

/// Validates only the declared properties of an object-like value.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let patch = partial().property("age", optional(number().min(0.0)));
///
/// assert!(patch.is_valid(&Value::from_json(serde_json::json!({"age": 3}))));
/// assert!(patch.is_valid(&Value::from_json(serde_json::json!({"other": true}))));
/// assert!(!patch.is_valid(&Value::from_json(serde_json::json!({"age": -3}))));
/// ```
#[derive(Clone, Default)]
pub struct PartialValidator {
    properties: Vec<(String, SharedValidator)>,
    rules: Rules<Value>,
}

/// Creates a partial validator with no declared properties.
#[must_use]
pub fn partial() -> PartialValidator {
    PartialValidator::default()
}

impl PartialValidator {
    /// Declares a property and the validator applied to it.
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
}

crate::macros::impl_fluent_rules!(PartialValidator, Value);

impl Validate for PartialValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if value.is_nullish() {
            return Err(self.rules.fail(messages::NOT_AN_OBJECT));
        }
        for (key, validator) in &self.properties {
            validator
                .validate(value.property(key))
                .map_err(|error| {
                    self.rules
                        .raise(ValidationError::nested(key.as_str(), error))
                })?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for PartialValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartialValidator")
            .field(
                "properties",
                &self
                    .properties
                    .iter()
                    .map(|(key, _)| key.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
