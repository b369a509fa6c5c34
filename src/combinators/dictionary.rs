//! Dictionary combinator - uniform validation over arbitrary keys
//!
//! Where [`object`](crate::combinators::object) declares each property up
//! front, a dictionary applies one item validator to every value and,
//! optionally, one key validator to every key. Both kinds of failure are
//! re-raised under the same trace segment, the dictionary key, so the path
//! alone does not distinguish a bad key from a bad value.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::Value;

// ============================================================================
// DICTIONARY VALIDATOR
// ============================================================================

/// Validates every entry of an object against one item validator.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let headers = dictionary(string());
///
/// let ok = Value::from_json(serde_json::json!({"accept": "text/html"}));
/// assert!(headers.is_valid(&ok));
///
/// let err = headers
///     .validate(&Value::from_json(serde_json::json!({"retries": 3})))
///     .unwrap_err();
/// assert_eq!(err.message(), "value is not a string (retries)");
/// ```
#[derive(Clone)]
pub struct DictionaryValidator {
    item: SharedValidator,
    key: Option<SharedValidator>,
    rules: Rules<Value>,
}

/// Creates a dictionary validator applying `item` to every value.
#[must_use]
pub fn dictionary(item: impl Validate + Send + Sync + 'static) -> DictionaryValidator {
    DictionaryValidator {
        item: std::sync::Arc::new(item),
        key: None,
        rules: Rules::new(),
    }
}

impl DictionaryValidator {
    /// Applies `validator` to every key, passed as a string value.
    #[must_use = "builder methods must be chained or built"]
    pub fn keys(mut self, validator: impl Validate + Send + Sync + 'static) -> Self {
        self.key = Some(std::sync::Arc::new(validator));
        self
    }
}

crate::macros::impl_fluent_rules!(DictionaryValidator, Value);

impl Validate for DictionaryValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Some(entries) = value.as_object() else {
            return Err(self.rules.fail(messages::NOT_AN_OBJECT));
        };
        for (key, entry) in entries {
            if let Some(key_validator) = &self.key {
                let probe = Value::from(key.as_str());
                key_validator.validate(&probe).map_err(|error| {
                    self.rules
                        .raise(ValidationError::nested(key.as_str(), error))
                })?;
            }
            self.item.validate(entry).map_err(|error| {
                self.rules
                    .raise(ValidationError::nested(key.as_str(), error))
            })?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for DictionaryValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryValidator")
            .field("keyed", &self.key.is_some())
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
