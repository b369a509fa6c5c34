//! Optional combinator - additionally accepts `undefined`
//!
//! `undefined` passes immediately, without consulting the inner validator or
//! any custom callback. Everything else, `null` included, is delegated to the
//! inner validator; its failures are re-raised without an extra trace
//! segment.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError};
use crate::value::Value;

// ============================================================================
// OPTIONAL VALIDATOR
// ============================================================================

/// Wraps one validator and lets `undefined` through.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let nickname = optional(string().min(2));
///
/// assert!(nickname.is_valid(&Value::Undefined));
/// assert!(nickname.is_valid(&Value::from("ada")));
/// assert!(!nickname.is_valid(&Value::Null));
/// assert!(!nickname.is_valid(&Value::from("a")));
/// ```
#[derive(Clone)]
pub struct OptionalValidator {
    inner: SharedValidator,
    rules: Rules<Value>,
}

/// Wraps `inner`, additionally accepting `undefined`.
#[must_use]
pub fn optional(inner: impl Validate + Send + Sync + 'static) -> OptionalValidator {
    OptionalValidator::new(inner)
}

impl OptionalValidator {
    /// Creates the wrapper around `inner`.
    #[must_use]
    pub fn new(inner: impl Validate + Send + Sync + 'static) -> Self {
        Self {
            inner: std::sync::Arc::new(inner),
            rules: Rules::new(),
        }
    }
}

crate::macros::impl_fluent_rules!(OptionalValidator, Value);

impl Validate for OptionalValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if value.is_undefined() {
            return Ok(value);
        }
        self.inner
            .validate(value)
            .map_err(|error| self.rules.raise(error))?;
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for OptionalValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionalValidator")
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validators::{number, string};

    #[test]
    fn undefined_passes_immediately() {
        assert!(optional(string().min(100)).is_valid(&Value::Undefined));
    }

    #[test]
    fn null_is_not_undefined() {
        let err = optional(string()).validate(&Value::Null).unwrap_err();
        assert_eq!(err.message(), "value is not a string");
    }

    #[test]
    fn inner_failures_keep_their_trace_untouched() {
        let inner = crate::combinators::object().property("n", number());
        let validator = optional(inner);

        let value = Value::from_json(serde_json::json!({ "n": "x" }));
        let err = validator.validate(&value).unwrap_err();
        assert_eq!(err.message(), "value is not a number (n)");
        assert_eq!(err.path(), "n");
    }

    #[test]
    fn custom_is_skipped_for_undefined() {
        let validator =
            optional(number()).custom(|_| Some(String::from("never accepts a present value")));

        assert!(validator.is_valid(&Value::Undefined));
        assert_eq!(
            validator.validate(&Value::from(1)).unwrap_err().message(),
            "never accepts a present value"
        );
    }

    #[test]
    fn error_override_masks_inner_messages() {
        let validator = optional(number()).error("bad optional field");
        let err = validator.validate(&Value::from("x")).unwrap_err();
        assert_eq!(err.message(), "bad optional field");
        assert!(err.sub_errors().is_empty());
    }
}
