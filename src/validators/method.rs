//! Method validator

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::{Method, Value};

// ============================================================================
// METHOD VALIDATOR
// ============================================================================

/// Validates callable values, optionally pinning their parameter count.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let callback = method().params(2);
///
/// assert!(callback.is_valid(&Value::from(Method::new(2))));
///
/// let err = callback.validate(&Value::from(Method::new(0))).unwrap_err();
/// assert_eq!(err.message(), "invalid parameter count");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MethodValidator {
    params: Option<usize>,
    rules: Rules<Method>,
}

/// Creates a method validator accepting any parameter count.
#[must_use]
pub fn method() -> MethodValidator {
    MethodValidator::default()
}

impl MethodValidator {
    /// Requires exactly `params` declared parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn params(mut self, params: usize) -> Self {
        self.params = Some(params);
        self
    }
}

impl_fluent_rules!(MethodValidator, Method);

impl Validate for MethodValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Value::Method(found) = value else {
            return Err(self.rules.fail(messages::NOT_A_METHOD));
        };
        if let Some(params) = self.params {
            if found.params() != params {
                return Err(self.rules.fail(messages::INVALID_PARAMETER_COUNT));
            }
        }
        self.rules.run_custom(found)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejects_non_methods() {
        let validator = method();
        for wrong in [Value::Null, Value::from("fn"), Value::from(0)] {
            let err = validator.validate(&wrong).unwrap_err();
            assert_eq!(err.message(), "value is not a method");
        }
    }

    #[test]
    fn bare_validator_accepts_any_arity() {
        assert!(method().is_valid(&Value::from(Method::new(0))));
        assert!(method().is_valid(&Value::from(Method::new(5))));
    }

    #[test]
    fn params_pins_the_arity() {
        let validator = method().params(1);
        assert!(validator.is_valid(&Value::from(Method::new(1))));
        assert_eq!(
            validator
                .validate(&Value::from(Method::new(2)))
                .unwrap_err()
                .message(),
            "invalid parameter count"
        );
    }

    #[test]
    fn custom_sees_the_method_facts() {
        let validator =
            method().custom(|m| (m.params() > 3).then(|| String::from("too many parameters")));
        assert!(validator.is_valid(&Value::from(Method::new(3))));
        assert!(!validator.is_valid(&Value::from(Method::new(4))));
    }

    #[test]
    fn error_override_masks_all_messages() {
        let validator = method().params(0).error("callbacks take no arguments");
        assert_eq!(
            validator
                .validate(&Value::from(Method::new(1)))
                .unwrap_err()
                .message(),
            "callbacks take no arguments"
        );
    }
}
