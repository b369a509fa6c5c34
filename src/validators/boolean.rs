//! Boolean validator

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// BOOLEAN VALIDATOR
// ============================================================================

/// Validates boolean values, optionally pinned to one of the two.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let consent = boolean().only(true);
///
/// assert!(consent.is_valid(&Value::from(true)));
///
/// let err = consent.validate(&Value::from(false)).unwrap_err();
/// assert_eq!(err.message(), "value is not true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    expected: Option<bool>,
    rules: Rules<bool>,
}

/// Creates a boolean validator accepting both `true` and `false`.
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::default()
}

impl BooleanValidator {
    /// Requires the value to be exactly `expected`.
    #[must_use = "builder methods must be chained or built"]
    pub fn only(mut self, expected: bool) -> Self {
        self.expected = Some(expected);
        self
    }
}

impl_fluent_rules!(BooleanValidator, bool);

impl Validate for BooleanValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Value::Bool(flag) = value else {
            return Err(self.rules.fail(messages::NOT_A_BOOLEAN));
        };
        if let Some(expected) = self.expected {
            if *flag != expected {
                let message = if expected {
                    messages::NOT_TRUE
                } else {
                    messages::NOT_FALSE
                };
                return Err(self.rules.fail(message));
            }
        }
        self.rules.run_custom(flag)?;
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
    fn rejects_non_booleans() {
        let validator = boolean();
        for wrong in [Value::Null, Value::from(0), Value::from("true")] {
            let err = validator.validate(&wrong).unwrap_err();
            assert_eq!(err.message(), "value is not a boolean");
        }
    }

    #[test]
    fn bare_validator_accepts_both() {
        assert!(boolean().is_valid(&Value::from(true)));
        assert!(boolean().is_valid(&Value::from(false)));
    }

    #[test]
    fn only_pins_the_value() {
        let must_be_true = boolean().only(true);
        assert!(must_be_true.is_valid(&Value::from(true)));
        assert_eq!(
            must_be_true.validate(&Value::from(false)).unwrap_err().message(),
            "value is not true"
        );

        let must_be_false = boolean().only(false);
        assert_eq!(
            must_be_false.validate(&Value::from(true)).unwrap_err().message(),
            "value is not false"
        );
    }

    #[test]
    fn custom_sees_the_narrowed_flag() {
        let validator = boolean().custom(|flag| flag.then(|| String::from("must stay off")));
        assert!(validator.is_valid(&Value::from(false)));
        assert_eq!(
            validator.validate(&Value::from(true)).unwrap_err().message(),
            "must stay off"
        );
    }

    #[test]
    fn error_override_masks_all_messages() {
        let validator = boolean().only(true).error("accept the terms");
        assert_eq!(
            validator.validate(&Value::from(false)).unwrap_err().message(),
            "accept the terms"
        );
        assert_eq!(
            validator.validate(&Value::from("yes")).unwrap_err().message(),
            "accept the terms"
        );
    }
}
