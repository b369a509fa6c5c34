//! Number validator
//!
//! Checks that a value is a number, then applies numeric conditions in
//! registration order. Numbers are IEEE 754 doubles, so NaN *is* a number
//! here; reject it explicitly with [`NumberValidator::not_nan`] when needed.
//! NaN satisfies no comparison, which means it also fails `min`, `max`,
//! `positive`, `negative` and every `allow` set.

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// CONDITIONS
// ============================================================================

#[derive(Debug, Clone)]
enum NumberRule {
    Finite,
    NotNan,
    Positive,
    Negative,
    Min(f64),
    Max(f64),
    Allow(Vec<f64>),
    Forbid(Vec<f64>),
}

impl NumberRule {
    fn passes(&self, number: f64) -> bool {
        match self {
            Self::Finite => number.is_finite(),
            Self::NotNan => !number.is_nan(),
            Self::Positive => number > 0.0,
            Self::Negative => number < 0.0,
            Self::Min(min) => number >= *min,
            Self::Max(max) => number <= *max,
            Self::Allow(allowed) => allowed.iter().any(|candidate| *candidate == number),
            Self::Forbid(forbidden) => !forbidden.iter().any(|candidate| *candidate == number),
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::Finite => messages::NOT_FINITE,
            Self::NotNan => messages::IS_NAN,
            Self::Positive => messages::NOT_POSITIVE,
            Self::Negative => messages::NOT_NEGATIVE,
            Self::Min(_) => messages::TOO_SMALL,
            Self::Max(_) => messages::TOO_LARGE,
            Self::Allow(_) => messages::NOT_ALLOWED,
            Self::Forbid(_) => messages::FORBIDDEN,
        }
    }

    fn check(&self, number: f64) -> Result<(), &'static str> {
        if self.passes(number) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Validates numeric values.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let port = number().finite().min(1.0).max(65535.0);
///
/// assert!(port.is_valid(&Value::from(8080)));
/// assert!(!port.is_valid(&Value::from(0)));
///
/// let err = port.validate(&Value::from("8080")).unwrap_err();
/// assert_eq!(err.message(), "value is not a number");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    conditions: Vec<NumberRule>,
    rules: Rules<f64>,
}

/// Creates a number validator with no conditions.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::default()
}

impl NumberValidator {
    fn condition(mut self, rule: NumberRule) -> Self {
        self.conditions.push(rule);
        self
    }

    /// Rejects NaN and the infinities.
    #[must_use = "builder methods must be chained or built"]
    pub fn finite(self) -> Self {
        self.condition(NumberRule::Finite)
    }

    /// Rejects NaN, keeping the infinities.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_nan(self) -> Self {
        self.condition(NumberRule::NotNan)
    }

    /// Requires a value strictly greater than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(self) -> Self {
        self.condition(NumberRule::Positive)
    }

    /// Requires a value strictly less than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(self) -> Self {
        self.condition(NumberRule::Negative)
    }

    /// Requires `value >= min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: f64) -> Self {
        self.condition(NumberRule::Min(min))
    }

    /// Requires `value <= max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: f64) -> Self {
        self.condition(NumberRule::Max(max))
    }

    /// Requires the number to be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.condition(NumberRule::Allow(values.into_iter().collect()))
    }

    /// Rejects the number if it is one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.condition(NumberRule::Forbid(values.into_iter().collect()))
    }
}

impl_fluent_rules!(NumberValidator, f64);

impl Validate for NumberValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Value::Number(number) = value else {
            return Err(self.rules.fail(messages::NOT_A_NUMBER));
        };
        for condition in &self.conditions {
            condition
                .check(*number)
                .map_err(|message| self.rules.fail(message))?;
        }
        self.rules.run_custom(number)?;
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

    fn first_message(validator: &NumberValidator, number: f64) -> String {
        validator
            .validate(&Value::from(number))
            .unwrap_err()
            .message()
    }

    #[test]
    fn rejects_non_numbers() {
        let validator = number();
        for wrong in [Value::Null, Value::from("1"), Value::from(true)] {
            let err = validator.validate(&wrong).unwrap_err();
            assert_eq!(err.message(), "value is not a number");
        }
    }

    #[test]
    fn nan_and_infinity_are_numbers() {
        assert!(number().is_valid(&Value::from(f64::NAN)));
        assert!(number().is_valid(&Value::from(f64::INFINITY)));
    }

    #[test]
    fn finite_and_not_nan() {
        assert_eq!(
            first_message(&number().finite(), f64::INFINITY),
            "value is not finite"
        );
        assert_eq!(first_message(&number().finite(), f64::NAN), "value is not finite");
        assert_eq!(first_message(&number().not_nan(), f64::NAN), "value is NaN");
        assert!(number().not_nan().is_valid(&Value::from(f64::INFINITY)));
    }

    #[test]
    fn positive_and_negative_exclude_zero() {
        assert!(number().positive().is_valid(&Value::from(0.1)));
        assert_eq!(first_message(&number().positive(), 0.0), "value is not positive");
        assert_eq!(first_message(&number().positive(), -1.0), "value is not positive");

        assert!(number().negative().is_valid(&Value::from(-0.1)));
        assert_eq!(first_message(&number().negative(), 0.0), "value is not negative");
    }

    #[test]
    fn min_and_max_are_inclusive() {
        let range = number().min(1.0).max(5.0);
        assert!(range.is_valid(&Value::from(1.0)));
        assert!(range.is_valid(&Value::from(5.0)));
        assert_eq!(first_message(&range, 0.5), "value is too small");
        assert_eq!(first_message(&range, 5.5), "value is too large");
    }

    #[test]
    fn nan_fails_every_comparison() {
        assert_eq!(first_message(&number().min(0.0), f64::NAN), "value is too small");
        assert_eq!(first_message(&number().max(0.0), f64::NAN), "value is too large");
        assert_eq!(
            first_message(&number().positive(), f64::NAN),
            "value is not positive"
        );
        assert_eq!(
            first_message(&number().allow([f64::NAN]), f64::NAN),
            "value is not allowed"
        );
    }

    #[test]
    fn allow_and_forbid_sets() {
        let level = number().allow([1.0, 2.0, 3.0]);
        assert!(level.is_valid(&Value::from(2)));
        assert_eq!(first_message(&level, 4.0), "value is not allowed");

        let nonzero = number().forbid([0.0]);
        assert!(nonzero.is_valid(&Value::from(1)));
        assert_eq!(first_message(&nonzero, 0.0), "value is forbidden");
    }

    #[test]
    fn conditions_fail_in_registration_order() {
        let validator = number().min(10.0).positive();
        assert_eq!(first_message(&validator, -5.0), "value is too small");

        let flipped = number().positive().min(10.0);
        assert_eq!(first_message(&flipped, -5.0), "value is not positive");
    }

    #[test]
    fn custom_runs_last() {
        let validator = number()
            .finite()
            .custom(|n| (n % 7.0 != 0.0).then(|| String::from("not divisible by 7")));

        assert!(validator.is_valid(&Value::from(49)));
        assert_eq!(first_message(&validator, 15.0), "not divisible by 7");
        assert_eq!(first_message(&validator, f64::NAN), "value is not finite");
    }

    #[test]
    fn error_override_masks_all_messages() {
        let validator = number().positive().error("expected a positive number");
        assert_eq!(first_message(&validator, -1.0), "expected a positive number");
        assert_eq!(
            validator.validate(&Value::Null).unwrap_err().message(),
            "expected a positive number"
        );
    }
}
