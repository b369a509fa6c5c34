//! Date validator
//!
//! Checks that a value is a date, then applies range and set-membership
//! conditions in registration order. Bounds accept anything convertible to
//! [`DateLike`]: a `Date`, epoch milliseconds, or a date string. A bound
//! that fails to resolve (an unparseable string, a NaN offset) is never
//! satisfied, so its condition rejects every date.

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::{Date, DateLike, Value};

// ============================================================================
// CONDITIONS
// ============================================================================

#[derive(Debug, Clone)]
enum DateRule {
    Min(DateLike),
    Max(DateLike),
    Allow(Vec<DateLike>),
    Forbid(Vec<DateLike>),
}

impl DateRule {
    fn passes(&self, date: Date) -> bool {
        match self {
            Self::Min(bound) => bound
                .epoch_ms()
                .is_some_and(|min| date.epoch_ms() >= min),
            Self::Max(bound) => bound
                .epoch_ms()
                .is_some_and(|max| date.epoch_ms() <= max),
            Self::Allow(allowed) => allowed
                .iter()
                .any(|candidate| candidate.epoch_ms() == Some(date.epoch_ms())),
            Self::Forbid(forbidden) => !forbidden
                .iter()
                .any(|candidate| candidate.epoch_ms() == Some(date.epoch_ms())),
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::Min(_) => messages::DATE_TOO_EARLY,
            Self::Max(_) => messages::DATE_TOO_LATE,
            Self::Allow(_) => messages::NOT_ALLOWED,
            Self::Forbid(_) => messages::FORBIDDEN,
        }
    }

    fn check(&self, date: Date) -> Result<(), &'static str> {
        if self.passes(date) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates date values.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let this_century = date().min("2000-01-01").max("2099-12-31");
///
/// assert!(this_century.is_valid(&Value::from(Date::parse("2024-06-01").unwrap())));
///
/// let too_old = Value::from(Date::parse("1999-12-31").unwrap());
/// let err = this_century.validate(&too_old).unwrap_err();
/// assert_eq!(err.message(), "date is too early");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    conditions: Vec<DateRule>,
    rules: Rules<Date>,
}

/// Creates a date validator with no conditions.
#[must_use]
pub fn date() -> DateValidator {
    DateValidator::default()
}

impl DateValidator {
    fn condition(mut self, rule: DateRule) -> Self {
        self.conditions.push(rule);
        self
    }

    /// Requires the date to be at or after `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: impl Into<DateLike>) -> Self {
        self.condition(DateRule::Min(min.into()))
    }

    /// Requires the date to be at or before `max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: impl Into<DateLike>) -> Self {
        self.condition(DateRule::Max(max.into()))
    }

    /// Requires the date to be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow(self, values: impl IntoIterator<Item = impl Into<DateLike>>) -> Self {
        self.condition(DateRule::Allow(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Rejects the date if it is one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(self, values: impl IntoIterator<Item = impl Into<DateLike>>) -> Self {
        self.condition(DateRule::Forbid(
            values.into_iter().map(Into::into).collect(),
        ))
    }
}

impl_fluent_rules!(DateValidator, Date);

impl Validate for DateValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Value::Date(date) = value else {
            return Err(self.rules.fail(messages::NOT_A_DATE));
        };
        for condition in &self.conditions {
            condition
                .check(*date)
                .map_err(|message| self.rules.fail(message))?;
        }
        self.rules.run_custom(date)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
