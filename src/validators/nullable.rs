//! Nullish-state validators
//!
//! This module covers the validators concerned with presence rather than
//! shape:
//!
//! - [`null()`] / [`undefined()`] / [`nullish()`] - accept exactly those
//!   states and nothing else
//! - [`any()`] - accepts everything, optionally tightened to reject nullish
//!   or falsy values
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! assert!(null().is_valid(&Value::Null));
//! assert!(nullish().is_valid(&Value::Undefined));
//! assert!(any().not_falsy().is_valid(&Value::from("text")));
//! ```

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// NULL / UNDEFINED / NULLISH
// ============================================================================

/// Validates that a value is exactly `null`.
#[derive(Debug, Clone, Default)]
pub struct NullValidator {
    rules: Rules<Value>,
}

/// Creates a validator accepting only `null`.
#[must_use]
pub fn null() -> NullValidator {
    NullValidator::default()
}

impl_fluent_rules!(NullValidator, Value);

impl Validate for NullValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if !value.is_null() {
            return Err(self.rules.fail(messages::NOT_NULL));
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

/// Validates that a value is exactly `undefined`.
#[derive(Debug, Clone, Default)]
pub struct UndefinedValidator {
    rules: Rules<Value>,
}

/// Creates a validator accepting only `undefined`.
#[must_use]
pub fn undefined() -> UndefinedValidator {
    UndefinedValidator::default()
}

impl_fluent_rules!(UndefinedValidator, Value);

impl Validate for UndefinedValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if !value.is_undefined() {
            return Err(self.rules.fail(messages::NOT_UNDEFINED));
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

/// Validates that a value is `null` or `undefined`.
#[derive(Debug, Clone, Default)]
pub struct NullishValidator {
    rules: Rules<Value>,
}

/// Creates a validator accepting `null` and `undefined`.
#[must_use]
pub fn nullish() -> NullishValidator {
    NullishValidator::default()
}

impl_fluent_rules!(NullishValidator, Value);

impl Validate for NullishValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if !value.is_nullish() {
            return Err(self.rules.fail(messages::NOT_NULLISH));
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

// ============================================================================
// ANY
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum AnyRule {
    NotNullish,
    NotFalsy,
}

impl AnyRule {
    fn check(self, value: &Value) -> Result<(), &'static str> {
        match self {
            Self::NotNullish if value.is_nullish() => Err(messages::IS_NULLISH),
            Self::NotFalsy if value.is_falsy() => Err(messages::IS_FALSY),
            _ => Ok(()),
        }
    }
}

/// Validates any value, with optional presence conditions.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let present = any().not_nullish();
/// assert!(present.is_valid(&Value::from(0)));
///
/// let err = present.validate(&Value::Null).unwrap_err();
/// assert_eq!(err.message(), "value is null or undefined");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnyValidator {
    conditions: Vec<AnyRule>,
    rules: Rules<Value>,
}

/// Creates a validator accepting every value.
#[must_use]
pub fn any() -> AnyValidator {
    AnyValidator::default()
}

impl AnyValidator {
    /// Rejects `null` and `undefined`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_nullish(mut self) -> Self {
        self.conditions.push(AnyRule::NotNullish);
        self
    }

    /// Rejects falsy values: undefined, null, `false`, `0`, NaN and `""`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_falsy(mut self) -> Self {
        self.conditions.push(AnyRule::NotFalsy);
        self
    }
}

impl_fluent_rules!(AnyValidator, Value);

impl Validate for AnyValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        for condition in &self.conditions {
            condition
                .check(value)
                .map_err(|message| self.rules.fail(message))?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
