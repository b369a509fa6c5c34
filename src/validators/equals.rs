//! Equality validator
//!
//! Accepts a value strictly equal to one of the configured candidates.
//! Strict equality compares nullish states and scalars by content; dates,
//! arrays, objects and methods never compare equal, so candidates of those
//! kinds can only ever reject.

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// EQUALS VALIDATOR
// ============================================================================

/// Validates strict equality against one or more candidate values.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let version = equals(2).or_value(3);
///
/// assert!(version.is_valid(&Value::from(2)));
/// assert!(version.is_valid(&Value::from(3)));
///
/// let err = version.validate(&Value::from(1)).unwrap_err();
/// assert_eq!(err.message(), "values are not equal");
/// ```
#[derive(Debug, Clone)]
pub struct EqualsValidator {
    candidates: Vec<Value>,
    rules: Rules<Value>,
}

/// Creates an equality validator with a single candidate.
#[must_use]
pub fn equals(candidate: impl Into<Value>) -> EqualsValidator {
    EqualsValidator {
        candidates: vec![candidate.into()],
        rules: Rules::new(),
    }
}

impl EqualsValidator {
    /// Adds another acceptable candidate.
    #[must_use = "builder methods must be chained or built"]
    pub fn or_value(mut self, candidate: impl Into<Value>) -> Self {
        self.candidates.push(candidate.into());
        self
    }
}

impl_fluent_rules!(EqualsValidator, Value);

impl Validate for EqualsValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if !self
            .candidates
            .iter()
            .any(|candidate| candidate.strict_eq(value))
        {
            return Err(self.rules.fail(messages::NOT_EQUAL));
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
