//! Free-form validator built from a single callback.

use crate::foundation::{Rules, Validate, ValidationError};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// CUSTOM VALIDATOR
// ============================================================================

/// Validates with a caller-supplied check and nothing else.
///
/// The callback receives the raw [`Value`]; returning `Some(text)` rejects it
/// with that text, `None` accepts it. An empty string is reported as
/// `"unknown error"`.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let even_length_text = custom(|value| match value.as_str() {
///     Some(text) if text.len() % 2 == 0 => None,
///     _ => Some(String::from("expected text of even length")),
/// });
///
/// assert!(even_length_text.is_valid(&Value::from("abcd")));
/// assert!(!even_length_text.is_valid(&Value::from("abc")));
/// assert!(!even_length_text.is_valid(&Value::from(12)));
/// ```
#[derive(Debug, Clone)]
pub struct CustomValidator {
    rules: Rules<Value>,
}

/// Creates a validator from `check` alone.
#[must_use]
pub fn custom(
    check: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
) -> CustomValidator {
    let mut rules = Rules::new();
    rules.set_custom(check);
    CustomValidator { rules }
}

impl_fluent_rules!(CustomValidator, Value);

impl Validate for CustomValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
