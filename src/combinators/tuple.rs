//! Tuple combinator - fixed positions, one validator each
//!
//! Accepts array-like values carrying at least as many positions as were
//! declared. Each declared position is validated by its own validator with
//! the index prepended to the trace on failure. Extra trailing entries are
//! tolerated unless [`TupleValidator::no_overload`] is set.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::Value;

// ============================================================================
// TUPLE VALIDATOR
// ============================================================================

/// Validates a fixed sequence of positions.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let pair = tuple().item(string()).item(number());
///
/// let ok = Value::from_json(serde_json::json!(["answer", 42]));
/// assert!(pair.is_valid(&ok));
///
/// let err = pair
///     .validate(&Value::from_json(serde_json::json!(["answer", "42"])))
///     .unwrap_err();
/// assert_eq!(err.message(), "value is not a number (1)");
/// ```
#[derive(Clone, Default)]
pub struct TupleValidator {
    items: Vec<SharedValidator>,
    no_overload: bool,
    rules: Rules<Value>,
}

/// Creates a tuple validator with no declared positions.
#[must_use]
pub fn tuple() -> TupleValidator {
    TupleValidator::default()
}

impl TupleValidator {
    /// Appends a validator for the next position.
    #[must_use = "builder methods must be chained or built"]
    pub fn item(mut self, validator: impl Validate + Send + Sync + 'static) -> Self {
        self.items.push(std::sync::Arc::new(validator));
        self
    }

    /// Rejects values carrying more entries than declared positions.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_overload(mut self) -> Self {
        self.no_overload = true;
        self
    }

    /// Number of declared positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no positions were declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

crate::macros::impl_fluent_rules!(TupleValidator, Value);

impl Validate for TupleValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Some(view) = value.as_array_like() else {
            return Err(self.rules.fail(messages::NOT_AN_ARRAY));
        };
        if view.len() < self.items.len() {
            return Err(self.rules.fail(messages::TOO_FEW_ITEMS));
        }
        if self.no_overload && view.len() > self.items.len() {
            return Err(self.rules.fail(messages::TOO_MANY_ITEMS));
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(view.get(index))
                .map_err(|error| self.rules.raise(ValidationError::nested(index, error)))?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for TupleValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TupleValidator")
            .field("positions", &self.items.len())
            .field("no_overload", &self.no_overload)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
