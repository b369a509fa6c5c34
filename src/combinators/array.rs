//! Array combinator - validates sequences item by item
//!
//! Accepts anything array-like: real arrays, or objects exposing a finite
//! numeric `length` with elements under stringified index keys. Array-level
//! conditions run first in registration order, then every item is validated
//! in index order against the item validator; an item failure is re-raised
//! with its index prepended to the trace. Missing indices validate as
//! `undefined`.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::{ArrayLike, Value};

// ============================================================================
// CONDITIONS
// ============================================================================

#[derive(Debug, Clone)]
enum ArrayRule {
    Length(usize),
    Min(usize),
    Max(usize),
    Allow(Vec<Value>),
    Forbid(Vec<Value>),
}

impl ArrayRule {
    fn passes(&self, view: &ArrayLike<'_>) -> bool {
        match self {
            Self::Length(length) => view.len() == *length,
            Self::Min(min) => view.len() >= *min,
            Self::Max(max) => view.len() <= *max,
            Self::Allow(allowed) => (0..view.len()).all(|index| {
                allowed
                    .iter()
                    .any(|candidate| candidate.strict_eq(view.get(index)))
            }),
            Self::Forbid(forbidden) => (0..view.len()).all(|index| {
                !forbidden
                    .iter()
                    .any(|candidate| candidate.strict_eq(view.get(index)))
            }),
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::Length(_) => messages::INVALID_ARRAY_LENGTH,
            Self::Min(_) => messages::TOO_FEW_ITEMS,
            Self::Max(_) => messages::TOO_MANY_ITEMS,
            Self::Allow(_) => messages::NOT_ALLOWED,
            Self::Forbid(_) => messages::FORBIDDEN,
        }
    }

    fn check(&self, view: &ArrayLike<'_>) -> Result<(), &'static str> {
        if self.passes(view) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

// ============================================================================
// ARRAY VALIDATOR
// ============================================================================

/// Validates array-like values against one item validator.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let scores = array(number().min(0.0)).min(1);
///
/// let ok = Value::from_json(serde_json::json!([5, 10]));
/// assert!(scores.is_valid(&ok));
///
/// let bad = Value::from_json(serde_json::json!([5, -1]));
/// let err = scores.validate(&bad).unwrap_err();
/// assert_eq!(err.message(), "value is too small (1)");
/// ```
#[derive(Clone)]
pub struct ArrayValidator {
    item: SharedValidator,
    conditions: Vec<ArrayRule>,
    rules: Rules<Value>,
}

/// Creates an array validator applying `item` to every element.
#[must_use]
pub fn array(item: impl Validate + Send + Sync + 'static) -> ArrayValidator {
    ArrayValidator {
        item: std::sync::Arc::new(item),
        conditions: Vec::new(),
        rules: Rules::new(),
    }
}

impl ArrayValidator {
    fn condition(mut self, rule: ArrayRule) -> Self {
        self.conditions.push(rule);
        self
    }

    /// Requires exactly `length` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(self, length: usize) -> Self {
        self.condition(ArrayRule::Length(length))
    }

    /// Requires at least `min` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: usize) -> Self {
        self.condition(ArrayRule::Min(min))
    }

    /// Requires at most `max` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: usize) -> Self {
        self.condition(ArrayRule::Max(max))
    }

    /// Requires every item to be strictly equal to one of `values`.
    ///
    /// The failure reports at the array level, without an index segment.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow(self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.condition(ArrayRule::Allow(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Rejects the array when any item is strictly equal to one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.condition(ArrayRule::Forbid(
            values.into_iter().map(Into::into).collect(),
        ))
    }
}

crate::macros::impl_fluent_rules!(ArrayValidator, Value);

impl Validate for ArrayValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Some(view) = value.as_array_like() else {
            return Err(self.rules.fail(messages::NOT_AN_ARRAY));
        };
        for condition in &self.conditions {
            condition
                .check(&view)
                .map_err(|message| self.rules.fail(message))?;
        }
        for index in 0..view.len() {
            self.item
                .validate(view.get(index))
                .map_err(|error| self.rules.raise(ValidationError::nested(index, error)))?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for ArrayValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayValidator")
            .field("conditions", &self.conditions)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
