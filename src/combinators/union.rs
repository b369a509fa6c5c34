//! Union combinator - logical disjunction of validators
//!
//! A union tries its branch validators in declared order and accepts on the
//! first success. When every branch rejects, the union reports one generic
//! error carrying each branch's failure as a sub-error. The union itself
//! contributes no trace segment; whatever key or index it sits under is
//! prepended by its parent.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::value::Value;

// ============================================================================
// UNION VALIDATOR
// ============================================================================

/// Accepts values matching at least one branch.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let id = UnionValidator::of(string().uuid()).or(number().positive());
///
/// assert!(id.is_valid(&Value::from(10)));
///
/// let err = id.validate(&Value::from(false)).unwrap_err();
/// assert_eq!(err.message(), "value does not match any of the possible types");
/// assert_eq!(err.sub_errors().len(), 2);
/// ```
#[derive(Clone)]
pub struct UnionValidator {
    branches: Vec<SharedValidator>,
    rules: Rules<Value>,
}

impl UnionValidator {
    /// Creates a union with a single branch.
    #[must_use]
    pub fn of(first: impl Validate + Send + Sync + 'static) -> Self {
        Self {
            branches: vec![std::sync::Arc::new(first)],
            rules: Rules::new(),
        }
    }

    /// Appends a branch, tried after all earlier ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn or(mut self, branch: impl Validate + Send + Sync + 'static) -> Self {
        self.branches.push(std::sync::Arc::new(branch));
        self
    }

    /// Number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Whether the union has no branches. Unions built with [`Self::of`]
    /// always have at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

crate::macros::impl_fluent_rules!(UnionValidator, Value);

impl Validate for UnionValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let mut branch_errors = Vec::with_capacity(self.branches.len());
        for branch in &self.branches {
            match branch.validate(value) {
                Ok(_) => {
                    self.rules.run_custom(value)?;
                    return Ok(value);
                }
                Err(error) => branch_errors.push(error),
            }
        }
        Err(self.rules.raise(
            ValidationError::new(messages::NO_UNION_MATCH).with_sub_errors(branch_errors),
        ))
    }
}

impl std::fmt::Debug for UnionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionValidator")
            .field("branches", &self.branches.len())
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
    use crate::validators::{boolean, number, string};

    #[test]
    fn first_matching_branch_wins() {
        let either = UnionValidator::of(string()).or(number());
        assert!(either.is_valid(&Value::from("text")));
        assert!(either.is_valid(&Value::from(3)));
        assert!(!either.is_valid(&Value::from(true)));
    }

    #[test]
    fn aggregates_one_sub_error_per_branch() {
        let either = UnionValidator::of(string().min(3))
            .or(number().positive())
            .or(boolean());

        let err = either.validate(&Value::Null).unwrap_err();
        assert_eq!(
            err.message(),
            "value does not match any of the possible types"
        );
        assert_eq!(err.path(), "");
        assert_eq!(err.sub_errors().len(), 3);
        assert_eq!(err.sub_errors()[0].message(), "value is not a string");
        assert_eq!(err.sub_errors()[1].message(), "value is not a number");
        assert_eq!(err.sub_errors()[2].message(), "value is not a boolean");
    }

    #[test]
    fn branch_refinement_failures_are_kept_verbatim() {
        let either = UnionValidator::of(string().min(3)).or(number().positive());

        let err = either.validate(&Value::from("ab")).unwrap_err();
        assert_eq!(err.sub_errors()[0].message(), "string is too short");
        assert_eq!(err.sub_errors()[1].message(), "value is not a number");
    }

    #[test]
    fn later_branches_are_not_tried_after_a_match() {
        // the second branch would reject; the first accepting settles it
        let either = UnionValidator::of(number()).or(number().min(100.0));
        assert!(either.is_valid(&Value::from(5)));
    }

    #[test]
    fn custom_runs_only_after_a_branch_matched() {
        let union = UnionValidator::of(number())
            .or(string())
            .custom(|v| v.as_number().map(|_| String::from("no numbers after all")));

        assert!(union.is_valid(&Value::from("ok")));
        assert_eq!(
            union.validate(&Value::from(1)).unwrap_err().message(),
            "no numbers after all"
        );
        // every branch failing keeps the generic union message
        assert_eq!(
            union.validate(&Value::Null).unwrap_err().message(),
            "value does not match any of the possible types"
        );
    }

    #[test]
    fn error_override_masks_the_union_message() {
        let either = UnionValidator::of(string()).or(number()).error("unsupported type");
        assert_eq!(
            either.validate(&Value::Null).unwrap_err().message(),
            "unsupported type"
        );
        // branch sub-errors keep their own text
        let err = either.validate(&Value::Null).unwrap_err();
        assert_eq!(err.sub_errors()[0].message(), "value is not a string");
    }
}
