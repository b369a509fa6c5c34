//! Core traits for the validation system
//!
//! This module defines the trait every validator implements plus the
//! extension methods for composing validators fluently.

use std::sync::Arc;

use crate::combinators::{OptionalValidator, UnionValidator};
use crate::foundation::ValidationError;
use crate::value::Value;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are stateless: `validate` may be called any number of times,
/// from any thread, against any value, and the outcome depends only on the
/// validator's configuration and the value itself.
///
/// On success the *same reference* that was passed in is handed back, so a
/// passing value can keep flowing without a clone:
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let checked = Value::from("hello");
/// let passed = string().min(3).validate(&checked)?;
/// assert!(std::ptr::eq(passed, &checked));
/// # Ok::<(), shapecheck::ValidationError>(())
/// ```
///
/// # Implementing
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
///         match value {
///             Value::String(s) if !s.is_empty() => Ok(value),
///             _ => Err(ValidationError::new("string is too short")),
///         }
///     }
/// }
///
/// assert!(NonEmpty.is_valid(&Value::from("x")));
/// assert!(!NonEmpty.is_valid(&Value::from("")));
/// ```
pub trait Validate {
    /// Validates the value.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` with the borrow passed in if validation succeeds
    /// * `Err(ValidationError)` carrying the failure path if it fails
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError>;

    /// Returns whether the value passes, discarding the error.
    ///
    /// Never panics; every failure mode surfaces as `false`.
    fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        (**self).validate(value)
    }
}

/// Owned type-erased validator.
pub type BoxedValidator = Box<dyn Validate + Send + Sync>;

/// Reference-counted type-erased validator.
///
/// Composite validators hold their children as `SharedValidator`, so one
/// validator instance can appear in several schemas at once.
pub type SharedValidator = Arc<dyn Validate + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let id = string().uuid().or(number().positive());
///
/// assert!(id.is_valid(&Value::from("550e8400-e29b-41d4-a716-446655440000")));
/// assert!(id.is_valid(&Value::from(42)));
/// assert!(!id.is_valid(&Value::from(true)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Accepts values matching either validator.
    ///
    /// Branches are tried in order and the first success wins. When every
    /// branch rejects, the error is `"value does not match any of the
    /// possible types"` with one sub-error per branch.
    fn or<V>(self, other: V) -> UnionValidator
    where
        Self: Send + Sync + 'static,
        V: Validate + Send + Sync + 'static,
    {
        UnionValidator::of(self).or(other)
    }

    /// Additionally accepts `undefined`.
    ///
    /// ```rust
    /// use shapecheck::prelude::*;
    ///
    /// let nickname = string().min(2).optional();
    /// assert!(nickname.is_valid(&Value::Undefined));
    /// assert!(nickname.is_valid(&Value::from("ada")));
    /// assert!(!nickname.is_valid(&Value::from("a")));
    /// ```
    fn optional(self) -> OptionalValidator
    where
        Self: Send + Sync + 'static,
    {
        OptionalValidator::new(self)
    }

    /// Erases the concrete type behind a box.
    fn boxed(self) -> BoxedValidator
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Erases the concrete type behind an `Arc`, ready to be reused as a
    /// child of several composite validators.
    fn shared(self) -> SharedValidator
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<V: Validate> ValidateExt for V {}

// ============================================================================
// TESTS
// ============================================================================
