//! Macros for building validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`any_of!`] - OR-chain multiple validators into a union
//! - `impl_fluent_rules!` (crate-internal) - the shared `custom` / `error` /
//!   `error_with` builder methods every validator exposes
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::prelude::*;
//! use shapecheck::any_of;
//!
//! let id = any_of![string().uuid(), number().positive()];
//!
//! assert!(id.is_valid(&Value::from(7)));
//! assert!(!id.is_valid(&Value::from("not-a-uuid")));
//! ```

// ============================================================================
// ANY-OF MACRO
// ============================================================================

/// OR-chains validators: the value must match at least one.
///
/// Expands to [`UnionValidator::of`](crate::combinators::UnionValidator::of)
/// followed by one `.or(...)` per remaining validator, so branch order is the
/// order written here.
///
/// ```rust
/// use shapecheck::any_of;
/// use shapecheck::prelude::*;
///
/// let nullable_name = any_of![string().min(1), null()];
///
/// assert!(nullable_name.is_valid(&Value::from("Ada")));
/// assert!(nullable_name.is_valid(&Value::Null));
///
/// let err = nullable_name.validate(&Value::from(13)).unwrap_err();
/// assert_eq!(err.message(), "value does not match any of the possible types");
/// assert_eq!(err.sub_errors().len(), 2);
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::combinators::UnionValidator::of($first)$(.or($rest))*
    };
}

// ============================================================================
// FLUENT RULES MACRO
// ============================================================================

/// Implements the fluent surface shared by every validator: a typed `custom`
/// callback plus the `error` / `error_with` message overrides.
///
/// The second argument is the narrowed type the custom callback receives once
/// the base type check has passed.
macro_rules! impl_fluent_rules {
    ($validator:ty, $narrowed:ty) => {
        impl $validator {
            /// Registers a custom check that runs after every built-in
            /// condition has passed.
            ///
            /// Returning `Some(text)` fails validation with that text; an
            /// empty string is reported as `"unknown error"`. Returning
            /// `None` passes.
            #[must_use = "builder methods must be chained or built"]
            pub fn custom(
                mut self,
                check: impl Fn(&$narrowed) -> Option<String> + Send + Sync + 'static,
            ) -> Self {
                self.rules.set_custom(check);
                self
            }

            /// Replaces every message this validator emits with fixed text.
            ///
            /// Applies to base type failures, condition failures, custom
            /// failures and errors re-raised from children alike; traces
            /// still accumulate normally.
            #[must_use = "builder methods must be chained or built"]
            pub fn error(mut self, message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.rules
                    .set_message($crate::foundation::Message::Literal(message.into()));
                self
            }

            /// Like [`Self::error`], with the text produced at emission time.
            #[must_use = "builder methods must be chained or built"]
            pub fn error_with(
                mut self,
                message: impl Fn() -> String + Send + Sync + 'static,
            ) -> Self {
                self.rules
                    .set_message($crate::foundation::Message::Lazy(std::sync::Arc::new(
                        message,
                    )));
                self
            }
        }
    };
}

pub(crate) use impl_fluent_rules;

// ============================================================================
// TESTS
// ============================================================================
