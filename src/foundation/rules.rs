//! Shared per-validator machinery: custom callbacks and message overrides.
//!
//! Every validator owns a [`Rules`] value parameterized by the narrowed type
//! its custom callback receives (`str` for strings, `f64` for numbers, and so
//! on). All error emission at a validator funnels through [`Rules::raise`],
//! which is the single place a configured override message is applied. That
//! includes errors re-raised on behalf of a failing child, so an override on
//! a composite masks the child's text while the trace keeps growing normally.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::messages::UNKNOWN_ERROR;
use crate::foundation::ValidationError;

// ============================================================================
// OVERRIDE MESSAGE
// ============================================================================

/// A configured replacement for every message a validator emits.
#[derive(Clone)]
pub(crate) enum Message {
    /// Fixed text, supplied up front.
    Literal(Cow<'static, str>),
    /// Text produced at emission time.
    Lazy(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Message {
    pub(crate) fn render(&self) -> Cow<'static, str> {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Lazy(produce) => Cow::Owned(produce()),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Custom-callback and override-message state shared by all validators.
///
/// `T` is the narrowed type handed to the custom callback once the base type
/// check and every built-in condition have passed.
pub(crate) struct Rules<T: ?Sized> {
    custom: Option<Arc<dyn Fn(&T) -> Option<String> + Send + Sync>>,
    message: Option<Message>,
}

impl<T: ?Sized> Rules<T> {
    pub(crate) fn new() -> Self {
        Self {
            custom: None,
            message: None,
        }
    }

    pub(crate) fn set_custom(
        &mut self,
        check: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) {
        self.custom = Some(Arc::new(check));
    }

    pub(crate) fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    /// Emits a fresh failure with this validator's override applied.
    pub(crate) fn fail(&self, message: &'static str) -> ValidationError {
        self.raise(ValidationError::new(message))
    }

    /// Applies the override message, if any, to an outgoing error.
    ///
    /// Called for every error that leaves the validator, whether it
    /// originated here or was re-raised from a child.
    pub(crate) fn raise(&self, error: ValidationError) -> ValidationError {
        match &self.message {
            Some(message) => error.with_message(message.render()),
            None => error,
        }
    }

    /// Runs the custom callback against the narrowed value, if configured.
    ///
    /// A returned empty string still counts as a failure and is reported as
    /// `"unknown error"`.
    pub(crate) fn run_custom(&self, narrowed: &T) -> Result<(), ValidationError> {
        let Some(check) = &self.custom else {
            return Ok(());
        };
        match check(narrowed) {
            None => Ok(()),
            Some(text) if text.is_empty() => Err(self.raise(ValidationError::new(UNKNOWN_ERROR))),
            Some(text) => Err(self.raise(ValidationError::new(text))),
        }
    }
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Rules<T> {
    fn clone(&self) -> Self {
        Self {
            custom: self.custom.clone(),
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
