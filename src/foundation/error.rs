//! Validation error type with trace-based failure paths.
//!
//! A [`ValidationError`] is an immutable failure record: the message text, an
//! ordered trace of path segments from the validation root down to the failing
//! value, and the causal sub-errors (e.g. every rejected union branch). The
//! dotted `path` is always derived from the trace, never stored, so the two
//! can never disagree.
//!
//! Composites never mutate an error in place. Re-raising a child failure
//! builds a *new* error via [`ValidationError::nested`], which prepends the
//! composite's own key and folds the child error into `sub_errors`. Because
//! every level prepends its own segment ahead of everything accumulated below
//! it, the trace that reaches the root reads root-to-leaf.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// PATH SEGMENTS
// ============================================================================

/// One step of a failure trace: an object property key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object or dictionary property key.
    Key(String),
    /// Array or tuple index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Inline capacity for traces; realistic schemas rarely nest deeper, so the
/// error stays heap-free on the way up.
type Trace = SmallVec<[PathSegment; 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Structured validation failure.
///
/// # Examples
///
/// ```rust
/// use shapecheck::foundation::ValidationError;
///
/// let leaf = ValidationError::new("value is not a boolean");
/// let err = ValidationError::nested("prop3", ValidationError::nested(1usize, leaf));
///
/// assert_eq!(err.path(), "prop3.1");
/// assert_eq!(err.original_message(), "value is not a boolean");
/// assert_eq!(err.message(), "value is not a boolean (prop3.1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message())]
pub struct ValidationError {
    message: Cow<'static, str>,
    trace: Trace,
    sub_errors: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error with an empty trace and no sub-errors.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            trace: Trace::new(),
            sub_errors: Vec::new(),
        }
    }

    /// Re-raises `cause` from the composite level that owns `segment`.
    ///
    /// Builds a new error that reuses the cause's message, prepends `segment`
    /// to the cause's trace, and keeps the cause itself as a sub-error. This
    /// is the prefix protocol: applied once per composite level, it assembles
    /// the root-to-leaf path with O(depth) work and no shared state.
    #[must_use]
    pub fn nested(segment: impl Into<PathSegment>, cause: ValidationError) -> Self {
        let mut trace = Trace::with_capacity(cause.trace.len() + 1);
        trace.push(segment.into());
        trace.extend(cause.trace.iter().cloned());
        Self {
            message: cause.message.clone(),
            trace,
            sub_errors: vec![cause],
        }
    }

    /// Attaches causal sub-errors (e.g. one per rejected union branch).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sub_errors(mut self, sub_errors: Vec<ValidationError>) -> Self {
        self.sub_errors = sub_errors;
        self
    }

    /// Replaces the message text, keeping trace and sub-errors.
    ///
    /// This is how a configured override message is applied at a validator's
    /// emission point; the replaced text still participates in path
    /// decoration as usual.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The externally visible message: `"<message> (<path>)"` when the trace
    /// is non-empty, the bare message otherwise.
    #[must_use]
    pub fn message(&self) -> String {
        let path = self.path();
        if path.is_empty() {
            self.message.clone().into_owned()
        } else {
            format!("{} ({})", self.message, path)
        }
    }

    /// The raw message without path decoration.
    #[must_use]
    pub fn original_message(&self) -> &str {
        &self.message
    }

    /// The dotted failure path, derived from the trace on every call.
    ///
    /// Array indices, object keys and dictionary keys all join with `.`, e.g.
    /// `"prop1.0.prop2.prop3.1"`. Empty when the root itself failed.
    #[must_use]
    pub fn path(&self) -> String {
        self.trace
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The ordered trace segments, root-to-leaf.
    #[must_use]
    pub fn trace(&self) -> &[PathSegment] {
        &self.trace
    }

    /// Causal sub-errors, in the order they were gathered.
    #[must_use]
    pub fn sub_errors(&self) -> &[ValidationError] {
        &self.sub_errors
    }

    // ========================================================================
    // INTROSPECTION
    // ========================================================================

    /// This error plus all transitive sub-errors, depth-first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        fn walk<'a>(error: &'a ValidationError, out: &mut Vec<&'a ValidationError>) {
            out.push(error);
            for sub in &error.sub_errors {
                walk(sub, out);
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Total number of errors including every transitive sub-error.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .sub_errors
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Serializes the error for transport or logging.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message(),
            "original_message": self.original_message(),
            "path": self.path(),
            "sub_errors": self.sub_errors.iter().map(Self::to_json).collect::<Vec<_>>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
