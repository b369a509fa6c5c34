//! Prelude module for convenient imports.
//!
//! Provides a single `use shapecheck::prelude::*;` import that brings in the
//! core traits, the value model, every validator factory, and the [`any_of!`]
//! macro.
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let user = object()
//!     .property("name", string().min(1))
//!     .property("age", optional(number().min(0.0)));
//!
//! let value = Value::from_json(serde_json::json!({"name": "Ada"}));
//! assert!(user.is_valid(&value));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, PathSegment, SharedValidator, Validate, ValidateExt, ValidationError,
};

// ============================================================================
// VALUE MODEL
// ============================================================================

pub use crate::value::{Date, DateLike, Method, Value, ValueKind};

// ============================================================================
// VALIDATORS: All built-in leaf validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composite validators
// ============================================================================

pub use crate::combinators::{
    ArrayValidator, DictionaryValidator, ObjectValidator, OptionalValidator, PartialValidator,
    TupleValidator, UnionValidator, array, dictionary, object, optional, partial, tuple,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::any_of;
