//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`PathSegment`]
//! - **Messages**: the [`messages`] catalog of built-in error texts
//!
//! # Architecture
//!
//! ## 1. One result shape
//!
//! Every validator returns `Result<&Value, ValidationError>`. Success hands
//! back the borrow that was passed in; failure carries the message and the
//! dotted path to the offending value:
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let schema = object().property("age", number().positive());
//! let value = Value::from_json(serde_json::json!({ "age": -3 }));
//!
//! let err = schema.validate(&value).unwrap_err();
//! assert_eq!(err.message(), "value is not positive (age)");
//! ```
//!
//! ## 2. Stateless validators
//!
//! Validators hold configuration only. Validating never mutates them, so a
//! schema can be shared across threads and reused for any number of values.
//!
//! ## 3. Errors as data
//!
//! [`ValidationError`] keeps the raw message, the segment trace and the
//! causal sub-errors separately; the decorated text is derived on demand.

// Module declarations
pub mod error;
pub mod messages;
pub(crate) mod rules;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{PathSegment, ValidationError};
pub use traits::{BoxedValidator, SharedValidator, Validate, ValidateExt};

pub(crate) use rules::{Message, Rules};
