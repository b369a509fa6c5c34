//! # shapecheck
//!
//! Runtime validation for dynamic values with exact dotted failure paths.
//!
//! A validator tree is assembled from factory calls and fluent conditions,
//! then run against a [`Value`](value::Value) decoded from JSON or built by
//! hand. On success `validate` returns the very reference it was given; on
//! failure it returns a [`ValidationError`] whose path names the first
//! failing location, root to leaf.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let line = object()
//!     .property("sku", string().min(1))
//!     .property("qty", number().positive());
//! let order = object()
//!     .property("id", string().uuid())
//!     .property("lines", array(line).min(1));
//!
//! let value = Value::from_json(serde_json::json!({
//!     "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!     "lines": [{"sku": "A-7", "qty": 0}],
//! }));
//!
//! let err = order.validate(&value).unwrap_err();
//! assert_eq!(err.message(), "value is not positive (lines.0.qty)");
//! assert_eq!(err.path(), "lines.0.qty");
//! ```
//!
//! ## Building Blocks
//!
//! - **Leaf validators** ([`validators`]): [`string()`](validators::string),
//!   [`number()`](validators::number), [`boolean()`](validators::boolean),
//!   [`date()`](validators::date), [`method()`](validators::method),
//!   [`enumeration()`](validators::enumeration), [`flags()`](validators::flags),
//!   [`equals()`](validators::equals), plus the presence checks
//!   [`null()`](validators::null), [`undefined()`](validators::undefined),
//!   [`nullish()`](validators::nullish), [`any()`](validators::any) and the
//!   free-form [`custom()`](validators::custom)
//! - **Combinators** ([`combinators`]): [`array()`](combinators::array),
//!   [`tuple()`](combinators::tuple), [`object()`](combinators::object),
//!   [`dictionary()`](combinators::dictionary),
//!   [`partial()`](combinators::partial), [`optional()`](combinators::optional)
//!   and [`UnionValidator`](combinators::UnionValidator) via [`any_of!`]
//!
//! Every validator implements [`Validate`]: `validate` passes the input
//! reference through unchanged on success, `is_valid` collapses the result
//! to a boolean. Fluent calls consume and return the validator, so trees
//! read top down as a single expression.

// ValidationError keeps its trace buffer inline, which puts the error arm of
// a validation result above clippy's default size threshold.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod json;
mod macros;
pub mod prelude;
pub mod validators;
pub mod value;

pub use foundation::messages;
pub use foundation::{
    BoxedValidator, PathSegment, SharedValidator, Validate, ValidateExt, ValidationError,
};
pub use value::Value;
