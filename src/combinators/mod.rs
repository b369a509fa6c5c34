//! Composite validators
//!
//! Combinators hold child validators and recurse into container values.
//! Each one participates in the trace protocol: when a child fails, the
//! combinator re-raises the failure with its own key or index prepended,
//! so the error that reaches the caller names the exact location relative
//! to the validation root.
//!
//! # Catalog
//!
//! - [`array()`] - one item validator over every element
//! - [`tuple()`] - one validator per fixed position
//! - [`object()`] - declared properties, with `no_overload` / `allow_null`
//! - [`dictionary()`] - arbitrary keys, uniform item (and key) validation
//! - [`partial()`] - declared subset of keys, everything else ignored
//! - [`UnionValidator`] - ordered alternatives, first match wins
//! - [`optional()`] - lets `undefined` through untouched
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let contact = object()
//!     .property("email", string().email())
//!     .property("backup", optional(string().email()));
//!
//! let value = Value::from_json(serde_json::json!({"email": "ada@crunch.dev"}));
//! assert!(contact.is_valid(&value));
//! ```

pub mod array;
pub mod dictionary;
pub mod object;
pub mod optional;
pub mod partial;
pub mod tuple;
pub mod union;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use array::{ArrayValidator, array};
pub use dictionary::{DictionaryValidator, dictionary};
pub use object::{ObjectValidator, object};
pub use optional::{OptionalValidator, optional};
pub use partial::{PartialValidator, partial};
pub use tuple::{TupleValidator, tuple};
pub use union::UnionValidator;
