//! Built-in leaf validators
//!
//! This module provides the validators that check a single value: the typed
//! base validators with their fluent conditions, plus the presence and
//! equality checks. Composite validators that recurse into containers live in
//! [`crate::combinators`].
//!
//! # Categories
//!
//! - **Typed**: [`string()`], [`number()`], [`boolean()`], [`date()`],
//!   [`method()`]
//! - **Membership**: [`enumeration()`], [`flags()`], [`equals()`]
//! - **Presence**: [`null()`], [`undefined()`], [`nullish()`], [`any()`]
//! - **Free-form**: [`custom()`]
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::prelude::*;
//!
//! let username = string().min(3).max(20).forbid(["admin"]);
//! let age = number().finite().min(0.0).max(130.0);
//! let consent = boolean().only(true);
//!
//! assert!(username.is_valid(&Value::from("ada")));
//! assert!(age.is_valid(&Value::from(36)));
//! assert!(!consent.is_valid(&Value::from(false)));
//! ```

// Typed validators
pub mod boolean;
pub mod date;
pub mod method;
pub mod number;
pub mod string;

// Membership validators
pub mod enumeration;
pub mod equals;

// Presence and free-form validators
pub mod custom;
pub mod nullable;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{BooleanValidator, boolean};
pub use custom::{CustomValidator, custom};
pub use date::{DateValidator, date};
pub use enumeration::{EnumValidator, EnumValue, Enumeration, enumeration, flags};
pub use equals::{EqualsValidator, equals};
pub use method::{MethodValidator, method};
pub use nullable::{
    AnyValidator, NullValidator, NullishValidator, UndefinedValidator, any, null, nullish,
    undefined,
};
pub use number::{NumberValidator, number};
pub use string::{StringValidator, string};
