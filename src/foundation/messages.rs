//! Built-in failure message catalog.
//!
//! Every message a built-in check can produce lives here as a named constant.
//! The texts are a compatibility contract: downstream consumers pattern-match
//! on them, so they must never change. Match against the constants rather than
//! re-typing the literals.
//!
//! # Examples
//!
//! ```rust
//! use shapecheck::messages;
//! use shapecheck::prelude::*;
//!
//! let err = boolean().validate(&Value::from(42)).unwrap_err();
//! assert_eq!(err.original_message(), messages::NOT_A_BOOLEAN);
//! ```

// ============================================================================
// BASE-TYPE FAILURES
// ============================================================================

/// The value failed the string base-type check.
pub const NOT_A_STRING: &str = "value is not a string";

/// The value failed the number base-type check.
pub const NOT_A_NUMBER: &str = "value is not a number";

/// The value failed the boolean base-type check.
pub const NOT_A_BOOLEAN: &str = "value is not a boolean";

/// The value failed the date base-type check.
pub const NOT_A_DATE: &str = "value is not a date";

/// The value is not array-like.
pub const NOT_AN_ARRAY: &str = "value is not an array";

/// The value failed the object base-type check.
pub const NOT_AN_OBJECT: &str = "value is not an object";

/// The value is not callable.
pub const NOT_A_METHOD: &str = "value is not a method";

/// The value is not null.
pub const NOT_NULL: &str = "value is not null";

/// The value is not undefined.
pub const NOT_UNDEFINED: &str = "value is not undefined";

/// The value is neither null nor undefined.
pub const NOT_NULLISH: &str = "value is neither null nor undefined";

// ============================================================================
// REFINEMENT FAILURES
// ============================================================================

/// An array or tuple has fewer items than required.
pub const TOO_FEW_ITEMS: &str = "too few items";

/// An array or tuple has more items than allowed.
pub const TOO_MANY_ITEMS: &str = "too many items";

/// An array's length differs from the exact required length.
pub const INVALID_ARRAY_LENGTH: &str = "invalid array length";

/// A string is shorter than the required minimum.
pub const STRING_TOO_SHORT: &str = "string is too short";

/// A string is longer than the allowed maximum.
pub const STRING_TOO_LONG: &str = "string is too long";

/// A string's length differs from the exact required length.
pub const INVALID_STRING_LENGTH: &str = "invalid string length";

/// The value is absent from an allow-list.
pub const NOT_ALLOWED: &str = "value is not allowed";

/// The value is present on a forbid-list.
pub const FORBIDDEN: &str = "value is forbidden";

/// A string does not match a required pattern.
pub const PATTERN_MISMATCH: &str = "value does not match the pattern";

/// A string matches a rejected pattern.
pub const PATTERN_FORBIDDEN: &str = "value matches a forbidden pattern";

/// A number is not finite.
pub const NOT_FINITE: &str = "value is not finite";

/// A number is NaN.
pub const IS_NAN: &str = "value is NaN";

/// A number is not strictly positive.
pub const NOT_POSITIVE: &str = "value is not positive";

/// A number is not strictly negative.
pub const NOT_NEGATIVE: &str = "value is not negative";

/// A number is below the required minimum.
pub const TOO_SMALL: &str = "value is too small";

/// A number is above the allowed maximum.
pub const TOO_LARGE: &str = "value is too large";

/// A date is earlier than the required minimum.
pub const DATE_TOO_EARLY: &str = "date is too early";

/// A date is later than the allowed maximum.
pub const DATE_TOO_LATE: &str = "date is too late";

/// A boolean is not the required `true`.
pub const NOT_TRUE: &str = "value is not true";

/// A boolean is not the required `false`.
pub const NOT_FALSE: &str = "value is not false";

/// The value is not a declared member of the enumeration.
pub const NOT_AN_ENUM_VALUE: &str = "value is not a valid enum value";

/// The value is not a bitmask composed of declared flags.
pub const NOT_A_FLAG_COMBINATION: &str = "value is not a valid flag combination";

/// A callable's declared parameter count differs from the required one.
pub const INVALID_PARAMETER_COUNT: &str = "invalid parameter count";

/// The value strictly equals none of the expected literals.
pub const NOT_EQUAL: &str = "values are not equal";

/// The value is null or undefined where a present value is required.
pub const IS_NULLISH: &str = "value is null or undefined";

/// The value is falsy where a truthy value is required.
pub const IS_FALSY: &str = "value is falsy";

/// An object carries a property that was not declared (`no_overload`).
pub const UNKNOWN_PROPERTY: &str = "unknown property";

// ============================================================================
// STRING SEMANTIC PREDICATES
// ============================================================================

/// Not decodable as base64.
pub const NOT_BASE64: &str = "value is not a base64 string";

/// Not well-formed JSON.
pub const NOT_JSON: &str = "value is not a JSON string";

/// Not an ISO-8601 date string.
pub const NOT_ISO_DATE: &str = "value is not an ISO date string";

/// Not parseable as a decimal number.
pub const NOT_NUMERIC: &str = "value is not a numeric string";

/// Not a UUID.
pub const NOT_UUID: &str = "value is not a UUID string";

/// Not a hexadecimal string.
pub const NOT_HEX: &str = "value is not a hex string";

/// Not an email address.
pub const NOT_EMAIL: &str = "value is not an email address";

/// Not an absolute URI.
pub const NOT_URI: &str = "value is not a URI";

/// Not an http(s) URL.
pub const NOT_URL: &str = "value is not a URL";

// ============================================================================
// COMPOSITE FAILURES
// ============================================================================

/// Every union branch rejected the value.
pub const NO_UNION_MATCH: &str = "value does not match any of the possible types";

/// Fallback for foreign failures that carry no usable message.
pub const UNKNOWN_ERROR: &str = "unknown error";
