//! Unified dynamic value model the validators run against.
//!
//! [`Value`] covers every shape a validated input can take: the two nullish
//! states, the scalar types, dates, methods, and the two containers. Object
//! entries keep insertion order so composite validators visit properties in
//! the order a schema (or a JSON document) declared them.

use indexmap::IndexMap;

pub mod date;

pub use date::{Date, DateLike};

// ==================== ValueKind ====================

/// Lightweight classification for a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Date,
    Array,
    Object,
    Method,
}

impl ValueKind {
    /// Lowercase kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Method => "method",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== Method ====================

/// A callable value, reduced to the signature facts validators can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method {
    params: usize,
}

impl Method {
    /// Creates a method value with the given declared parameter count.
    #[must_use]
    pub const fn new(params: usize) -> Self {
        Self { params }
    }

    /// Number of declared parameters.
    #[must_use]
    pub const fn params(self) -> usize {
        self.params
    }
}

// ==================== Value ====================

/// Unified value type that can represent any validated input.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let value = Value::from_json(serde_json::json!({
///     "name": "Ada",
///     "scores": [1, 2, 3],
/// }));
///
/// assert_eq!(value.kind(), ValueKind::Object);
/// assert!(object().property("name", string()).is_valid(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value, distinct from `Null`.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Floating point number, including NaN and the infinities.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Point in time.
    Date(Date),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map preserving insertion order.
    Object(IndexMap<String, Value>),
    /// Callable value carrying its parameter count.
    Method(Method),
}

/// Shared referent for indices and properties that are absent.
static UNDEFINED: Value = Value::Undefined;

impl Value {
    // ==================== Type queries ====================

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Method(_) => ValueKind::Method,
        }
    }

    /// Check if this is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is null or undefined.
    #[inline]
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Check if this is falsy: undefined, null, `false`, `0`, NaN or `""`.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::Number(number) => *number == 0.0 || number.is_nan(),
            Self::String(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Check if this is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    // ==================== Accessors ====================

    /// Borrow as `&str` if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Copy out the number if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Copy out the boolean if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Copy out the date if this is one.
    #[must_use]
    pub const fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Borrow the items if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Copy out the method facts if this is a method.
    #[must_use]
    pub const fn as_method(&self) -> Option<Method> {
        match self {
            Self::Method(method) => Some(*method),
            _ => None,
        }
    }

    /// Look up an object property, treating anything absent as undefined.
    ///
    /// Non-objects have no properties, so every lookup on them yields
    /// undefined as well.
    #[must_use]
    pub fn property(&self, key: &str) -> &Value {
        match self {
            Self::Object(entries) => entries.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    // ==================== Comparison ====================

    /// Strict equality.
    ///
    /// Nullish states and scalar values compare by content; NaN equals
    /// nothing. Dates, arrays, objects and methods are reference types whose
    /// identity does not survive being passed around as data, so two of them
    /// never compare equal here.
    #[must_use]
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }

    // ==================== Array-like view ====================

    /// Views this value as an indexable sequence, if it is one.
    ///
    /// Real arrays qualify directly. Objects qualify when they carry a
    /// finite, non-NaN numeric `length` property; their elements are read
    /// from stringified index keys and absent indices read as undefined.
    pub(crate) fn as_array_like(&self) -> Option<ArrayLike<'_>> {
        match self {
            Self::Array(items) => Some(ArrayLike::Items(items)),
            Self::Object(entries) => {
                let Self::Number(length) = entries.get("length")? else {
                    return None;
                };
                if !length.is_finite() {
                    return None;
                }
                let len = if *length <= 0.0 {
                    0
                } else {
                    length.ceil() as usize
                };
                Some(ArrayLike::Keyed { entries, len })
            }
            _ => None,
        }
    }
}

// ==================== ArrayLike ====================

/// Borrowed view over an array or an object masquerading as one.
pub(crate) enum ArrayLike<'v> {
    Items(&'v [Value]),
    Keyed {
        entries: &'v IndexMap<String, Value>,
        len: usize,
    },
}

impl<'v> ArrayLike<'v> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Keyed { len, .. } => *len,
        }
    }

    /// Reads the element at `index`; out-of-range or missing reads yield
    /// undefined, mirroring indexed access on the underlying value.
    pub(crate) fn get(&self, index: usize) -> &'v Value {
        match self {
            Self::Items(items) => items.get(index).unwrap_or(&UNDEFINED),
            Self::Keyed { entries, .. } => {
                entries.get(index.to_string().as_str()).unwrap_or(&UNDEFINED)
            }
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<Method> for Value {
    fn from(v: Method) -> Self {
        Self::Method(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::Array(iter.into_iter().map(Into::into).collect())
    }
}

// ==================== Tests ====================
