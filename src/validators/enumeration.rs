//! Enumeration validator
//!
//! Validates membership in a named set of numeric or string constants, in
//! plain mode or in bit-flags mode. Flags mode treats the numeric members as
//! a bitmask and accepts any integer whose set bits are all declared, zero
//! included.

use crate::foundation::{Rules, SharedValidator, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::Value;

// ============================================================================
// DEFINITION
// ============================================================================

/// One enumeration member value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    /// Numeric member.
    Num(f64),
    /// String member.
    Str(String),
}

impl From<f64> for EnumValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for EnumValue {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<&str> for EnumValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for EnumValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// A named enumeration: an ordered list of `(member name, member value)`
/// pairs.
///
/// # Examples
///
/// ```rust
/// use shapecheck::validators::Enumeration;
///
/// let color = Enumeration::new("Color")
///     .member("Red", 0)
///     .member("Green", 1)
///     .member("Blue", 2);
///
/// assert_eq!(color.name(), "Color");
/// assert_eq!(color.members().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Enumeration {
    name: String,
    members: Vec<(String, EnumValue)>,
}

impl Enumeration {
    /// Creates an empty enumeration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Appends a member.
    #[must_use = "builder methods must be chained or built"]
    pub fn member(mut self, name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }

    /// The enumeration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[(String, EnumValue)] {
        &self.members
    }

    fn contains(&self, value: &Value) -> bool {
        match value {
            Value::Number(number) => self
                .members
                .iter()
                .any(|(_, member)| matches!(member, EnumValue::Num(m) if m == number)),
            Value::String(text) => self
                .members
                .iter()
                .any(|(_, member)| matches!(member, EnumValue::Str(m) if m == text)),
            _ => false,
        }
    }

    /// OR of all integral numeric members.
    fn flag_mask(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|(_, member)| match member {
                EnumValue::Num(m) if m.is_finite() && m.fract() == 0.0 => Some(*m as i64),
                _ => None,
            })
            .fold(0, |mask, bits| mask | bits)
    }
}

// ============================================================================
// ENUM VALIDATOR
// ============================================================================

/// Validates membership in an [`Enumeration`].
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
/// use shapecheck::validators::Enumeration;
///
/// let color = enumeration(Enumeration::new("Color").member("Red", 0).member("Green", 1));
/// assert!(color.is_valid(&Value::from(1)));
///
/// let err = color.validate(&Value::from(7)).unwrap_err();
/// assert_eq!(err.message(), "value is not a valid enum value");
///
/// let read_write = flags(Enumeration::new("Mode").member("Read", 1).member("Write", 2));
/// assert!(read_write.is_valid(&Value::from(3)));
/// assert!(!read_write.is_valid(&Value::from(4)));
/// ```
#[derive(Clone)]
pub struct EnumValidator {
    definition: Enumeration,
    flags: bool,
    underlying: Option<SharedValidator>,
    rules: Rules<Value>,
}

/// Creates a validator for plain membership in `definition`.
#[must_use]
pub fn enumeration(definition: Enumeration) -> EnumValidator {
    EnumValidator {
        definition,
        flags: false,
        underlying: None,
        rules: Rules::new(),
    }
}

/// Creates a validator treating `definition` as bit flags.
#[must_use]
pub fn flags(definition: Enumeration) -> EnumValidator {
    EnumValidator {
        definition,
        flags: true,
        underlying: None,
        rules: Rules::new(),
    }
}

impl EnumValidator {
    /// Additionally runs `validator` against the raw value after membership
    /// passes. Its failures carry no extra path segment.
    #[must_use = "builder methods must be chained or built"]
    pub fn underlying(mut self, validator: impl Validate + Send + Sync + 'static) -> Self {
        self.underlying = Some(std::sync::Arc::new(validator));
        self
    }

    fn accepts(&self, value: &Value) -> bool {
        if !self.flags {
            return self.definition.contains(value);
        }
        let Value::Number(number) = value else {
            return false;
        };
        if !number.is_finite() || number.fract() != 0.0 {
            return false;
        }
        ((*number as i64) & !self.definition.flag_mask()) == 0
    }
}

impl_fluent_rules!(EnumValidator, Value);

impl Validate for EnumValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        if !self.accepts(value) {
            let message = if self.flags {
                messages::NOT_A_FLAG_COMBINATION
            } else {
                messages::NOT_AN_ENUM_VALUE
            };
            return Err(self.rules.fail(message));
        }
        if let Some(underlying) = &self.underlying {
            underlying
                .validate(value)
                .map_err(|error| self.rules.raise(error))?;
        }
        self.rules.run_custom(value)?;
        Ok(value)
    }
}

impl std::fmt::Debug for EnumValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumValidator")
            .field("definition", &self.definition)
            .field("flags", &self.flags)
            .field("underlying", &self.underlying.is_some())
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
