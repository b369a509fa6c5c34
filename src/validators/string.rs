//! String validator
//!
//! Checks that a value is a string, then applies length, set-membership,
//! pattern and format conditions in the order they were registered. Lengths
//! are measured in Unicode scalar values, not bytes.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use regex::Regex;
use serde::de::IgnoredAny;

use crate::foundation::{Rules, Validate, ValidationError, messages};
use crate::macros::impl_fluent_rules;
use crate::value::{Date, Value};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

// ============================================================================
// CONDITIONS
// ============================================================================

#[derive(Debug, Clone)]
enum StringRule {
    Min(usize),
    Max(usize),
    Length(usize),
    Allow(Vec<String>),
    Forbid(Vec<String>),
    Matches(Regex),
    NotMatches(Regex),
    Base64,
    Json,
    IsoDate,
    Numeric,
    Uuid,
    Hex,
    Email,
    Uri,
    Url,
}

impl StringRule {
    fn passes(&self, text: &str) -> bool {
        match self {
            Self::Min(min) => text.chars().count() >= *min,
            Self::Max(max) => text.chars().count() <= *max,
            Self::Length(length) => text.chars().count() == *length,
            Self::Allow(allowed) => allowed.iter().any(|candidate| candidate == text),
            Self::Forbid(forbidden) => !forbidden.iter().any(|candidate| candidate == text),
            Self::Matches(pattern) => pattern.is_match(text),
            Self::NotMatches(pattern) => !pattern.is_match(text),
            Self::Base64 => BASE64_STANDARD.decode(text).is_ok(),
            Self::Json => serde_json::from_str::<IgnoredAny>(text).is_ok(),
            Self::IsoDate => Date::parse(text).is_some(),
            Self::Numeric => NUMERIC_REGEX.is_match(text),
            Self::Uuid => uuid::Uuid::try_parse(text).is_ok(),
            Self::Hex => !text.is_empty() && text.bytes().all(|b| b.is_ascii_hexdigit()),
            Self::Email => EMAIL_REGEX.is_match(text),
            Self::Uri => url::Url::parse(text).is_ok(),
            Self::Url => {
                url::Url::parse(text).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
            }
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::Min(_) => messages::STRING_TOO_SHORT,
            Self::Max(_) => messages::STRING_TOO_LONG,
            Self::Length(_) => messages::INVALID_STRING_LENGTH,
            Self::Allow(_) => messages::NOT_ALLOWED,
            Self::Forbid(_) => messages::FORBIDDEN,
            Self::Matches(_) => messages::PATTERN_MISMATCH,
            Self::NotMatches(_) => messages::PATTERN_FORBIDDEN,
            Self::Base64 => messages::NOT_BASE64,
            Self::Json => messages::NOT_JSON,
            Self::IsoDate => messages::NOT_ISO_DATE,
            Self::Numeric => messages::NOT_NUMERIC,
            Self::Uuid => messages::NOT_UUID,
            Self::Hex => messages::NOT_HEX,
            Self::Email => messages::NOT_EMAIL,
            Self::Uri => messages::NOT_URI,
            Self::Url => messages::NOT_URL,
        }
    }

    fn check(&self, text: &str) -> Result<(), &'static str> {
        if self.passes(text) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates string values.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let username = string().min(3).max(16).forbid(["admin", "root"]);
///
/// assert!(username.is_valid(&Value::from("ada")));
/// assert!(!username.is_valid(&Value::from("ab")));
/// assert!(!username.is_valid(&Value::from("admin")));
///
/// let err = username.validate(&Value::from(404)).unwrap_err();
/// assert_eq!(err.message(), "value is not a string");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    conditions: Vec<StringRule>,
    rules: Rules<str>,
}

/// Creates a string validator with no conditions.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator::default()
}

impl StringValidator {
    fn condition(mut self, rule: StringRule) -> Self {
        self.conditions.push(rule);
        self
    }

    /// Requires at least `min` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: usize) -> Self {
        self.condition(StringRule::Min(min))
    }

    /// Requires at most `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: usize) -> Self {
        self.condition(StringRule::Max(max))
    }

    /// Requires exactly `length` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(self, length: usize) -> Self {
        self.condition(StringRule::Length(length))
    }

    /// Requires the string to be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.condition(StringRule::Allow(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Rejects the string if it is one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.condition(StringRule::Forbid(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Requires the string to match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(self, pattern: Regex) -> Self {
        self.condition(StringRule::Matches(pattern))
    }

    /// Rejects strings matching `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_matches(self, pattern: Regex) -> Self {
        self.condition(StringRule::NotMatches(pattern))
    }

    /// Requires standard-alphabet base64.
    #[must_use = "builder methods must be chained or built"]
    pub fn base64(self) -> Self {
        self.condition(StringRule::Base64)
    }

    /// Requires the string to parse as JSON.
    #[must_use = "builder methods must be chained or built"]
    pub fn json(self) -> Self {
        self.condition(StringRule::Json)
    }

    /// Requires an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
    #[must_use = "builder methods must be chained or built"]
    pub fn iso_date(self) -> Self {
        self.condition(StringRule::IsoDate)
    }

    /// Requires a decimal number, optionally signed, fractional or in
    /// scientific notation.
    #[must_use = "builder methods must be chained or built"]
    pub fn numeric(self) -> Self {
        self.condition(StringRule::Numeric)
    }

    /// Requires a hyphenated UUID.
    #[must_use = "builder methods must be chained or built"]
    pub fn uuid(self) -> Self {
        self.condition(StringRule::Uuid)
    }

    /// Requires one or more hex digits and nothing else.
    #[must_use = "builder methods must be chained or built"]
    pub fn hex(self) -> Self {
        self.condition(StringRule::Hex)
    }

    /// Requires an email address.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.condition(StringRule::Email)
    }

    /// Requires an absolute URI with any scheme.
    #[must_use = "builder methods must be chained or built"]
    pub fn uri(self) -> Self {
        self.condition(StringRule::Uri)
    }

    /// Requires an absolute http or https URL.
    #[must_use = "builder methods must be chained or built"]
    pub fn url(self) -> Self {
        self.condition(StringRule::Url)
    }
}

impl_fluent_rules!(StringValidator, str);

impl Validate for StringValidator {
    fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        let Value::String(text) = value else {
            return Err(self.rules.fail(messages::NOT_A_STRING));
        };
        for condition in &self.conditions {
            condition
                .check(text)
                .map_err(|message| self.rules.fail(message))?;
        }
        self.rules.run_custom(text)?;
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn first_message(validator: &StringValidator, text: &str) -> String {
        validator
            .validate(&Value::from(text))
            .unwrap_err()
            .message()
    }

    #[test]
    fn rejects_non_strings() {
        let validator = string();
        for wrong in [Value::Null, Value::Undefined, Value::from(1), Value::from(true)] {
            let err = validator.validate(&wrong).unwrap_err();
            assert_eq!(err.message(), "value is not a string");
        }
    }

    #[test]
    fn bare_validator_accepts_any_string() {
        assert!(string().is_valid(&Value::from("")));
        assert!(string().is_valid(&Value::from("anything")));
    }

    #[test]
    fn length_conditions_count_chars_not_bytes() {
        let validator = string().min(5).max(5);
        assert!(validator.is_valid(&Value::from("héllo")));
        assert!(string().length(1).is_valid(&Value::from("é")));
    }

    #[test]
    fn conditions_fail_in_registration_order() {
        // min was registered first, so an empty string reports "too short"
        // even though max(2) would also fail later inputs.
        let validator = string().min(5).max(2);
        assert_eq!(first_message(&validator, "abc"), "string is too short");
    }

    #[test]
    fn min_max_and_exact_length() {
        assert_eq!(first_message(&string().min(3), "ab"), "string is too short");
        assert_eq!(first_message(&string().max(2), "abc"), "string is too long");
        assert_eq!(
            first_message(&string().length(4), "abc"),
            "invalid string length"
        );
        assert!(string().length(3).is_valid(&Value::from("abc")));
    }

    #[test]
    fn allow_and_forbid_sets() {
        let color = string().allow(["red", "green", "blue"]);
        assert!(color.is_valid(&Value::from("green")));
        assert_eq!(first_message(&color, "yellow"), "value is not allowed");

        let name = string().forbid(["admin"]);
        assert!(name.is_valid(&Value::from("ada")));
        assert_eq!(first_message(&name, "admin"), "value is forbidden");
    }

    #[test]
    fn pattern_conditions() {
        let digits = string().matches(Regex::new(r"^\d+$").unwrap());
        assert!(digits.is_valid(&Value::from("123")));
        assert_eq!(
            first_message(&digits, "12a"),
            "value does not match the pattern"
        );

        let no_spaces = string().not_matches(Regex::new(r"\s").unwrap());
        assert!(no_spaces.is_valid(&Value::from("compact")));
        assert_eq!(
            first_message(&no_spaces, "two words"),
            "value matches a forbidden pattern"
        );
    }

    #[test]
    fn base64_condition() {
        let validator = string().base64();
        assert!(validator.is_valid(&Value::from("aGVsbG8=")));
        assert_eq!(
            first_message(&validator, "###not base64###"),
            "value is not a base64 string"
        );
    }

    #[test]
    fn json_condition() {
        let validator = string().json();
        assert!(validator.is_valid(&Value::from(r#"{"ok":true}"#)));
        assert!(validator.is_valid(&Value::from("[1,2,3]")));
        assert_eq!(
            first_message(&validator, "{broken"),
            "value is not a JSON string"
        );
    }

    #[test]
    fn iso_date_condition() {
        let validator = string().iso_date();
        assert!(validator.is_valid(&Value::from("2024-01-15T12:00:00Z")));
        assert!(validator.is_valid(&Value::from("2024-01-15")));
        assert_eq!(
            first_message(&validator, "15/01/2024"),
            "value is not an ISO date string"
        );
    }

    #[test]
    fn numeric_condition() {
        let validator = string().numeric();
        for ok in ["42", "-3.5", "+7", ".5", "1e10", "2.5E-3"] {
            assert!(validator.is_valid(&Value::from(ok)), "{ok} should pass");
        }
        for bad in ["", "abc", "1.2.3", "e5", "0x10"] {
            assert_eq!(
                first_message(&validator, bad),
                "value is not a numeric string",
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn uuid_condition() {
        let validator = string().uuid();
        assert!(validator.is_valid(&Value::from("550e8400-e29b-41d4-a716-446655440000")));
        assert_eq!(
            first_message(&validator, "550e8400"),
            "value is not a UUID string"
        );
    }

    #[test]
    fn hex_condition() {
        let validator = string().hex();
        assert!(validator.is_valid(&Value::from("deadBEEF01")));
        assert_eq!(first_message(&validator, ""), "value is not a hex string");
        assert_eq!(
            first_message(&validator, "0xff"),
            "value is not a hex string"
        );
    }

    #[test]
    fn email_condition() {
        let validator = string().email();
        assert!(validator.is_valid(&Value::from("user@example.com")));
        assert!(validator.is_valid(&Value::from("first.last+tag@sub.example.org")));
        assert_eq!(
            first_message(&validator, "not-an-email"),
            "value is not an email address"
        );
    }

    #[test]
    fn uri_and_url_conditions() {
        let uri = string().uri();
        assert!(uri.is_valid(&Value::from("ftp://host/file")));
        assert!(uri.is_valid(&Value::from("mailto:user@example.com")));
        assert_eq!(first_message(&uri, "no scheme here"), "value is not a URI");

        let url = string().url();
        assert!(url.is_valid(&Value::from("https://example.com/path")));
        assert_eq!(
            first_message(&url, "ftp://host/file"),
            "value is not a URL"
        );
    }

    #[test]
    fn custom_runs_after_conditions() {
        let validator = string()
            .min(1)
            .custom(|text| (!text.starts_with('x')).then(|| String::from("must start with x")));

        assert!(validator.is_valid(&Value::from("xyz")));
        assert_eq!(first_message(&validator, "abc"), "must start with x");
        // the min condition still fires first
        assert_eq!(first_message(&validator, ""), "string is too short");
    }

    #[test]
    fn error_override_masks_all_messages() {
        let validator = string().min(3).error("bad input");
        assert_eq!(first_message(&validator, "ab"), "bad input");

        let err = validator.validate(&Value::from(9)).unwrap_err();
        assert_eq!(err.message(), "bad input");
    }
}
