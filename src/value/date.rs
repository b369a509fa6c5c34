//! Timestamp type used by date values and date bounds.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

// ==================== Date ====================

/// A point in time with millisecond precision.
///
/// Dates compare by their epoch offset, so ordering and equality behave the
/// same regardless of the representation they were parsed from.
///
/// # Examples
///
/// ```rust
/// use shapecheck::value::Date;
///
/// let from_ms = Date::from_epoch_ms(1_700_000_000_000);
/// let parsed = Date::parse("2023-11-14T22:13:20Z").unwrap();
/// assert_eq!(from_ms, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    epoch_ms: i64,
}

impl Date {
    /// Creates a date from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
    ///
    /// Plain dates resolve to midnight UTC. Returns `None` for anything else;
    /// there is no lenient fallback parsing.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::from_epoch_ms(parsed.timestamp_millis()));
        }
        let day = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
        Some(Self::from_epoch_ms(midnight.timestamp_millis()))
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn epoch_ms(self) -> i64 {
        self.epoch_ms
    }

    /// Renders as an RFC 3339 UTC timestamp with millisecond precision,
    /// e.g. `2023-11-14T22:13:20.000Z`.
    #[must_use]
    pub fn to_iso_string(self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.epoch_ms).map_or_else(
            || format!("out-of-range date ({} ms)", self.epoch_ms),
            |utc| utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// ==================== DateLike ====================

/// A date bound accepted anywhere a comparison date is configured.
///
/// Converts from [`Date`], epoch milliseconds (`i64` or `f64`) and date
/// strings. A bound that does not resolve to a real timestamp, such as an
/// unparseable string or a NaN offset, is kept but never satisfied: every
/// comparison against it fails.
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let after_epoch = date().min(0);
/// assert!(after_epoch.is_valid(&Value::from(Date::from_epoch_ms(10))));
///
/// let never = date().min("not a date");
/// assert!(!never.is_valid(&Value::from(Date::from_epoch_ms(10))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLike {
    epoch_ms: Option<i64>,
}

impl DateLike {
    /// The resolved epoch offset, or `None` for an unusable bound.
    #[must_use]
    pub const fn epoch_ms(self) -> Option<i64> {
        self.epoch_ms
    }
}

impl From<Date> for DateLike {
    fn from(date: Date) -> Self {
        Self {
            epoch_ms: Some(date.epoch_ms()),
        }
    }
}

impl From<i64> for DateLike {
    fn from(epoch_ms: i64) -> Self {
        Self {
            epoch_ms: Some(epoch_ms),
        }
    }
}

impl From<i32> for DateLike {
    fn from(epoch_ms: i32) -> Self {
        Self::from(i64::from(epoch_ms))
    }
}

impl From<f64> for DateLike {
    fn from(epoch_ms: f64) -> Self {
        Self {
            epoch_ms: epoch_ms.is_finite().then(|| epoch_ms as i64),
        }
    }
}

impl From<&str> for DateLike {
    fn from(text: &str) -> Self {
        Self {
            epoch_ms: Date::parse(text).map(Date::epoch_ms),
        }
    }
}

impl From<String> for DateLike {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let date = Date::parse("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(date.epoch_ms(), 1_700_000_000_000);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let utc = Date::parse("2024-01-15T12:00:00Z").unwrap();
        let offset = Date::parse("2024-01-15T14:00:00+02:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let date = Date::parse("1970-01-02").unwrap();
        assert_eq!(date.epoch_ms(), 86_400_000);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Date::parse("not a date"), None);
        assert_eq!(Date::parse("2024-13-40"), None);
        assert_eq!(Date::parse(""), None);
    }

    #[test]
    fn orders_by_epoch() {
        let earlier = Date::from_epoch_ms(1_000);
        let later = Date::from_epoch_ms(2_000);
        assert!(earlier < later);
    }

    #[test]
    fn iso_round_trip() {
        let date = Date::from_epoch_ms(1_700_000_000_000);
        let iso = date.to_iso_string();
        assert_eq!(iso, "2023-11-14T22:13:20.000Z");
        assert_eq!(Date::parse(&iso), Some(date));
    }

    #[test]
    fn date_like_conversions() {
        assert_eq!(DateLike::from(500i64).epoch_ms(), Some(500));
        assert_eq!(DateLike::from(500.9f64).epoch_ms(), Some(500));
        assert_eq!(DateLike::from(Date::from_epoch_ms(7)).epoch_ms(), Some(7));
        assert_eq!(DateLike::from("1970-01-01").epoch_ms(), Some(0));
    }

    #[test]
    fn unusable_bounds_resolve_to_none() {
        assert_eq!(DateLike::from(f64::NAN).epoch_ms(), None);
        assert_eq!(DateLike::from(f64::INFINITY).epoch_ms(), None);
        assert_eq!(DateLike::from("yesterday-ish").epoch_ms(), None);
    }
}
