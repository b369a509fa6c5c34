//! Bridging between [`Value`] and `serde_json::Value`
//!
//! Decoded JSON is the most common input at a validation boundary, so the
//! conversion in is total: every JSON document maps onto a [`Value`] with
//! object key order preserved. The conversion out is lossy where the value
//! model is wider than JSON: `undefined` and methods become `null`, dates
//! become ISO 8601 strings, and non-finite numbers become `null`.

use indexmap::IndexMap;

use crate::value::Value;

impl Value {
    /// Converts decoded JSON into a [`Value`], preserving object key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapecheck::prelude::*;
    ///
    /// let value = Value::from_json(serde_json::json!({"id": 7, "tags": ["a"]}));
    /// assert_eq!(value.property("id"), &Value::from(7));
    /// assert_eq!(value.property("tags").property("length"), &Value::Undefined);
    /// ```
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                Self::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from_json(entry)))
                    .collect::<IndexMap<_, _>>(),
            ),
        }
    }

    /// Converts the value back into JSON, lossily.
    ///
    /// `undefined` and methods have no JSON counterpart and become `null`,
    /// as do NaN and infinite numbers. Dates render as ISO 8601 strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapecheck::prelude::*;
    ///
    /// let value = Value::from_iter([Value::Undefined, Value::from(f64::NAN)]);
    /// assert_eq!(value.to_json(), serde_json::json!([null, null]));
    ///
    /// let date = Value::from(Date::from_epoch_ms(0));
    /// assert_eq!(date.to_json(), serde_json::json!("1970-01-01T00:00:00.000Z"));
    /// ```
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null | Self::Method(_) => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => serde_json::Number::from_f64(*number)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Date(date) => serde_json::Value::String(date.to_iso_string()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::value::{Date, Method};

    #[test]
    fn scalars_map_directly() {
        assert_eq!(Value::from_json(json!(null)), Value::Null);
        assert_eq!(Value::from_json(json!(true)), Value::Bool(true));
        assert_eq!(Value::from_json(json!(2.5)), Value::Number(2.5));
        assert_eq!(Value::from_json(json!(-3)), Value::Number(-3.0));
        assert_eq!(Value::from_json(json!("hi")), Value::String(String::from("hi")));
    }

    #[test]
    fn object_key_order_survives_decoding() {
        let value = Value::from_json(json!({"b": 1, "a": 2, "c": 3}));
        let entries = value.as_object().unwrap();
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn nested_containers_convert_recursively() {
        let value = Value::from_json(json!({"items": [{"id": 1}, {"id": 2}]}));
        assert_eq!(
            value.property("items").property("length"),
            &Value::Undefined
        );
        let items = value.property("items").as_array().unwrap();
        assert_eq!(items[1].property("id"), &Value::from(2));
    }

    #[test]
    fn json_round_trip_is_identity() {
        let document = json!({
            "name": "Ada",
            "scores": [1, 2.5, -3],
            "meta": {"active": true, "note": null},
        });
        assert_eq!(Value::from_json(document.clone()).to_json(), document);
    }

    #[test]
    fn lossy_values_become_null() {
        assert_eq!(Value::Undefined.to_json(), json!(null));
        assert_eq!(Value::from(Method::new(2)).to_json(), json!(null));
        assert_eq!(Value::from(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::from(f64::INFINITY).to_json(), json!(null));
    }

    #[test]
    fn dates_render_as_iso_strings() {
        let value = Value::from(Date::from_epoch_ms(86_400_000));
        assert_eq!(value.to_json(), json!("1970-01-02T00:00:00.000Z"));
    }

    #[test]
    fn from_impl_matches_from_json() {
        let value: Value = json!([1, "two"]).into();
        assert_eq!(value, Value::from_json(json!([1, "two"])));
    }
}
