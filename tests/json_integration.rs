//! Integration tests for validating decoded JSON documents.

use serde_json::json;
use shapecheck::prelude::*;

// ============================================================================
// A: SCALARS STRAIGHT FROM JSON
// ============================================================================

#[test]
fn scalar_validators_accept_decoded_values() {
    assert!(string().min(3).is_valid(&Value::from_json(json!("hello"))));
    assert!(number().min(0.0).is_valid(&Value::from_json(json!(42))));
    assert!(boolean().is_valid(&Value::from_json(json!(false))));
    assert!(null().is_valid(&Value::from_json(json!(null))));
}

#[test]
fn json_null_is_null_not_undefined() {
    let value = Value::from_json(json!(null));
    assert!(null().is_valid(&value));
    assert!(!undefined().is_valid(&value));
    assert!(nullish().is_valid(&value));
}

#[test]
fn integers_and_floats_share_one_number_type() {
    let validator = number().min(2.0).max(3.0);
    assert!(validator.is_valid(&Value::from_json(json!(2))));
    assert!(validator.is_valid(&Value::from_json(json!(2.5))));
    assert!(!validator.is_valid(&Value::from_json(json!(4))));
}

// ============================================================================
// B: USER REGISTRATION PAYLOAD
// ============================================================================

fn registration() -> ObjectValidator {
    object()
        .property("name", string().min(1).max(100))
        .property("email", string().email())
        .property("password", string().min(8))
        .property("age", number().min(13.0).max(120.0))
        .property("terms_accepted", boolean().only(true))
}

#[test]
fn valid_registration_passes() {
    let payload = Value::from_json(json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "securepass123",
        "age": 28,
        "terms_accepted": true,
    }));
    assert!(registration().is_valid(&payload));
}

#[test]
fn each_bad_field_reports_its_own_path() {
    let cases = [
        (json!({"name": "", "email": "a@b.co", "password": "longenough", "age": 30, "terms_accepted": true}), "name", "string is too short"),
        (json!({"name": "Bob", "email": "not-an-email", "password": "longenough", "age": 30, "terms_accepted": true}), "email", "value is not an email address"),
        (json!({"name": "Bob", "email": "a@b.co", "password": "short", "age": 30, "terms_accepted": true}), "password", "string is too short"),
        (json!({"name": "Bob", "email": "a@b.co", "password": "longenough", "age": 10, "terms_accepted": true}), "age", "value is too small"),
        (json!({"name": "Bob", "email": "a@b.co", "password": "longenough", "age": 30, "terms_accepted": false}), "terms_accepted", "value is not true"),
    ];

    for (payload, path, message) in cases {
        let err = registration()
            .validate(&Value::from_json(payload))
            .unwrap_err();
        assert_eq!(err.path(), path);
        assert_eq!(err.original_message(), message);
    }
}

#[test]
fn missing_required_field_reports_at_that_key() {
    let payload = Value::from_json(json!({
        "name": "Alice",
        "password": "securepass123",
        "age": 28,
        "terms_accepted": true,
    }));
    let err = registration().validate(&payload).unwrap_err();
    assert_eq!(err.path(), "email");
    assert_eq!(err.original_message(), "value is not a string");
}

// ============================================================================
// C: SERVER CONFIG PAYLOAD
// ============================================================================

fn server_config() -> ObjectValidator {
    let log_level = any_of![
        equals("info"),
        equals("warn"),
        equals("error"),
    ];
    object()
        .property("host", string().min(1))
        .property("port", number().min(1.0).max(65535.0))
        .property("workers", number().positive())
        .property("tls", optional(object().property("cert_path", string().min(1))))
        .property("log_level", optional(log_level))
}

#[test]
fn config_with_and_without_optional_sections() {
    let full = Value::from_json(json!({
        "host": "0.0.0.0",
        "port": 8080,
        "workers": 4,
        "tls": {"cert_path": "/etc/ssl/cert.pem"},
        "log_level": "info",
    }));
    assert!(server_config().is_valid(&full));

    let minimal = Value::from_json(json!({
        "host": "localhost",
        "port": 3000,
        "workers": 1,
    }));
    assert!(server_config().is_valid(&minimal));
}

#[test]
fn bad_optional_section_still_localizes() {
    let bad = Value::from_json(json!({
        "host": "localhost",
        "port": 3000,
        "workers": 1,
        "tls": {"cert_path": ""},
    }));
    let err = server_config().validate(&bad).unwrap_err();
    assert_eq!(err.path(), "tls.cert_path");

    let unknown_level = Value::from_json(json!({
        "host": "localhost",
        "port": 3000,
        "workers": 1,
        "log_level": "debug!!",
    }));
    let err = server_config().validate(&unknown_level).unwrap_err();
    assert_eq!(err.path(), "log_level");
    assert_eq!(
        err.original_message(),
        "value does not match any of the possible types"
    );
}

// ============================================================================
// D: HETEROGENEOUS DOCUMENTS
// ============================================================================

#[test]
fn tuple_shaped_json_rows() {
    let row = tuple()
        .item(string().min(1))
        .item(number())
        .item(boolean())
        .no_overload();
    let rows = array(row);

    let ok = Value::from_json(json!([["a", 1, true], ["b", 2, false]]));
    assert!(rows.is_valid(&ok));

    let ragged = Value::from_json(json!([["a", 1, true], ["b", 2]]));
    let err = rows.validate(&ragged).unwrap_err();
    assert_eq!(err.message(), "too few items (1)");
}

#[test]
fn dictionary_of_feature_flags() {
    let validator = dictionary(boolean()).keys(string().matches(
        regex::Regex::new("^[a-z][a-z0-9_]*$").unwrap(),
    ));

    let ok = Value::from_json(json!({"dark_mode": true, "beta_2": false}));
    assert!(validator.is_valid(&ok));

    let bad_key = Value::from_json(json!({"Dark-Mode": true}));
    let err = validator.validate(&bad_key).unwrap_err();
    assert_eq!(err.message(), "value does not match the pattern (Dark-Mode)");
}

#[test]
fn keyed_objects_decoded_from_json_count_as_arrays() {
    // a JSON object carrying a numeric length validates as array-like
    let value = Value::from_json(json!({"length": 2, "0": "a", "1": "b"}));
    assert!(array(string()).is_valid(&value));

    let short = Value::from_json(json!({"length": 2, "0": "a"}));
    let err = array(string()).validate(&short).unwrap_err();
    assert_eq!(err.message(), "value is not a string (1)");
}

// ============================================================================
// E: ERROR SERIALIZATION
// ============================================================================

#[test]
fn error_to_json_round_trips_through_serde() {
    let validator = object().property("items", array(number()));
    let err = validator
        .validate(&Value::from_json(json!({"items": [1, "x"]})))
        .unwrap_err();

    let encoded = err.to_json();
    assert_eq!(encoded["path"], json!("items.1"));
    assert_eq!(encoded["message"], json!("value is not a number (items.1)"));
    assert_eq!(encoded["original_message"], json!("value is not a number"));
    assert_eq!(encoded["sub_errors"].as_array().unwrap().len(), 1);

    // the document is plain data; it survives a serde round trip untouched
    let text = serde_json::to_string(&encoded).unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, encoded);
}
