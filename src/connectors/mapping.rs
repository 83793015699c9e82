//! Field extraction helpers used by the vendor mappers.
//!
//! Every helper is total: a missing key, a non-object row or a value of the
//! wrong JSON type never fails, it only degrades the field to `Absent`.

use serde_json::Value;

use super::values::{Email, Field, Timestamp, Url};

fn raw<'a>(item: &'a Value, key: &str) -> Field<&'a Value> {
    match item.get(key) {
        None => Field::Absent,
        Some(Value::Null) => Field::Null,
        Some(value) => Field::Value(value),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Required identifier; numbers are rendered as strings, anything else becomes empty
pub fn id(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(scalar_to_string)
        .unwrap_or_default()
}

pub fn string(item: &Value, key: &str) -> Field<String> {
    raw(item, key).and_then(scalar_to_string)
}

pub fn integer(item: &Value, key: &str) -> Field<i64> {
    raw(item, key).and_then(|value| match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn boolean(item: &Value, key: &str) -> Field<bool> {
    raw(item, key).and_then(Value::as_bool)
}

/// Empty strings and unparseable URLs are suppressed to `Absent`
pub fn url(item: &Value, key: &str) -> Field<Url> {
    raw(item, key).and_then(|value| value.as_str().and_then(Url::parse))
}

/// Empty strings and malformed addresses are suppressed to `Absent`
pub fn email(item: &Value, key: &str) -> Field<Email> {
    raw(item, key).and_then(|value| value.as_str().and_then(Email::parse))
}

/// Dates are never pre-validated; bad input yields `Timestamp::Invalid`
pub fn timestamp(item: &Value, key: &str) -> Field<Timestamp> {
    raw(item, key).and_then(|value| match value {
        Value::String(s) => Some(Timestamp::parse(s)),
        Value::Number(n) => n.as_i64().map(Timestamp::from_millis),
        other => Some(Timestamp::Invalid(other.to_string())),
    })
}

/// String array; non-string members are dropped
pub fn strings(item: &Value, key: &str) -> Field<Vec<String>> {
    raw(item, key).and_then(|value| {
        value.as_array().map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
    })
}
