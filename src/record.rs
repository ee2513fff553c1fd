//! Cleaning of JSON-backed bilingual records.

use serde_json::{Map, Value};

use crate::sanitizer::Sanitizer;

/// Run `sanitizer` over every string in `record`, recursing into nested
/// objects and arrays. Numbers, booleans and nulls are copied unchanged.
pub fn clean_record<S: Sanitizer + ?Sized>(
    sanitizer: &S,
    record: &Map<String, Value>,
) -> Map<String, Value> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), clean_value(sanitizer, value)))
        .collect()
}

fn clean_value<S: Sanitizer + ?Sized>(sanitizer: &S, value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitizer.sanitize(s)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| clean_value(sanitizer, item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(clean_record(sanitizer, map)),
        other => other.clone(),
    }
}
