//! JSON-LD Structured Data
//!
//! Reads every `application/ld+json` script and searches the decoded values,
//! including `@graph` arrays and nested objects, depth-first in document order.
//! Scripts that are not valid JSON are skipped.

use dom_query::{Document, Selection};
use serde_json::Value;

/// Decoded JSON-LD blocks of the document, in document order.
#[must_use]
pub fn json_ld_values(doc: &Document) -> Vec<Value> {
    doc.select(r#"script[type="application/ld+json"]"#)
        .nodes()
        .iter()
        .filter_map(|node| {
            let text = Selection::from(*node).text();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            serde_json::from_str(text).ok()
        })
        .collect()
}

/// First non-empty string stored under `key` anywhere in `values`.
#[must_use]
pub fn find_string(values: &[Value], key: &str) -> Option<String> {
    values.iter().find_map(|value| find_string_in(value, key))
}

fn find_string_in(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => {
            if let Some(s) = map.get(key).and_then(Value::as_str) {
                let s = s.trim();
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
            map.values().find_map(|v| find_string_in(v, key))
        }
        Value::Array(items) => items.iter().find_map(|v| find_string_in(v, key)),
        _ => None,
    }
}

/// First person name stored under `key` (`author`, `creator`).
///
/// Accepts a plain string, an object with `name`, or an array of either.
#[must_use]
pub fn find_person_name(values: &[Value], key: &str) -> Option<String> {
    values.iter().find_map(|value| find_person_in(value, key))
}

fn find_person_in(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => map
            .get(key)
            .and_then(person_name)
            .or_else(|| map.values().find_map(|v| find_person_in(v, key))),
        Value::Array(items) => items.iter().find_map(|v| find_person_in(v, key)),
        _ => None,
    }
}

fn person_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(map) => map.get("name").and_then(person_name),
        Value::Array(items) => items.iter().find_map(person_name),
        _ => None,
    }
}
