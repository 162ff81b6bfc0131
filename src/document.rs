//! Tolerant access into decoded API payloads.
//!
//! Genius responses are read as untyped JSON and picked apart key by key, so a
//! missing or empty field anywhere in a chain simply yields `None`.

use serde_json::Value;

use crate::error::Result;

/// A decoded API response.
pub type Document = Value;

/// Decode a raw response body.
pub fn parse(text: &str) -> Result<Document> {
    Ok(serde_json::from_str(text)?)
}

/// Follow `path` through nested objects.
///
/// Every step must land on a truthy value: a key holding `null`, `false`, `0`,
/// `""`, `[]` or `{}` ends the walk with `None` just like a missing key does.
pub fn get<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = doc;
    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .filter(|value| is_truthy(value))?;
    }
    Some(current)
}

/// Text form of a scalar: strings as-is, anything else as JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
