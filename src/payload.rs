//! Lenient JSON helpers for backend payloads.
//!
//! The scenario runner and the event pipeline are not guaranteed to return
//! well-formed or consistently shaped JSON. Parsing never fails loudly here:
//! a body that does not parse is simply "no parsed value", and a field only
//! counts as present when its value is truthy (non-empty string, non-zero
//! number, `true`, or any object or array).

use serde_json::Value;

/// Parse `text` as JSON, returning `None` instead of an error.
pub fn parse_lenient(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Display text for a truthy JSON value, or `None` when the value is falsy.
///
/// Strings render without quotes, integral numbers without a fractional
/// part, and objects or arrays as compact JSON.
pub fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => number_text(n),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn number_text(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return (u != 0).then(|| u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 || f.is_nan() {
        return None;
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some(format!("{}", f as i64))
    } else {
        Some(f.to_string())
    }
}

/// Look up `key` on `value` and return its truthy display text.
pub fn truthy_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(truthy_text)
}
