//! Canonical query-string construction
//!
//! The signed content includes the query string exactly as sent, so query
//! serialization is part of the wire contract:
//!
//! - parameters keep the caller's order (never sorted) — a non-deterministic
//!   order would make signatures intermittently fail server-side verification
//! - empty values are stripped before the string is built
//! - array values serialize as `["v1","v2"]` before percent-encoding, not as
//!   repeated keys

use serde_json::Value;
use std::borrow::Cow;

/// Ordered query parameters
///
/// `Value` covers the handful of shapes endpoints pass: strings, numbers,
/// booleans, arrays, and `Null` for absent optionals.
pub type Params<'a> = Vec<(&'a str, Value)>;

/// Drop parameters whose value is empty
///
/// Empty means: `null`, an empty or whitespace-only string, an empty array,
/// or an empty object. `false` and `0` are real values and are kept.
/// Idempotent: stripping an already-stripped set is a no-op.
pub fn strip_empty_params(params: Params<'_>) -> Params<'_> {
    params
        .into_iter()
        .filter(|(_, value)| !is_empty_value(value))
        .collect()
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Build `key=urlencoded(value)` pairs joined by `&`, preserving order
pub fn build_query_string(params: &[(&str, Value)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&stringify_value(value))))
        .collect::<Vec<_>>()
        .join("&")
}

/// Render a value the way the server parses it
///
/// Arrays become a bracketed, double-quoted, comma-joined list; scalars
/// render bare (strings without JSON quoting).
fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| format!("\"{}\"", scalar_text(item)))
                .collect::<Vec<_>>()
                .join(",");
            format!("[{}]", joined)
        }
        other => scalar_text(other).into_owned(),
    }
}

fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
