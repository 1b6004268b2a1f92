//! Field-name case conversion between the canonical camelCase shape and the
//! backend wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key naming used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldCase {
    #[default]
    Snake,
    Camel,
}

impl FieldCase {
    pub fn apply(&self, key: &str) -> String {
        match self {
            FieldCase::Snake => to_snake_case(key),
            FieldCase::Camel => to_camel_case(key),
        }
    }
}

/// `registrationCount` -> `registration_count`; snake_case input is unchanged
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_uppercase() {
            if matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// `registration_count` -> `registrationCount`; camelCase input is unchanged
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Reduce an enum label to a comparable key:
/// `Registration Open`, `registrationOpen`, `REGISTRATION-OPEN` all become `registration_open`
pub fn label_key(label: &str) -> String {
    let snake = to_snake_case(label.trim()).to_lowercase();
    let mut out = String::with_capacity(snake.len());
    for c in snake.chars() {
        let c = if c == ' ' || c == '-' { '_' } else { c };
        if c == '_' && (out.is_empty() || out.ends_with('_')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Recursively rename object keys to the given case
pub fn convert_keys(value: Value, case: FieldCase) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (case.apply(&k), convert_keys(v, case)))
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(|v| convert_keys(v, case)).collect()),
        other => other,
    }
}
