//! Lenient, total reader over a backend JSON object.
//!
//! Every accessor takes the canonical camelCase key. Lookup order is the
//! canonical key, its snake_case form, then the model's alias table. `null`
//! counts as absent. Accessors never fail; absent or mistyped values fall back
//! to the empty value of the requested type.

use serde_json::{Map, Value};
use super::case::to_snake_case;

/// Irregular backend names per canonical key
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    map: Option<&'a Map<String, Value>>,
    aliases: AliasTable,
}

impl<'a> Payload<'a> {
    /// Wrap a value; non-objects read as an empty object
    pub fn new(value: &'a Value, aliases: AliasTable) -> Self {
        Self {
            map: value.as_object(),
            aliases,
        }
    }

    pub fn from_map(map: &'a Map<String, Value>, aliases: AliasTable) -> Self {
        Self {
            map: Some(map),
            aliases,
        }
    }

    /// Raw lookup following canonical, snake_case, then alias order
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let map = self.map?;
        let present = |k: &str| map.get(k).filter(|v| !v.is_null());

        if let Some(v) = present(key) {
            return Some(v);
        }
        let snake = to_snake_case(key);
        if snake != key {
            if let Some(v) = present(&snake) {
                return Some(v);
            }
        }
        self.aliases
            .iter()
            .filter(|(canonical, _)| *canonical == key)
            .flat_map(|(_, alternatives)| alternatives.iter())
            .find_map(|alt| present(alt).or_else(|| present(&to_snake_case(alt))))
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Text; numbers and booleans are rendered, anything else is empty
    pub fn string(&self, key: &str) -> String {
        self.get(key).map(scalar_to_string).unwrap_or_default()
    }

    /// Identifier; a nested object contributes its own `id`
    pub fn id(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::Object(inner)) => inner.get("id").map(scalar_to_string).unwrap_or_default(),
            Some(v) => scalar_to_string(v),
            None => String::new(),
        }
    }

    /// Non-negative integer; numeric strings are parsed, fractions truncated
    pub fn u32(&self, key: &str) -> u32 {
        self.get(key).and_then(value_as_f64).map(clamp_u32).unwrap_or(0)
    }

    /// Like [`Payload::u32`], but an array counts its elements
    pub fn count(&self, key: &str) -> u32 {
        match self.get(key) {
            Some(Value::Array(items)) => u32::try_from(items.len()).unwrap_or(u32::MAX),
            Some(v) => value_as_f64(v).map(clamp_u32).unwrap_or(0),
            None => 0,
        }
    }

    /// Non-negative amount
    pub fn amount(&self, key: &str) -> f64 {
        self.get(key)
            .and_then(value_as_f64)
            .filter(|n| n.is_finite() && *n > 0.0)
            .unwrap_or(0.0)
    }

    /// Flag; accepts booleans, numbers and the usual truthy strings
    pub fn bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on"),
            _ => false,
        }
    }

    /// List of strings. A comma-separated string is split; objects contribute
    /// their `name`; other non-scalars are skipped.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(_) | Value::Bool(_) => Some(scalar_to_string(item)),
                    Value::Object(inner) => inner.get("name").and_then(Value::as_str).map(str::to_string),
                    _ => None,
                })
                .collect(),
            Some(Value::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Elements of an array field
    pub fn items(&self, key: &str) -> &'a [Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// A nested object field
    pub fn object(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|v| v.is_object())
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn clamp_u32(n: f64) -> u32 {
    if !n.is_finite() || n <= 0.0 {
        0
    } else if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n as u32
    }
}
