//! Payload normalization
//!
//! The one place where backend field naming is reconciled with the canonical
//! camelCase models. The backend may answer in snake_case or camelCase, wrap
//! lists in an envelope or not, and send numbers as strings; everything past
//! this module sees only the canonical shape.
//!
//! [`Normalize::normalize`] is total and idempotent: it never fails, and
//! normalizing the serialized output of a normalization yields the same value.

pub mod case;
pub mod payload;
mod events;
mod records;

pub use case::{FieldCase, convert_keys, label_key, to_camel_case, to_snake_case};
pub use payload::{AliasTable, Payload};

use serde::Serialize;
use serde_json::Value;

/// Build a canonical model from an arbitrary backend payload
pub trait Normalize: Sized {
    fn normalize(value: &Value) -> Self;
}

/// Build a request body from a flattened wizard draft (canonical keys)
pub trait FromDraft: Sized {
    fn from_draft(value: &Value) -> Self;
}

/// Items of a list response: a bare array, or an array under `data`,
/// `results`, `items` or the resource's plural name
pub fn list_items<'a>(value: &'a Value, plural: &str) -> &'a [Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => {
            for key in ["data", "results", "items", plural] {
                match map.get(key) {
                    Some(Value::Array(items)) => return items.as_slice(),
                    Some(inner @ Value::Object(_)) if key == "data" => return list_items(inner, plural),
                    _ => {}
                }
            }
            &[]
        }
        _ => &[],
    }
}

/// The record inside a single-item response: `{data: {...}}`,
/// `{<singular>: {...}}`, or the object itself
pub fn single_item<'a>(value: &'a Value, singular: &str) -> &'a Value {
    if let Value::Object(map) = value {
        for key in ["data", singular] {
            if let Some(inner @ Value::Object(_)) = map.get(key) {
                return single_item(inner, singular);
            }
        }
    }
    value
}

pub fn normalize_list<T: Normalize>(value: &Value, plural: &str) -> Vec<T> {
    list_items(value, plural).iter().map(T::normalize).collect()
}

pub fn normalize_one<T: Normalize>(value: &Value, singular: &str) -> T {
    T::normalize(single_item(value, singular))
}

/// Human-readable message from an error body (`message`, `detail`, `error`,
/// or the first field error of a validation response)
pub fn error_message(body: &Value) -> Option<String> {
    let map = body.as_object()?;
    for key in ["message", "detail", "error"] {
        match map.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(inner @ Value::Object(_)) => {
                if let Some(message) = error_message(inner) {
                    return Some(message);
                }
            }
            _ => {}
        }
    }
    if let Some(Value::Object(fields)) = map.get("errors") {
        for (field, messages) in fields {
            let first = match messages {
                Value::Array(items) => items.iter().find_map(Value::as_str),
                Value::String(s) => Some(s.as_str()),
                _ => None,
            };
            if let Some(message) = first {
                return Some(format!("{}: {}", field, message));
            }
        }
    }
    None
}

/// Serialize a canonical request body and rename its keys for the wire
pub fn to_wire<T: Serialize + ?Sized>(body: &T, case: FieldCase) -> Result<Value, serde_json::Error> {
    Ok(convert_keys(serde_json::to_value(body)?, case))
}
