//! The in-memory JSON value model.
//!
//! `diff` and `patch` operate on [`serde_json::Value`] directly rather than a
//! bespoke tagged union: this crate turns on `serde_json`'s `preserve_order`
//! feature, which backs `Value::Object`'s `Map` with an indexmap instead of
//! a `BTreeMap`, so object members iterate in insertion order. jsondiffpatch
//! wire compatibility requires that guarantee; a caller embedding this crate
//! alongside its own `serde_json` dependency must keep `preserve_order`
//! enabled too, or member ordering (and therefore byte-for-byte delta
//! compatibility) silently reverts to lexicographic `BTreeMap` order.
//! Reusing `serde_json::Value` rather than inventing a parallel enum keeps
//! the parser/printer boundary a true external collaborator: any
//! `serde_json::Value` produced by any parser is already a valid input.

pub use serde_json::Value;
pub use serde_json::Map;

/// Looks up a member of an object by key, returning `None` for both "not an
/// object" and "no such key", the two cases the object differ and equality
/// need to distinguish from "present but different."
pub fn get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|obj| obj.get(key))
}

/// Length of an array or object; `None` for scalars, which have no length.
pub fn len(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(obj) => Some(obj.len()),
        _ => None,
    }
}

/// Human-readable type tag, used only in error messages / log fields.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
