//! jsondiffpatch delta encoding primitives and shape classification.

use serde_json::{Map, Value};

/// Member name marking an object delta as an array delta.
pub const ARRAY_MARKER: &str = "_t";
/// Value of [`ARRAY_MARKER`] on array deltas.
pub const ARRAY_MARKER_VALUE: &str = "a";

/// `[new]`: insert / set-new.
pub fn addition(new: Value) -> Value {
    Value::Array(vec![new])
}

/// `[old, new]`: replacement.
pub fn change(old: Value, new: Value) -> Value {
    Value::Array(vec![old, new])
}

/// `[old, 0, 0]`: remove.
pub fn deletion(old: Value) -> Value {
    Value::Array(vec![old, Value::from(0), Value::from(0)])
}

/// The four shapes a delta value may take, identified purely by inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaShape {
    /// `[v]`
    Addition,
    /// `[old, new]`
    Change,
    /// `[old, 0, 0]`
    Deletion,
    /// `["", dest_index, 3]`: patch-only, only meaningful under an array
    /// delta's `_src` key.
    Move,
    /// Any other array shape; not a valid delta primitive.
    Malformed,
}

/// Classifies an array-shaped delta entry by its length and trailing
/// literals. Callers must already know the value is an array; non-arrays
/// (object subdiffs) are handled separately.
pub fn classify_array(entries: &[Value]) -> DeltaShape {
    match entries {
        [_] => DeltaShape::Addition,
        [_, _] => DeltaShape::Change,
        [old, z1, z2] if is_move_marker(old, z1, z2) => DeltaShape::Move,
        [_, z1, z2] if is_literal_zero(z1) && is_literal_zero(z2) => DeltaShape::Deletion,
        _ => DeltaShape::Malformed,
    }
}

fn is_literal_zero(value: &Value) -> bool {
    value.as_f64() == Some(0.0)
}

fn is_move_marker(old: &Value, dest: &Value, tag: &Value) -> bool {
    old == &Value::String(String::new()) && dest.is_u64() && tag.as_f64() == Some(3.0)
}

/// True when `obj` carries the array-delta marker.
pub fn is_array_delta(obj: &Map<String, Value>) -> bool {
    obj.get(ARRAY_MARKER)
        .and_then(Value::as_str)
        .is_some_and(|v| v == ARRAY_MARKER_VALUE)
}
