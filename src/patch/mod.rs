//! Patch application: replays a jsondiffpatch delta against an original
//! document.
//!
//! Grounded on `examples/original_source/src/json_diff.c`'s `json_patch`
//! top-level dispatch: a two-element array diff is always a scalar-style
//! change (swap in the new value wholesale), anything that isn't an object
//! falls back to "leave the original as-is," and an object diff either
//! carries the array marker (dispatch to [`array::patch_array`]) or is a
//! plain member-wise object diff (dispatch to [`object::patch_object`]).

mod array;
mod object;

use serde_json::Value;

use crate::delta::{self, DeltaShape};
use crate::options::Options;
use crate::safety::GuardState;

/// Applies `diff_value` to `original`, returning the patched document, or
/// `None` if the recursion-depth guard trips (folds into the same
/// sentinel-only contract as `diff`).
pub fn patch(original: &Value, diff_value: &Value, options: &Options<'_>) -> Option<Value> {
    if let Some(arena) = options.arena {
        arena.reset();
    }

    let guard = GuardState::new(options.max_depth);
    patch_with_guard(original, diff_value, &guard)
}

pub(crate) fn patch_with_guard(original: &Value, diff_value: &Value, guard: &GuardState) -> Option<Value> {
    let _scope = guard.enter()?;

    if let Value::Array(items) = diff_value {
        if let DeltaShape::Change = delta::classify_array(items) {
            return Some(items[1].clone());
        }
        // Any other array shape is not meaningful standing alone as "the
        // diff for this position" (additions/deletions/moves only make
        // sense as members of a surrounding object/array delta); leave the
        // original untouched rather than fail.
        return Some(original.clone());
    }

    let Value::Object(diff_obj) = diff_value else {
        return Some(original.clone());
    };

    if delta::is_array_delta(diff_obj) {
        return match original {
            Value::Array(items) => array::patch_array(items, diff_obj, guard).map(Value::Array),
            other => Some(other.clone()),
        };
    }

    let original_map = original.as_object();
    object::patch_object(original_map, diff_obj, guard).map(Value::Object)
}
