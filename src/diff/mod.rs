//! Structural JSON diff, producing a jsondiffpatch-shaped delta.
//!
//! `diff` is the library's primary entry point. It dispatches by JSON type:
//! matching objects recurse member-wise, matching arrays run the
//! Myers-based array differ, everything else (mismatched types, or either
//! side a non-container) collapses to a `[old, new]` change once
//! [`crate::equal::equal`] has ruled out "no change at all."

mod array;
mod myers;
mod object;

use serde_json::Value;

use crate::delta;
use crate::equal::equal;
use crate::options::Options;
use crate::safety::{self, GuardState};

/// Diffs `left` against `right`, returning a jsondiffpatch-shaped delta, or
/// `None` when the two values are equal under `options.strict_equality` or
/// the recursion-depth guard trips before a result can be produced (both
/// collapse to the same sentinel).
pub fn diff(left: &Value, right: &Value, options: &Options<'_>) -> Option<Value> {
    if let Some(arena) = options.arena {
        arena.reset();
    }

    let guard = GuardState::new(options.max_depth);
    diff_with_guard(left, right, options.strict_equality, &guard)
}

/// The recursive workhorse behind [`diff`]: every nested member/element pair
/// re-enters here, so the equality fast path, the depth guard, and the type
/// dispatch all apply uniformly at every level rather than just at the top.
///
/// A `None` coming back out of the `Object`/`Array` arms below is *not*
/// reinterpreted as "these values must be a change": it is either "equal"
/// or "the depth guard tripped somewhere in there," and either way the right
/// thing is to propagate `None` so the caller (the object/array differ one
/// level up) emits nothing for this member. The `[old, new]` change entry is
/// built only in the catch-all arm, for a pair this function itself
/// determined, after passing its own guard check, is not a matching
/// object/array pair.
pub(crate) fn diff_with_guard(left: &Value, right: &Value, strict: bool, guard: &GuardState) -> Option<Value> {
    if equal(left, right, strict) {
        return None;
    }

    let _scope = guard.enter()?;

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => object::diff_object(l, r, strict, guard).map(Value::Object),
        (Value::Array(l), Value::Array(r)) => array::diff_array(l, r, strict, guard).map(Value::Object),
        _ => Some(delta::change(left.clone(), right.clone())),
    }
}

/// Convenience wrapper that parses two JSON documents from text before
/// diffing (`json_diff_str` in the C original). Rejects either payload
/// larger than `options.max_input_size` and treats a parse failure the same
/// as "no delta producible": both return `None` rather than a `Result`,
/// keeping with the sentinel-only contract.
pub fn diff_from_text(left_text: &str, right_text: &str, options: &Options<'_>) -> Option<Value> {
    if !safety::check_input_size(left_text.as_bytes(), options.max_input_size)
        || !safety::check_input_size(right_text.as_bytes(), options.max_input_size)
    {
        return None;
    }

    let left: Value = serde_json::from_str(left_text).ok()?;
    let right: Value = serde_json::from_str(right_text).ok()?;
    diff(&left, &right, options)
}
