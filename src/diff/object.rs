//! Object differ: per-member add/change/delete plus recursive descent into
//! nested objects/arrays, skipping unchanged members.
//!
//! Grounded on `examples/original_source/src/json_diff.c`'s `do_json_diff`
//! object branch (iterate left's members, then right's members for
//! additions) and the teacher's own object-walking style in
//! `examples/kamilczerw-spatch/src/diff/engine.rs`'s `diff_object`.

use serde_json::{Map, Value};

use crate::delta;
use crate::diff::diff_with_guard;
use crate::safety::GuardState;

/// Diffs two JSON objects member-by-member, returning the (unmarked, no
/// `_t`) object-shaped delta, or `None` if every member is identical or the
/// guard tripped.
pub fn diff_object(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    strict: bool,
    guard: &GuardState,
) -> Option<Map<String, Value>> {
    // The caller (`diff_with_guard`) already entered a guard level for this
    // container; each member's own recursion re-enters through
    // `diff_with_guard`, so this function must not enter a second time.
    let mut out = Map::new();

    for (key, left_value) in left {
        match right.get(key) {
            None => {
                out.insert(key.clone(), delta::deletion(left_value.clone()));
            }
            Some(right_value) => {
                // `diff_with_guard` is the full recursive `diff`: it already
                // handles the equality fast path, the depth guard, and the
                // change-vs-recurse dispatch. A `None` here means "no delta
                // for this member", either genuinely equal or guard-tripped,
                // never a reason to fall back to a raw change entry.
                if let Some(sub) = diff_with_guard(left_value, right_value, strict, guard) {
                    out.insert(key.clone(), sub);
                }
            }
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            out.insert(key.clone(), delta::addition(right_value.clone()));
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use serde_json::json;

    fn guard() -> GuardState {
        GuardState::new(1024)
    }

    #[test]
    fn identical_objects_produce_no_delta() {
        let left = json!({"a": 1}).as_object().unwrap().clone();
        check!(diff_object(&left, &left, true, &guard()).is_none());
    }

    #[test]
    fn added_member_is_an_addition() {
        let left = json!({"a": 1}).as_object().unwrap().clone();
        let right = json!({"a": 1, "b": 2}).as_object().unwrap().clone();
        let d = diff_object(&left, &right, true, &guard()).unwrap();
        check!(d.get("b") == Some(&json!([2])));
    }

    #[test]
    fn removed_member_is_a_deletion() {
        let left = json!({"a": 1, "b": 2}).as_object().unwrap().clone();
        let right = json!({"a": 1}).as_object().unwrap().clone();
        let d = diff_object(&left, &right, true, &guard()).unwrap();
        check!(d.get("b") == Some(&json!([2, 0, 0])));
    }

    #[test]
    fn scalar_member_replacement_is_a_change() {
        let left = json!({"a": 1}).as_object().unwrap().clone();
        let right = json!({"a": 2}).as_object().unwrap().clone();
        let d = diff_object(&left, &right, true, &guard()).unwrap();
        check!(d.get("a") == Some(&json!([1, 2])));
    }

    #[test]
    fn nested_object_member_recurses() {
        let left = json!({"a": {"x": 1}}).as_object().unwrap().clone();
        let right = json!({"a": {"x": 2}}).as_object().unwrap().clone();
        let d = diff_object(&left, &right, true, &guard()).unwrap();
        check!(d.get("a") == Some(&json!({"x": [1, 2]})));
    }

    #[test]
    fn guard_trip_on_a_member_drops_it_instead_of_emitting_a_change() {
        // Simulate the caller (`diff_with_guard`) having already entered the
        // one level this guard allows for the object itself; the member
        // recursion below needs a level of its own and finds none left.
        let guard = GuardState::new(1);
        let _scope = guard.enter();
        let left = json!({"a": 1}).as_object().unwrap().clone();
        let right = json!({"a": 2}).as_object().unwrap().clone();
        check!(diff_object(&left, &right, true, &guard).is_none());
    }
}
