//! Array differ: head/tail trim, degenerate single-sided cases, Myers SES
//! over the remaining window, key numbering, the array-of-objects merge
//! pass, and the `_t: "a"` marker.
//!
//! Grounded on `examples/original_source/src/myers.c`'s
//! `json_myers_array_diff` (trim/degenerate/emission/merge structure) and
//! `src/diff/myers.rs` for the edit-script core.

use serde_json::{Map, Value};

use crate::delta;
use crate::diff::myers::{self, Segment};
use crate::diff::object;
use crate::equal::equal;
use crate::safety::GuardState;

/// Diffs two JSON arrays, returning a jsondiffpatch array-delta object
/// (with the `_t: "a"` marker) or `None` if there is no difference, the
/// guard tripped, or (matching `myers.c`'s final "no non-marker keys, drop
/// the object" check) the merge pass consumed every entry.
pub fn diff_array(left: &[Value], right: &[Value], strict: bool, guard: &GuardState) -> Option<Map<String, Value>> {
    // The caller (`diff_with_guard`) already entered a guard level for this
    // container; the merge pass below recurses into `object::diff_object`
    // directly, and element-level recursion happens through Myers/equal,
    // neither of which needs another level entered here.
    if left.len() == right.len() && left.iter().zip(right).all(|(a, b)| equal(a, b, strict)) {
        return None;
    }

    let mut lcp = 0;
    while lcp < left.len() && lcp < right.len() && equal(&left[lcp], &right[lcp], strict) {
        lcp += 1;
    }
    let mut lcs = 0;
    while lcs < left.len() - lcp
        && lcs < right.len() - lcp
        && equal(&left[left.len() - 1 - lcs], &right[right.len() - 1 - lcs], strict)
    {
        lcs += 1;
    }

    let a2 = &left[lcp..left.len() - lcs];
    let b2 = &right[lcp..right.len() - lcs];

    let mut obj = Map::new();

    if a2.is_empty() && b2.is_empty() {
        return None;
    }
    if a2.is_empty() {
        let mut count = lcp;
        for item in b2 {
            obj.insert(count.to_string(), delta::addition(item.clone()));
            count += 1;
        }
        merge_array_object_changes(&mut obj, strict, guard);
        obj.insert(delta::ARRAY_MARKER.to_string(), Value::String(delta::ARRAY_MARKER_VALUE.to_string()));
        return Some(obj);
    }
    if b2.is_empty() {
        let mut deleted_count = lcp;
        for item in a2 {
            obj.insert(format!("_{deleted_count}"), delta::deletion(item.clone()));
            deleted_count += 1;
        }
        merge_array_object_changes(&mut obj, strict, guard);
        obj.insert(delta::ARRAY_MARKER.to_string(), Value::String(delta::ARRAY_MARKER_VALUE.to_string()));
        return Some(obj);
    }

    let segments = myers::diff(a2, b2, strict);

    let mut count = lcp;
    let mut deleted_count = lcp;
    for segment in &segments {
        match *segment {
            Segment::Equal { .. } => {}
            Segment::Delete { a_start, len } => {
                for offset in 0..len {
                    obj.insert(format!("_{deleted_count}"), delta::deletion(a2[a_start + offset].clone()));
                    deleted_count += 1;
                }
            }
            Segment::Insert { b_start, len } => {
                for offset in 0..len {
                    obj.insert(count.to_string(), delta::addition(b2[b_start + offset].clone()));
                    count += 1;
                }
            }
        }
    }

    merge_array_object_changes(&mut obj, strict, guard);

    if obj.is_empty() {
        return None;
    }
    obj.insert(delta::ARRAY_MARKER.to_string(), Value::String(delta::ARRAY_MARKER_VALUE.to_string()));
    Some(obj)
}

/// Pairs an addition at numeric key `k` with a deletion at `_k` when both
/// carry an object, replacing the pair with a nested object subdiff (the
/// jsondiffpatch "array-of-objects merge"). Mirrors
/// `transform_array_object_changes` in `myers.c`, including its choice to
/// drop the pair entirely (rather than re-add it) when the nested diff
/// comes back empty.
fn merge_array_object_changes(obj: &mut Map<String, Value>, strict: bool, guard: &GuardState) {
    let candidate_indices: Vec<usize> = obj
        .iter()
        .filter_map(|(k, v)| {
            if k.starts_with('_') || k == delta::ARRAY_MARKER {
                return None;
            }
            let idx: usize = k.parse().ok()?;
            let arr = v.as_array()?;
            if arr.len() == 1 && arr[0].is_object() {
                Some(idx)
            } else {
                None
            }
        })
        .collect();

    for idx in candidate_indices {
        let add_key = idx.to_string();
        let del_key = format!("_{idx}");

        let Some(add_entry) = obj.get(&add_key) else { continue };
        let Some(del_entry) = obj.get(&del_key) else { continue };

        let new_obj = match add_entry.as_array().and_then(|a| a.first()) {
            Some(v) if v.is_object() => v.clone(),
            _ => continue,
        };
        let del_arr = match del_entry.as_array() {
            Some(a) if a.len() == 3 => a,
            _ => continue,
        };
        let old_obj = &del_arr[0];
        if !old_obj.is_object() {
            continue;
        }
        if del_arr[1].as_f64() != Some(0.0) || del_arr[2].as_f64() != Some(0.0) {
            continue;
        }
        let old_obj = old_obj.clone();

        let nested = object::diff_object(old_obj.as_object().unwrap(), new_obj.as_object().unwrap(), strict, guard);

        obj.remove(&del_key);
        obj.remove(&add_key);
        if let Some(nested) = nested {
            obj.insert(add_key, Value::Object(nested));
        }
    }
}
