//! Object patcher: replays an object delta's additions, deletions,
//! replacements, and nested diffs against an original object.
//!
//! Grounded on `examples/original_source/src/json_diff.c`'s `json_patch`
//! object branch. That function tolerates a non-object `original` paired
//! with an object-shaped diff by building a fresh object purely from the
//! diff's own entries (additions land, deletions/replacements/nested diffs
//! against missing keys are no-ops) rather than failing outright. We carry
//! that same leniency here: ill-formed or mismatched input degrades
//! gracefully rather than erroring.

use serde_json::{Map, Value};

use crate::delta::{self, DeltaShape};
use crate::safety::GuardState;

pub fn patch_object(
    original: Option<&Map<String, Value>>,
    diff_obj: &Map<String, Value>,
    guard: &GuardState,
) -> Option<Map<String, Value>> {
    let mut result = original.cloned().unwrap_or_default();

    for (key, entry) in diff_obj {
        match entry {
            Value::Array(items) => match delta::classify_array(items) {
                DeltaShape::Addition => {
                    result.insert(key.clone(), items[0].clone());
                }
                DeltaShape::Change => {
                    result.insert(key.clone(), items[1].clone());
                }
                DeltaShape::Deletion => {
                    result.remove(key);
                }
                DeltaShape::Move | DeltaShape::Malformed => {
                    tracing::debug!(key = %key, issue = %crate::error::CoreIssue::MalformedDeltaEntry);
                }
            },
            nested => {
                if let Some(orig_val) = result.get(key) {
                    // `patch_with_guard` only ever returns `None` because its
                    // own depth guard tripped (every other path returns
                    // `Some`). Propagate that failure rather than silently
                    // leaving this member unpatched, so a too-deep document
                    // surfaces as the whole call's "cannot patch" sentinel
                    // instead of a partially-applied result.
                    let patched = super::patch_with_guard(orig_val, nested, guard)?;
                    result.insert(key.clone(), patched);
                }
            }
        }
    }

    Some(result)
}
