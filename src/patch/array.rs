//! Array patcher: replays an array delta's deletions, insertions,
//! replacements, nested diffs, and moves against an original array.
//!
//! The deletion/insertion/replacement/nested-diff handling is grounded on
//! `examples/original_source/src/json_diff.c`'s `patch_array` (delete
//! descending by index first, then walk insertions/replacements/nested
//! diffs in key order against the resulting working array). That C function
//! predates move support; move entries (`["", dest, 3]` keyed under `_src`)
//! are this crate's own addition, worked in at the same point a deletion
//! would otherwise land. A move is a deletion from its source index paired
//! with a re-insertion at its destination once every other removal has
//! already been applied, matching how jsondiffpatch's reference
//! implementation interleaves the two.

use serde_json::{Map, Value};

use crate::delta::{self, DeltaShape};
use crate::safety::{self, GuardState};

enum Insertion {
    Add(Value),
    Replace(Value),
    Nested(Value),
}

pub fn patch_array(original: &[Value], diff_obj: &Map<String, Value>, guard: &GuardState) -> Option<Vec<Value>> {
    let mut working: Vec<Value> = original.to_vec();

    let mut delete_indices: Vec<usize> = Vec::new();
    let mut move_sources: Vec<(usize, usize)> = Vec::new(); // (source index, dest index)
    let mut insertions: Vec<(usize, Insertion)> = Vec::new();

    for (key, entry) in diff_obj {
        if key == delta::ARRAY_MARKER {
            continue;
        }

        if let Some(src_key) = key.strip_prefix('_') {
            let Some(src_index) = safety::parse_array_index(src_key) else { continue };
            let Value::Array(items) = entry else { continue };
            match delta::classify_array(items) {
                DeltaShape::Deletion => delete_indices.push(src_index),
                DeltaShape::Move => {
                    let Some(dest_index) = items[1].as_u64().and_then(|v| usize::try_from(v).ok()) else {
                        tracing::debug!(key = %key, issue = %crate::error::CoreIssue::MoveIndexOutOfRange);
                        continue;
                    };
                    move_sources.push((src_index, dest_index));
                }
                _ => tracing::debug!(key = %key, issue = %crate::error::CoreIssue::MalformedDeltaEntry),
            }
            continue;
        }

        let Some(index) = safety::parse_array_index(key) else { continue };
        match entry {
            Value::Array(items) => match delta::classify_array(items) {
                DeltaShape::Addition => insertions.push((index, Insertion::Add(items[0].clone()))),
                DeltaShape::Change => insertions.push((index, Insertion::Replace(items[1].clone()))),
                _ => tracing::debug!(key = %key, issue = %crate::error::CoreIssue::MalformedDeltaEntry),
            },
            nested => insertions.push((index, Insertion::Nested(nested.clone()))),
        }
    }

    // Stash moved-out values before deleting, then delete every removed
    // source (deletions and move sources alike) in descending order so
    // earlier indices stay valid (mirrors `patch_array`'s descending
    // deletion pass).
    let mut moved_values: Vec<(usize, Value)> = Vec::new();
    for &(src, dest) in &move_sources {
        if let Some(v) = working.get(src) {
            moved_values.push((dest, v.clone()));
        }
    }

    let mut all_removed: Vec<usize> = delete_indices;
    all_removed.extend(move_sources.iter().map(|&(src, _)| src));
    all_removed.sort_unstable_by(|a, b| b.cmp(a));
    all_removed.dedup();
    for index in all_removed {
        if index < working.len() {
            working.remove(index);
        }
    }

    for (index, insertion) in insertions {
        apply_insertion(&mut working, index, insertion, guard)?;
    }

    moved_values.sort_by_key(|&(dest, _)| dest);
    for (dest, value) in moved_values {
        if dest >= working.len() {
            working.push(value);
        } else {
            working.insert(dest, value);
        }
    }

    Some(working)
}

/// Returns `None` only when a nested patch's depth guard tripped, in which
/// case it propagates out through `patch_array` and `patch_with_guard` to
/// the top-level call's "cannot patch" sentinel, matching the same
/// propagate-don't-paper-over rule `patch/object.rs` follows for its nested
/// members.
fn apply_insertion(working: &mut Vec<Value>, index: usize, insertion: Insertion, guard: &GuardState) -> Option<()> {
    match insertion {
        Insertion::Add(value) => {
            if index >= working.len() {
                working.push(value);
            } else {
                working.insert(index, value);
            }
        }
        Insertion::Replace(value) => {
            if index < working.len() {
                working[index] = value;
            }
        }
        Insertion::Nested(diff_value) => {
            if index < working.len() {
                let patched = super::patch_with_guard(&working[index], &diff_value, guard)?;
                working[index] = patched;
            }
        }
    }
    Some(())
}
