//! Myers shortest-edit-script core.
//!
//! Grounded on two sources: `examples/original_source/src/myers.c`'s
//! `json_myers_array_diff` for the exact forward-pass/backtrack/tie-break
//! behavior wire-format compatibility depends on, and
//! `examples/other_examples/8e9dcca1_tola-rs-tola-vdom__src-algo-myers.rs.rs`
//! for how to structure that algorithm idiomatically in Rust (`Edit` enum,
//! `V`-array-per-`d` trace, a `backtrack` pass over the trace).
//!
//! This module only produces the edit script as [`Segment`]s over a window
//! of two slices; head/tail trimming, degenerate single-sided cases, key
//! numbering, and the array-of-objects merge all live in
//! [`crate::diff::array`], matching the split between `json_myers_array_diff`
//! (caller) and this file's C counterpart (core loop).

use serde_json::Value;

/// One contiguous run of an edit script over a window of two slices, in
/// window-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `left[a_start..a_start+len]` and `right[b_start..b_start+len]` match.
    Equal { a_start: usize, b_start: usize, len: usize },
    /// `left[a_start..a_start+len]` was removed.
    Delete { a_start: usize, len: usize },
    /// `right[b_start..b_start+len]` was inserted.
    Insert { b_start: usize, len: usize },
}

/// Computes the Myers shortest edit script between `left` and `right`,
/// honoring `strict` equality for element comparison.
///
/// Tie-breaking matches `myers.c` exactly: on the forward pass, diagonal
/// selection prefers the neighbor that means "came from a delete" when the
/// two candidate diagonals are equally short (`V[k-1] < V[k+1]` picks
/// `k+1`, i.e. an insertion, only when the delete-side diagonal is
/// strictly worse); the backtrack pass re-derives the same preference when
/// reconstructing which predecessor diagonal produced the optimal `x`. This
/// tie-break is required for cross-implementation wire-format agreement,
/// not just an implementation detail.
pub fn diff(left: &[Value], right: &[Value], strict: bool) -> Vec<Segment> {
    let n = left.len();
    let m = right.len();

    if n == 0 && m == 0 {
        return Vec::new();
    }
    if n == 0 {
        return vec![Segment::Insert { b_start: 0, len: m }];
    }
    if m == 0 {
        return vec![Segment::Delete { a_start: 0, len: n }];
    }

    let max = n + m;
    let offset = max as isize;
    let width = 2 * max + 1;

    // trace[d] is the V array as it stood after processing depth d, needed
    // by backtrack to walk from the end back to the start.
    let mut trace: Vec<Vec<isize>> = Vec::with_capacity(max + 1);
    let mut v = vec![0isize; width];

    let mut found_at = None;
    'outer: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -(d as isize);
        while k <= d as isize {
            let idx = (k + offset) as usize;
            let down = k == -(d as isize);
            let up = k == d as isize;
            let mut x = if down || (!up && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while (x as usize) < n && (y as usize) < m && equal_at(left, right, x as usize, y as usize, strict) {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x as usize >= n && y as usize >= m {
                found_at = Some(d);
                break 'outer;
            }
            k += 2;
        }
    }

    let d_found = found_at.expect("Myers search always terminates within max steps");
    backtrack(&trace, d_found, n, m, offset)
}

fn equal_at(left: &[Value], right: &[Value], x: usize, y: usize, strict: bool) -> bool {
    crate::equal::equal(&left[x], &right[y], strict)
}

/// Walks the recorded `V` traces from `(n, m)` back to `(0, 0)`, emitting
/// segments in forward order. Mirrors `myers.c`'s backtrack loop, which
/// collects `struct seg` entries from the end and reverses them at the end;
/// here we `push` onto the front of a `Vec` via final `.reverse()` instead,
/// same net effect.
fn backtrack(trace: &[Vec<isize>], d_found: usize, n: usize, m: usize, offset: isize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut x = n as isize;
    let mut y = m as isize;

    for d in (1..=d_found).rev() {
        let v_prev = &trace[d - 1];
        let k = x - y;
        let down = k == -(d as isize);
        let up = k == d as isize;
        let idx = (k + offset) as usize;
        let prev_k = if down || (!up && v_prev[idx - 1] < v_prev[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_idx = (prev_k + offset) as usize;
        let x_prev = v_prev[prev_idx];
        let y_prev = x_prev - prev_k;

        let (x_mid, y_mid, edit) = if prev_k == k + 1 {
            (x_prev + 1, y_prev, Segment::Delete { a_start: x_prev as usize, len: 1 })
        } else {
            (x_prev, y_prev + 1, Segment::Insert { b_start: y_prev as usize, len: 1 })
        };

        let eq_len = x - x_mid;
        if eq_len > 0 {
            segments.push(Segment::Equal {
                a_start: x_mid as usize,
                b_start: y_mid as usize,
                len: eq_len as usize,
            });
        }
        segments.push(edit);

        x = x_prev;
        y = y_prev;
    }

    segments.reverse();
    segments
}
