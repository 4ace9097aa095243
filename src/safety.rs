//! Safety layer: recursion-depth guard, input-size guard, index-range
//! checks.
//!
//! The C original keeps the depth counter in a `__thread` global (mirroring
//! the thread-local arena hook in
//! `examples/original_source/src/json_diff.c`). TLS is heavier than it
//! needs to be here, so `GuardState` is threaded through `diff`/`patch` by
//! shared reference instead: every public entry point allocates a fresh
//! one. Recursive calls all hold the same `&GuardState`, so the counter
//! itself needs interior mutability rather than the exclusive-borrow-per-
//! token shape an RAII guard would otherwise want.

use std::cell::Cell;

/// Tracks recursion depth for one `diff`/`patch` call tree.
#[derive(Debug)]
pub struct GuardState {
    depth: Cell<usize>,
    max_depth: usize,
}

/// Scope guard returned by [`GuardState::enter`]; dropping it decrements the
/// depth counter, so every exit path (including early returns via `?`)
/// restores the counter correctly.
pub struct DepthScope<'a> {
    guard: &'a GuardState,
}

impl Drop for DepthScope<'_> {
    fn drop(&mut self) {
        self.guard.depth.set(self.guard.depth.get() - 1);
    }
}

impl GuardState {
    /// Builds a guard that trips once recursion exceeds `max_depth`.
    pub fn new(max_depth: usize) -> Self {
        GuardState {
            depth: Cell::new(0),
            max_depth,
        }
    }

    /// Enters one recursion level. Returns `None` when the guard has
    /// tripped (depth would exceed `max_depth`); callers must treat that as
    /// "return the no-change/cannot-patch sentinel for this subtree."
    /// Returns `Some(scope)` otherwise; dropping the scope decrements the
    /// depth, covering every exit path, including the recursive calls
    /// nested inside it, which borrow the same `GuardState` immutably and
    /// enter their own scopes.
    pub fn enter(&self) -> Option<DepthScope<'_>> {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            tracing::debug!(depth, max_depth = self.max_depth, issue = %crate::error::CoreIssue::DepthExceeded);
            return None;
        }
        self.depth.set(depth + 1);
        Some(DepthScope { guard: self })
    }

    /// Current recursion depth, mostly useful for logging/diagnostics.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

/// Rejects a text payload larger than `max_input_size` bytes.
pub fn check_input_size(bytes: &[u8], max_input_size: usize) -> bool {
    let ok = bytes.len() <= max_input_size;
    if !ok {
        tracing::warn!(len = bytes.len(), max_input_size, "input size guard tripped");
    }
    ok
}

/// Parses a delta array-entry key as a non-negative, in-range array index.
/// Overflow, trailing junk, negative values, and values exceeding the
/// 32-bit signed range are all rejected; rejected entries are ignored, not
/// fatal.
///
/// `key` is the raw key text with any leading `_` already stripped by the
/// caller (callers distinguish deletion/move keys by the `_` prefix before
/// calling this).
pub fn parse_array_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        // no leading zeros beyond "0"; a key like "01" cannot have been
        // emitted by a compliant diff and is treated as ill-formed input
        // here too.
        return None;
    }
    let value: i64 = key.parse().ok()?;
    if value > i32::MAX as i64 {
        return None;
    }
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn guard_allows_up_to_max_depth() {
        let guard = GuardState::new(2);
        let outer = guard.enter();
        check!(outer.is_some());
        let inner = guard.enter();
        check!(inner.is_some());
        check!(guard.depth() == 2);
        drop(inner);
        check!(guard.depth() == 1);
        drop(outer);
        check!(guard.depth() == 0);
    }

    #[test]
    fn guard_trips_past_max_depth() {
        let guard = GuardState::new(1);
        let outer = guard.enter();
        check!(outer.is_some());
        check!(guard.enter().is_none());
        drop(outer);
        // after the outer scope drops, depth is back to 0 and entry succeeds again
        check!(guard.enter().is_some());
    }

    #[test]
    fn index_parsing_rejects_overflow_and_junk() {
        check!(parse_array_index("0") == Some(0));
        check!(parse_array_index("42") == Some(42));
        check!(parse_array_index("") == None);
        check!(parse_array_index("-1") == None);
        check!(parse_array_index("01") == None);
        check!(parse_array_index("4a") == None);
        check!(parse_array_index("2147483647") == Some(2147483647));
        check!(parse_array_index("2147483648") == None);
        check!(parse_array_index("99999999999999999999") == None);
    }

    #[test]
    fn input_size_guard_rejects_oversized_payloads() {
        check!(check_input_size(&[0u8; 10], 10));
        check!(!check_input_size(&[0u8; 11], 10));
    }
}
