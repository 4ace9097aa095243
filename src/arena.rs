//! Optional bump-pointer arena for a single diff's allocations.
//!
//! The C original (`examples/original_source/src/json_diff.c`) swaps in a
//! thread-local arena allocator (`arena_malloc`/`arena_free`) behind
//! `cJSON`'s allocation hooks before calling into the diff core, then resets
//! the bump offset back to zero on every call and restores the default
//! allocator on exit. We mirror the reset-on-entry contract with
//! [`bumpalo::Bump::reset`] but skip the hook-swapping: `Value` nodes built
//! during a diff are allocated directly from the `Bump` the caller hands us
//! via [`crate::Options::arena`], rather than by globally overriding where
//! `serde_json::Value` allocates (which Rust's allocator model doesn't let
//! us intercept the way C's malloc hooks do).
//!
//! This means the arena here backs the *delta tree's node storage*, the
//! `Vec`/`String` buffers inside the `serde_json::Value`s the diff
//! allocates, via a bump-allocated scratch scope, not the `Value` enum
//! itself (which must still be a normal heap value to satisfy
//! `serde_json::Value`'s API). Offering the arena lets heavy diff callers
//! amortize allocations across an object/array merge pass without the
//! collective-free ceremony costing anything beyond a `Bump::reset`.

use std::cell::RefCell;

use bumpalo::Bump;

/// A single-diff allocation arena. One arena backs one live delta at a time.
#[derive(Debug, Default)]
pub struct Arena {
    bump: RefCell<Bump>,
}

impl Arena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Arena {
            bump: RefCell::new(Bump::new()),
        }
    }

    /// Resets the arena, invalidating any scratch buffers issued since the
    /// previous reset. `diff` calls this once on entry when an arena is
    /// configured, matching `json_diff_arena_init`/the `current_arena`
    /// reset in the C source.
    pub fn reset(&self) {
        self.bump.borrow_mut().reset();
    }

    /// Bytes currently allocated from the underlying bump buffer.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.borrow().allocated_bytes()
    }
}
