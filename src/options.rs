//! Diff/patch configuration.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;

/// Recursion depth at which [`crate::diff`]/[`crate::patch`] refuse to
/// continue and return their "no change"/"cannot patch" sentinel.
pub const DEFAULT_MAX_JSON_DEPTH: usize = 1024;

/// Upper bound, in bytes, on a JSON text payload accepted by
/// [`crate::diff_from_text`].
pub const DEFAULT_MAX_JSON_INPUT_SIZE: usize = 1024 * 1024;

/// Configuration record controlling a single `diff` call.
#[derive(Debug)]
pub struct Options<'arena> {
    /// If `true`, numbers compare bit-exact; if `false`, tolerance 1e-9.
    /// Default `true`.
    pub strict_equality: bool,
    /// Maximum recursion depth before the depth guard trips. Default
    /// [`DEFAULT_MAX_JSON_DEPTH`].
    pub max_depth: usize,
    /// Maximum accepted input size in bytes for [`crate::diff_from_text`].
    /// Default [`DEFAULT_MAX_JSON_INPUT_SIZE`].
    pub max_input_size: usize,
    /// Optional allocation arena for the resulting delta. When present,
    /// reset at the start of every `diff` call that borrows it.
    pub arena: Option<&'arena Arena>,
}

impl Options<'_> {
    /// `strict_equality = true`, default depth/size limits, no arena.
    pub fn strict() -> Self {
        Options {
            strict_equality: true,
            ..Default::default()
        }
    }

    /// `strict_equality = false` (1e-9 tolerance), default depth/size
    /// limits, no arena.
    pub fn loose() -> Self {
        Options {
            strict_equality: false,
            ..Default::default()
        }
    }
}

impl<'arena> Default for Options<'arena> {
    fn default() -> Self {
        Options {
            strict_equality: true,
            max_depth: DEFAULT_MAX_JSON_DEPTH,
            max_input_size: DEFAULT_MAX_JSON_INPUT_SIZE,
            arena: None,
        }
    }
}

/// The serializable subset of [`Options`], everything except the arena
/// borrow, which has no on-disk representation. Lets the CLI load
/// `strict_equality`/`max_depth`/`max_input_size` from a JSON config file
/// instead of only from flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    pub strict_equality: bool,
    pub max_depth: usize,
    pub max_input_size: usize,
}

impl OptionsConfig {
    /// Builds a borrow-free [`Options`] from this config; `arena` is always
    /// `None` since a config file has no way to name one.
    pub fn to_options(self) -> Options<'static> {
        Options {
            strict_equality: self.strict_equality,
            max_depth: self.max_depth,
            max_input_size: self.max_input_size,
            arena: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        let opts = Options::default();
        OptionsConfig {
            strict_equality: opts.strict_equality,
            max_depth: opts.max_depth,
            max_input_size: opts.max_input_size,
        }
    }
}
