//! Internal error/classification taxonomy.
//!
//! `diff`/`patch`/`equal` never return a `Result`: a malformed delta entry
//! is skipped, not raised, and a guard tripping just means "no change"/
//! "cannot patch". [`CoreIssue`] is logged at the trip sites so that's
//! visible without turning those into real errors.
//!
//! [`CliError`] is the one real `thiserror` enum here, in the sense the
//! teacher uses them (see `examples/kamilczerw-spatch/src/diff/error.rs`):
//! an error surface for the CLI, which does get to fail loudly.

use std::path::PathBuf;

use thiserror::Error;

/// Why a core operation produced its `None` sentinel, or skipped a delta
/// entry. Logged only, never returned from `diff`/`patch`/`equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreIssue {
    DepthExceeded,
    MalformedDeltaEntry,
    MoveIndexOutOfRange,
}

impl std::fmt::Display for CoreIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            CoreIssue::DepthExceeded => "recursion depth guard tripped",
            CoreIssue::MalformedDeltaEntry => "delta entry did not match a known shape",
            CoreIssue::MoveIndexOutOfRange => "move operation referenced an out-of-range index",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the `jdp` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input at {path} is larger than the configured {max_input_size}-byte limit")]
    InputTooLarge { path: PathBuf, max_input_size: usize },

    #[error("left and right documents produced no delta; nothing to write")]
    NoDelta,

    #[error("delta could not be applied to the given document")]
    PatchFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn core_issue_display_is_human_readable() {
        check!(CoreIssue::DepthExceeded.to_string() == "recursion depth guard tripped");
        check!(CoreIssue::MalformedDeltaEntry.to_string() == "delta entry did not match a known shape");
    }
}
