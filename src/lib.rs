//! `jdp`: a jsondiffpatch-wire-format-compatible structural diff/patch
//! library for `serde_json::Value` documents.
//!
//! The core surface is three functions: [`diff`], [`diff_from_text`], and
//! [`patch`], plus [`equal`] for the structural-equality primitive they're
//! built on. All three follow a sentinel-only contract: no `Result`, no
//! panics from malformed *delta* input. Callers get `None` for "no change,"
//! "cannot patch," or "a safety guard declined to keep going," and
//! distinguishing those cases is intentionally not exposed (see
//! `DESIGN.md` for the reasoning).
//!
//! ```
//! use jdp::{diff, patch, Options};
//! use serde_json::json;
//!
//! let left = json!({"a": 1, "b": [1, 2, 3]});
//! let right = json!({"a": 2, "b": [1, 3]});
//!
//! let delta = diff(&left, &right, &Options::strict()).unwrap();
//! let patched = patch(&left, &delta, &Options::strict()).unwrap();
//! assert_eq!(patched, right);
//! ```

pub mod arena;
pub mod delta;
mod diff;
pub mod equal;
pub mod error;
mod patch;
pub mod options;
pub mod safety;
pub mod value;

pub use arena::Arena;
pub use diff::{diff, diff_from_text};
pub use equal::equal;
pub use options::Options;
pub use patch::patch;
