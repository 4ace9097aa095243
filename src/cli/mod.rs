//! Thin CLI wrapper around the `jdp` library, in the same spirit as
//! `examples/kamilczerw-spatch/src/cli`.

pub mod diff;
pub mod equal;
mod io;
pub mod patch;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "jdp", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diff two JSON documents, printing the resulting delta.
    Diff(DiffArgs),

    /// Apply a delta to a JSON document, printing the patched result.
    Patch(PatchArgs),

    /// Check whether two JSON documents are structurally equal, without
    /// paying for a full diff.
    Equal(EqualArgs),
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the "left"/original JSON document.
    pub left: PathBuf,

    /// Path to the "right"/updated JSON document.
    pub right: PathBuf,

    /// Compare numbers within a small tolerance instead of bit-exact.
    #[arg(long)]
    pub loose: bool,

    /// Load strict_equality/max_depth/max_input_size from a JSON config
    /// file instead of flags/defaults; `--loose` still overrides the
    /// config file's `strict_equality` when both are given.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PatchArgs {
    /// Path to the original JSON document.
    pub original: PathBuf,

    /// Path to the delta produced by `jdp diff`.
    pub delta: PathBuf,
}

#[derive(Debug, Args)]
pub struct EqualArgs {
    /// Path to the "left" JSON document.
    pub left: PathBuf,

    /// Path to the "right" JSON document.
    pub right: PathBuf,

    /// Compare numbers within a small tolerance instead of bit-exact.
    #[arg(long)]
    pub loose: bool,
}
