//! Small file-loading helper shared by the CLI subcommands, grounded on
//! `examples/kamilczerw-spatch/src/cli/query.rs`'s `load_json_file`.

use std::path::Path;

use serde_json::Value;

use jdp::error::CliError;

pub(super) fn load_json_file(path: &Path) -> Result<Value, CliError> {
    let data = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
