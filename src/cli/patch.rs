use jdp::error::CliError;
use jdp::{patch, Options};

use crate::cli::{io::load_json_file, PatchArgs};

pub fn handle_patch_command(args: PatchArgs) -> Result<(), CliError> {
    let original = load_json_file(&args.original)?;
    let delta = load_json_file(&args.delta)?;

    let patched = patch(&original, &delta, &Options::strict()).ok_or(CliError::PatchFailed)?;

    println!("{}", serde_json::to_string_pretty(&patched).expect("Value always serializes"));
    Ok(())
}
