use jdp::error::CliError;
use jdp::equal;

use crate::cli::{io::load_json_file, EqualArgs};

/// Prints `true`/`false` and exits non-zero on `false`, following the same
/// convention as `cmp`/`diff -q`: a caller scripting around this CLI can
/// check the exit code instead of parsing output.
pub fn handle_equal_command(args: EqualArgs) -> Result<(), CliError> {
    let left = load_json_file(&args.left)?;
    let right = load_json_file(&args.right)?;

    let are_equal = equal(&left, &right, !args.loose);
    println!("{are_equal}");

    if !are_equal {
        std::process::exit(1);
    }
    Ok(())
}
