use jdp::error::CliError;
use jdp::options::OptionsConfig;
use jdp::{diff, Options};

use crate::cli::{io::load_json_file, DiffArgs};

pub fn handle_diff_command(args: DiffArgs) -> Result<(), CliError> {
    let left = load_json_file(&args.left)?;
    let right = load_json_file(&args.right)?;

    let mut options = match &args.config {
        Some(path) => load_options_config(path)?.to_options(),
        None => Options::default(),
    };
    if args.loose {
        options.strict_equality = false;
    } else if args.config.is_none() {
        options.strict_equality = true;
    }

    let delta = diff(&left, &right, &options).ok_or(CliError::NoDelta)?;

    println!("{}", serde_json::to_string_pretty(&delta).expect("Value always serializes"));
    Ok(())
}

fn load_options_config(path: &std::path::Path) -> Result<OptionsConfig, CliError> {
    let data = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
