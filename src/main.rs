mod cli;

use clap::Parser;
use cli::Cli;
use jdp::error::CliError;

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.cmd {
        cli::Command::Diff(args) => cli::diff::handle_diff_command(args)?,
        cli::Command::Patch(args) => cli::patch::handle_patch_command(args)?,
        cli::Command::Equal(args) => cli::equal::handle_equal_command(args)?,
    }

    Ok(())
}
