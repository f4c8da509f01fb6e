//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup or process exit (see `main()`).
//!
//! Invariants:
//! - Returns the process exit code on success; for `run` this is the child's.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Show {
            load,
            inherit_env,
            output,
        } => commands::show::run(&load, inherit_env, output)?,
        Commands::Files { dir, onefile } => commands::files::run(&dir, onefile)?,
        Commands::Tree { file, output } => commands::tree::run(&file, output)?,
        Commands::Run { load, command } => return commands::run::run(&load, &command),
    }

    Ok(ExitCode::Success.as_i32())
}
