//! Run command implementation.
//!
//! Loads env files into this process's environment, then starts the child
//! command, which inherits it.

use anyhow::{Context, Result};
use envcascade_config::EnvLoader;
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::args::LoadArgs;
use crate::error::{ExitCode, UsageError};

/// Returns the child's exit code.
pub fn run(load: &LoadArgs, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(UsageError("no command given to run".to_string()).into());
    };

    let options = super::load_options(load)?;
    EnvLoader::new()
        .with_options(options)
        .load_from_directory(&load.dir)
        .with_context(|| format!("failed to load env files from {}", load.dir.display()))?;

    debug!(program = %program, args = ?args, "spawning command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to run '{program}'"))?;

    Ok(exit_code_of(status))
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => ExitCode::GeneralError.as_i32(),
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(ExitCode::GeneralError.as_i32())
}
