//! envcascade - command-line front end for layered `.env` loading.
//!
//! Responsibilities:
//! - Parse command-line arguments and `ENVCASCADE_*` environment defaults.
//! - Initialize logging to stderr.
//! - Run the selected command and turn its outcome into an exit code.
//!
//! Does NOT handle:
//! - Discovery, parsing, or evaluation of env files (see `crates/config`).
//!
//! Invariants:
//! - Results go to stdout; logs and errors go to stderr.
//! - Argument errors exit with `ExitCode::UsageError`.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::UsageError
            } else {
                ExitCode::Success
            };
            // Help and version output go through clap's own printer.
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    init_logging(cli.verbose, cli.quiet);

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins when set; otherwise the level follows `-v`/`-q`.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
