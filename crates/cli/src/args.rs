//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read loader defaults from `ENVCASCADE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate `--set` pairs (see `commands::load_options`).

use clap::{ArgAction, Args, Parser, Subcommand};
use envcascade_config::constants::{DEFAULT_ROOT_VAR, PREFIX_ENV, ROOT_VAR_ENV};
use std::path::PathBuf;

use crate::formatters::{OutputFormat, TreeFormat};

#[derive(Parser, Debug)]
#[command(name = "envcascade")]
#[command(about = "Load layered, conditional .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envcascade show\n  envcascade show ./service --prefix app. --strip-prefix -o json\n  envcascade files --onefile\n  envcascade tree .env\n  envcascade run -- cargo test\n"
)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load env files and print the resulting variables
    Show {
        #[command(flatten)]
        load: LoadArgs,

        /// Seed the store with the current process environment
        #[arg(long)]
        inherit_env: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// List discovered env files in merge order
    Files {
        /// Directory to start searching from
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Only report the innermost file
        #[arg(long)]
        onefile: bool,
    },

    /// Parse a single file and print its statement tree
    Tree {
        /// File to parse
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Text)]
        output: TreeFormat,
    },

    /// Load env files into the environment and run a command
    Run {
        #[command(flatten)]
        load: LoadArgs,

        /// Command and arguments to run
        #[arg(last = true, required = true, value_name = "CMD")]
        command: Vec<String>,
    },
}

/// Flags shared by every command that performs a load.
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Directory to start searching from
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Only apply assignments whose key starts with this prefix
    #[arg(long, env = PREFIX_ENV)]
    pub prefix: Option<String>,

    /// Remove the prefix from stored keys
    #[arg(long, requires = "prefix")]
    pub strip_prefix: bool,

    /// Stop at the innermost env file
    #[arg(long)]
    pub onefile: bool,

    /// Seed a variable before loading (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Variable that receives the innermost env file's directory
    #[arg(long, env = ROOT_VAR_ENV, default_value = DEFAULT_ROOT_VAR)]
    pub root_var: String,

    /// Do not set a root variable
    #[arg(long)]
    pub no_root_var: bool,
}
