//! Files command implementation.

use anyhow::Result;
use envcascade_config::discover_env_files_default;
use std::path::Path;
use tracing::info;

use crate::formatters::format_files;

pub fn run(dir: &Path, onefile: bool) -> Result<()> {
    let paths = discover_env_files_default(dir, onefile);
    if paths.is_empty() {
        info!(dir = %dir.display(), "no env files found");
    }
    print!("{}", format_files(&paths));
    Ok(())
}
