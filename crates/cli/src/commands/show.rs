//! Show command implementation.

use anyhow::{Context, Result};
use envcascade_config::{EnvLoader, MemoryStore};
use tracing::info;

use crate::args::LoadArgs;
use crate::formatters::{OutputFormat, format_variables};

pub fn run(load: &LoadArgs, inherit_env: bool, output: OutputFormat) -> Result<()> {
    let options = super::load_options(load)?;

    let store = if inherit_env {
        MemoryStore::from_pairs(std::env::vars_os().map(|(name, value)| {
            (
                name.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    } else {
        MemoryStore::new()
    };

    let store = EnvLoader::with_store(store)
        .with_options(options)
        .load_from_directory(&load.dir)
        .with_context(|| format!("failed to load env files from {}", load.dir.display()))?;

    info!(count = store.len(), "loaded variables");
    print!("{}", format_variables(&store, output)?);
    Ok(())
}
