//! Tree command implementation.

use anyhow::Result;
use envcascade_config::{LoadError, parse_tree};
use std::path::Path;

use crate::formatters::{TreeFormat, format_tree};

pub fn run(file: &Path, output: TreeFormat) -> Result<()> {
    let contents = std::fs::read_to_string(file).map_err(|source| LoadError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let tree = parse_tree(&contents, &file.to_string_lossy())?;
    print!("{}", format_tree(&tree, output)?);
    Ok(())
}
