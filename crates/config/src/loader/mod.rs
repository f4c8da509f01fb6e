//! Env loading orchestration.
//!
//! Responsibilities:
//! - Provide the `EnvLoader` builder and the free `load_from_*` functions.
//! - Define `LoadOptions` and the `LoadError` taxonomy.
//!
//! Does NOT handle:
//! - Watching files for changes.
//! - Writing anything back to disk.
//!
//! Invariants / Assumptions:
//! - Discovered files are evaluated outermost-first, so the innermost file
//!   wins for keys set at several levels.
//! - The default store is the process environment.

mod builder;
mod error;
mod options;

pub use builder::{EnvLoader, load_from_directory, load_from_file, load_from_string};
pub use error::LoadError;
pub use options::LoadOptions;

#[cfg(test)]
mod tests;
