//! Env loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` over any `VariableStore`.
//! - Seed the store, discover files, and evaluate them outermost-first so
//!   inner directories override outer ones.
//!
//! Does NOT handle:
//! - Statement grammar (see `statement.rs`) or tree shape (see `parser.rs`).
//! - Guard semantics (see `evaluator.rs`).
//!
//! Invariants / Assumptions:
//! - Initial variables are set before any file is evaluated.
//! - The store is only cleared when `reset_store` is requested.
//! - Each file is parsed completely before it is evaluated; the next file is
//!   not read until the previous one has been applied.
//! - A failed load leaves earlier writes in the store.

use std::path::Path;

use tracing::debug;

use super::error::LoadError;
use super::options::LoadOptions;
use crate::discovery::discover_env_files_default;
use crate::evaluator::Evaluator;
use crate::parser::parse_tree;
use crate::store::{ProcessEnvStore, VariableStore};

/// Loads env files into a store.
pub struct EnvLoader<S: VariableStore = ProcessEnvStore> {
    store: S,
    options: LoadOptions,
}

impl Default for EnvLoader<ProcessEnvStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader<ProcessEnvStore> {
    /// Create a loader that writes to the process environment.
    pub fn new() -> Self {
        Self::with_store(ProcessEnvStore)
    }
}

impl<S: VariableStore> EnvLoader<S> {
    /// Create a loader that writes to `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            options: LoadOptions::default(),
        }
    }

    /// Replace all options at once.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Only apply assignments whose key starts with `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    /// Remove the prefix from keys before storing them.
    pub fn with_strip_prefix(mut self, strip: bool) -> Self {
        self.options.strip_prefix = strip;
        self
    }

    /// Stop discovery at the first file found.
    pub fn with_onefile(mut self, onefile: bool) -> Self {
        self.options.onefile = onefile;
        self
    }

    /// Add a variable to seed the store with before loading.
    pub fn with_initial_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .initial_variables
            .push((name.into(), value.into()));
        self
    }

    /// Add several seed variables, in order.
    pub fn with_initial_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options
            .initial_variables
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Record the innermost discovered directory under `name`.
    pub fn with_root_var(mut self, name: impl Into<String>) -> Self {
        self.options.root_var = Some(name.into());
        self
    }

    /// Empty the store before loading.
    pub fn with_reset_store(mut self, reset: bool) -> Self {
        self.options.reset_store = reset;
        self
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Discover `.env` files from `dir` upward and evaluate them root-first.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if a discovered file cannot be read, and
    /// `LoadError::Parse`/`LoadError::Structure` for malformed contents.
    /// Finding no files at all is not an error.
    pub fn load_from_directory(mut self, dir: impl AsRef<Path>) -> Result<S, LoadError> {
        let dir = dir.as_ref();
        self.prepare_store();

        let paths = discover_env_files_default(dir, self.options.onefile);
        if paths.is_empty() {
            debug!(dir = %dir.display(), "no env files found");
            return Ok(self.store);
        }

        if let Some(root_var) = &self.options.root_var
            && let Some(root_dir) = paths.last().and_then(|innermost| innermost.parent())
            && self.store.get(root_var).is_none()
        {
            let root = root_dir.to_string_lossy();
            debug!(var = %root_var, root = %root, "setting root variable");
            self.store.set(root_var, &root);
        }

        for path in &paths {
            self.apply_file(path)?;
        }
        Ok(self.store)
    }

    /// Evaluate a single file.
    pub fn load_from_file(mut self, path: impl AsRef<Path>) -> Result<S, LoadError> {
        self.prepare_store();
        self.apply_file(path.as_ref())?;
        Ok(self.store)
    }

    /// Evaluate `contents` directly; `source` labels error messages.
    pub fn load_from_string(mut self, contents: &str, source: &str) -> Result<S, LoadError> {
        self.prepare_store();
        self.apply_text(contents, source)?;
        Ok(self.store)
    }

    fn prepare_store(&mut self) {
        if self.options.reset_store {
            self.store.clear_all();
        }
        for (name, value) in &self.options.initial_variables {
            self.store.set(name, value);
        }
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), LoadError> {
        debug!(path = %path.display(), "loading env file");
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_text(&contents, &path.to_string_lossy())
    }

    fn apply_text(&mut self, contents: &str, source: &str) -> Result<(), LoadError> {
        let tree = parse_tree(contents, source)?;
        Evaluator::new(&mut self.store, &self.options).evaluate(&tree)
    }
}

/// Load `.env` files from `dir` upward into the process environment.
pub fn load_from_directory(
    dir: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<ProcessEnvStore, LoadError> {
    EnvLoader::new().with_options(options).load_from_directory(dir)
}

/// Load a single file into the process environment.
pub fn load_from_file(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<ProcessEnvStore, LoadError> {
    EnvLoader::new().with_options(options).load_from_file(path)
}

/// Load env text into the process environment.
pub fn load_from_string(
    contents: &str,
    options: LoadOptions,
    source: &str,
) -> Result<ProcessEnvStore, LoadError> {
    EnvLoader::new()
        .with_options(options)
        .load_from_string(contents, source)
}
