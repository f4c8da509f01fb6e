//! Layered `.env` loading for envcascade.
//!
//! This crate discovers `.env` files from a directory up to the filesystem
//! root, parses their indentation-nested statements, and evaluates them
//! outermost-first into a pluggable variable store.

pub mod compare;
pub mod constants;
pub mod discovery;
pub mod evaluator;
pub mod expand;
mod loader;
pub mod parser;
pub mod statement;
pub mod store;

pub use compare::compare;
pub use discovery::{discover_env_files, discover_env_files_default};
pub use evaluator::{Evaluator, evaluate};
pub use expand::expand;
pub use loader::{
    EnvLoader, LoadError, LoadOptions, load_from_directory, load_from_file, load_from_string,
};
pub use parser::{TreeNode, parse_tree};
pub use statement::{Operator, Statement, classify};
pub use store::{CallbackStore, CallbackStoreBuilder, MemoryStore, ProcessEnvStore, VariableStore};
