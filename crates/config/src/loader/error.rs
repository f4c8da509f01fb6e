//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define error variants for every failure a load can surface.
//! - Carry enough context (source label, line number, path) to locate the
//!   offending input without re-reading it.
//!
//! Does NOT handle:
//! - Recovery or retries. Every variant aborts the current load.
//!
//! Invariants:
//! - A missing `.env` file is never an error; discovery returns no paths.
//! - Parse errors always carry a 1-based source line number.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing, or evaluating env files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A line matched none of the statement grammars.
    #[error("{file}:{line}: invalid line '{text}'")]
    Parse {
        file: String,
        line: usize,
        text: String,
    },

    /// The indentation structure of a file is malformed.
    #[error("{file}:{line}: {message}")]
    Structure {
        file: String,
        line: usize,
        message: String,
    },

    /// A comparison operator outside the fixed operator set.
    #[error("invalid comparison operator '{0}'")]
    InvalidOperator(String),

    /// A callback-backed store was built without every required operation.
    #[error("missing callbacks: {}", .missing.join(", "))]
    MissingCallbacks { missing: Vec<&'static str> },

    /// Failed to read an env file.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Source line number for parse and structure errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Parse { line, .. } | LoadError::Structure { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the error came from malformed file contents.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadError::Parse { .. } | LoadError::Structure { .. })
    }
}
