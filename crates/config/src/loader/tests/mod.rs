//! Tests for the env loader builder.
//!
//! Responsibilities:
//! - Test string and file loading with prefix options and seed variables.
//! - Test directory discovery merge order and root-variable tracking.
//! - Test loading into the process environment.
//!
//! Does NOT handle:
//! - Statement grammar edge cases (tested in statement.rs).
//! - Guard semantics in isolation (tested in evaluator.rs).
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod process_env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
