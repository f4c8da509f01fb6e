//! Variable store backed by the process environment.
//!
//! Responsibilities:
//! - Read and write variables through `std::env`.
//!
//! Invariants:
//! - The process environment lives as long as the process; it is only
//!   emptied when `clear_all()` is called explicitly.
//! - Callers must not load into this store from several threads at once.
//! - Names that are empty or contain `=` or NUL, and values that contain NUL,
//!   cannot live in the process environment. Writes of those are skipped
//!   with a warning.

use tracing::warn;

use super::VariableStore;

/// The default store: the process-wide environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvStore;

impl ProcessEnvStore {
    pub fn new() -> Self {
        Self
    }

    /// Whether `std::env::set_var` accepts this pair without panicking.
    pub fn can_hold(name: &str, value: &str) -> bool {
        !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl VariableStore for ProcessEnvStore {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&mut self, name: &str, value: &str) {
        if !Self::can_hold(name, value) {
            warn!(
                name = ?name,
                value = ?value,
                "skipping variable the process environment cannot hold"
            );
            return;
        }
        // SAFETY: loads are single-threaded; concurrent use is documented as
        // the caller's responsibility.
        unsafe {
            std::env::set_var(name, value);
        }
    }

    fn clear(&mut self, name: &str) {
        if !Self::can_hold(name, "") {
            return;
        }
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(name);
        }
    }

    fn clear_all(&mut self) {
        for name in self.names() {
            self.clear(&name);
        }
    }

    fn names(&self) -> Vec<String> {
        std::env::vars_os()
            .map(|(name, _)| name.to_string_lossy().into_owned())
            .collect()
    }
}
