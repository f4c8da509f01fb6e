//! Variable stores that env files are evaluated against.
//!
//! Responsibilities:
//! - Define the five-operation `VariableStore` contract.
//! - Provide the process environment store (the default), an ordered
//!   in-memory store, and a closure-backed store.
//!
//! Does NOT handle:
//! - Locking. A store is assumed to have a single writer per load.
//!
//! Invariants:
//! - `get` returns `None` for an unset variable; absence is never rendered as
//!   a placeholder string.
//! - After `clear_all()`, `names()` is empty.

mod callback;
mod memory;
mod process;

pub use callback::{CallbackStore, CallbackStoreBuilder};
pub use memory::MemoryStore;
pub use process::ProcessEnvStore;

/// Mutable name/value mapping that assignments write to and guards read from.
pub trait VariableStore {
    /// Current value of `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set `name` to `value`, replacing any previous value.
    fn set(&mut self, name: &str, value: &str);

    /// Remove `name` if present.
    fn clear(&mut self, name: &str);

    /// Remove every variable.
    fn clear_all(&mut self);

    /// Names of every variable currently set.
    fn names(&self) -> Vec<String>;
}

impl<S: VariableStore + ?Sized> VariableStore for &mut S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn clear(&mut self, name: &str) {
        (**self).clear(name)
    }

    fn clear_all(&mut self) {
        (**self).clear_all()
    }

    fn names(&self) -> Vec<String> {
        (**self).names()
    }
}

impl<S: VariableStore + ?Sized> VariableStore for Box<S> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn clear(&mut self, name: &str) {
        (**self).clear(name)
    }

    fn clear_all(&mut self) {
        (**self).clear_all()
    }

    fn names(&self) -> Vec<String> {
        (**self).names()
    }
}
