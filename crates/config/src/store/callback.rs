//! Closure-backed variable store.
//!
//! Lets a caller plug arbitrary storage in without defining a type, as long
//! as all five operations are supplied. Conformance is checked eagerly in
//! `CallbackStoreBuilder::build`, before any evaluation starts.

use std::fmt;

use super::VariableStore;
use crate::loader::LoadError;

type GetFn = Box<dyn Fn(&str) -> Option<String>>;
type SetFn = Box<dyn FnMut(&str, &str)>;
type ClearFn = Box<dyn FnMut(&str)>;
type ClearAllFn = Box<dyn FnMut()>;
type NamesFn = Box<dyn Fn() -> Vec<String>>;

/// A store whose five operations are caller-supplied closures.
pub struct CallbackStore {
    get: GetFn,
    set: SetFn,
    clear: ClearFn,
    clear_all: ClearAllFn,
    names: NamesFn,
}

impl CallbackStore {
    pub fn builder() -> CallbackStoreBuilder {
        CallbackStoreBuilder::default()
    }
}

impl fmt::Debug for CallbackStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackStore").finish_non_exhaustive()
    }
}

impl VariableStore for CallbackStore {
    fn get(&self, name: &str) -> Option<String> {
        (self.get)(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        (self.set)(name, value)
    }

    fn clear(&mut self, name: &str) {
        (self.clear)(name)
    }

    fn clear_all(&mut self) {
        (self.clear_all)()
    }

    fn names(&self) -> Vec<String> {
        (self.names)()
    }
}

/// Builder for `CallbackStore`.
#[derive(Default)]
pub struct CallbackStoreBuilder {
    get: Option<GetFn>,
    set: Option<SetFn>,
    clear: Option<ClearFn>,
    clear_all: Option<ClearAllFn>,
    names: Option<NamesFn>,
}

impl CallbackStoreBuilder {
    pub fn get(mut self, f: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.get = Some(Box::new(f));
        self
    }

    pub fn set(mut self, f: impl FnMut(&str, &str) + 'static) -> Self {
        self.set = Some(Box::new(f));
        self
    }

    pub fn clear(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.clear = Some(Box::new(f));
        self
    }

    pub fn clear_all(mut self, f: impl FnMut() + 'static) -> Self {
        self.clear_all = Some(Box::new(f));
        self
    }

    pub fn names(mut self, f: impl Fn() -> Vec<String> + 'static) -> Self {
        self.names = Some(Box::new(f));
        self
    }

    /// Names of the operations that have not been supplied, in canonical order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("get", self.get.is_none()),
            ("set", self.set.is_none()),
            ("clear", self.clear.is_none()),
            ("clear_all", self.clear_all.is_none()),
            ("names", self.names.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Build the store, failing with every missing operation listed at once.
    pub fn build(self) -> Result<CallbackStore, LoadError> {
        match (self.get, self.set, self.clear, self.clear_all, self.names) {
            (Some(get), Some(set), Some(clear), Some(clear_all), Some(names)) => {
                Ok(CallbackStore {
                    get,
                    set,
                    clear,
                    clear_all,
                    names,
                })
            }
            (get, set, clear, clear_all, names) => {
                let missing = CallbackStoreBuilder {
                    get,
                    set,
                    clear,
                    clear_all,
                    names,
                }
                .missing();
                Err(LoadError::MissingCallbacks { missing })
            }
        }
    }
}
