//! Ordered in-memory variable store.

use std::collections::HashMap;

use super::VariableStore;

/// In-memory store that remembers first-insertion order for `names()`.
///
/// Re-setting an existing name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    order: Vec<String>,
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `pairs`, in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut store = Self::new();
        for (name, value) in pairs {
            store.set(name.as_ref(), value.as_ref());
        }
        store
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|name| {
            self.values
                .get(name)
                .map(|value| (name.as_str(), value.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl VariableStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        if self
            .values
            .insert(name.to_string(), value.to_string())
            .is_none()
        {
            self.order.push(name.to_string());
        }
    }

    fn clear(&mut self, name: &str) {
        if self.values.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    fn clear_all(&mut self) {
        self.values.clear();
        self.order.clear();
    }

    fn names(&self) -> Vec<String> {
        self.order.clone()
    }
}
