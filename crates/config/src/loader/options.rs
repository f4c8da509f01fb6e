//! Options shared by every load entry point.

/// Controls which assignments are applied and how discovery behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Only assignments whose key starts with this prefix are applied.
    pub prefix: Option<String>,
    /// Remove `prefix` from keys before storing them.
    pub strip_prefix: bool,
    /// Stop discovery at the first `.env` file found.
    pub onefile: bool,
    /// Variables set, in order, before any file is evaluated.
    pub initial_variables: Vec<(String, String)>,
    /// Variable that receives the directory of the innermost discovered file,
    /// unless the store already has a value for it.
    pub root_var: Option<String>,
    /// Empty the store before seeding and loading.
    pub reset_store: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key an assignment should be stored under, or `None` if the prefix
    /// filter excludes it. Stripping a prefix that is the whole key leaves
    /// nothing to store under, so that key is excluded too.
    pub fn effective_key<'k>(&self, key: &'k str) -> Option<&'k str> {
        match self.prefix.as_deref() {
            None | Some("") => Some(key),
            Some(prefix) => {
                let rest = key.strip_prefix(prefix)?;
                match (self.strip_prefix, rest.is_empty()) {
                    (false, _) => Some(key),
                    (true, false) => Some(rest),
                    (true, true) => None,
                }
            }
        }
    }
}
