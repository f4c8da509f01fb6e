//! `$NAME` substitution inside assignment and comparison values.
//!
//! Invariants:
//! - One left-to-right pass; substituted text is never expanded again.
//! - An unset variable expands to the empty string.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::store::VariableStore;

static VAR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("variable reference pattern is valid")
});

/// Replace every `$NAME` in `raw` with the current value from `store`.
pub fn expand<S: VariableStore + ?Sized>(raw: &str, store: &S) -> String {
    if !raw.contains('$') {
        return raw.to_string();
    }
    VAR_REF_RE
        .replace_all(raw, |caps: &Captures<'_>| {
            store.get(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_expands_known_variable() {
        let store = MemoryStore::from_pairs([("dir_root", "/usr/project")]);
        assert_eq!(expand("$dir_root/data", &store), "/usr/project/data");
    }

    #[test]
    fn test_missing_variable_expands_to_empty() {
        let store = MemoryStore::new();
        assert_eq!(expand("[$nothing]", &store), "[]");
    }

    #[test]
    fn test_multiple_references_in_one_value() {
        let store = MemoryStore::from_pairs([("user", "ann"), ("host", "db")]);
        assert_eq!(expand("$user@$host:$user", &store), "ann@db:ann");
    }

    #[test]
    fn test_substituted_text_is_not_reexpanded() {
        let store = MemoryStore::from_pairs([("a", "$b"), ("b", "oops")]);
        assert_eq!(expand("x=$a", &store), "x=$b");
    }

    #[test]
    fn test_reference_name_is_greedy_over_word_characters() {
        let store = MemoryStore::from_pairs([("dir", "D"), ("dir_root", "R")]);
        assert_eq!(expand("$dir_root-$dir.x", &store), "R-D.x");
    }

    #[test]
    fn test_dollar_without_name_is_literal() {
        let store = MemoryStore::new();
        assert_eq!(expand("cost: $5 or $", &store), "cost: $5 or $");
    }
}
