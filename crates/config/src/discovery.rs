//! Directory-chain discovery of env files.
//!
//! Responsibilities:
//! - Search the start directory and every ancestor up to the filesystem root
//!   for a file with a fixed name.
//! - Return matches in merge order: outermost (closest to the root) first,
//!   innermost (the start directory) last.
//!
//! Does NOT handle:
//! - Reading or parsing the files (see `loader/`).
//!
//! Invariants:
//! - Each directory is examined at most once.
//! - No match anywhere is an empty result, not an error.
//! - With `onefile`, only the innermost match is returned.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::ENV_FILE_NAME;

/// Find every `file_name` from `start` upward, ordered root-first.
pub fn discover_env_files(start: &Path, file_name: &str, onefile: bool) -> Vec<PathBuf> {
    let start = resolve_start(start);
    let mut found = Vec::new();

    for dir in start.ancestors() {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found env file");
            found.push(candidate);
            if onefile {
                break;
            }
        }
    }

    found.reverse();
    found
}

/// `discover_env_files` with the standard `.env` file name.
pub fn discover_env_files_default(start: &Path, onefile: bool) -> Vec<PathBuf> {
    discover_env_files(start, ENV_FILE_NAME, onefile)
}

/// Canonicalize when possible so `..` segments do not revisit directories;
/// otherwise fall back to an absolute path.
fn resolve_start(start: &Path) -> PathBuf {
    std::fs::canonicalize(start)
        .or_else(|_| std::path::absolute(start))
        .unwrap_or_else(|_| start.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Builds `root/.env`, `root/test/.env`, and `root/test/subdir/.env`.
    fn layered() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        let subdir = root.join("test").join("subdir");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(root.join(".env"), "value = 1\n").unwrap();
        fs::write(root.join("test").join(".env"), "value = 2\n").unwrap();
        fs::write(subdir.join(".env"), "value = 3\n").unwrap();
        (temp, root)
    }

    #[test]
    fn test_matches_are_ordered_outermost_first() {
        let (_temp, root) = layered();
        let start = root.join("test").join("subdir");

        let found = discover_env_files(&start, ".env", false);
        let ours: Vec<_> = found.iter().filter(|p| p.starts_with(&root)).collect();

        assert_eq!(
            ours,
            vec![
                &root.join(".env"),
                &root.join("test").join(".env"),
                &root.join("test").join("subdir").join(".env"),
            ]
        );
        assert_eq!(found.last(), Some(&start.join(".env")));
    }

    #[test]
    fn test_onefile_returns_only_innermost_match() {
        let (_temp, root) = layered();
        let start = root.join("test");

        let found = discover_env_files(&start, ".env", true);
        assert_eq!(found, vec![root.join("test").join(".env")]);
    }

    #[test]
    fn test_directories_without_a_file_are_skipped() {
        let (_temp, root) = layered();
        let deeper = root.join("test").join("subdir").join("a").join("b");
        fs::create_dir_all(&deeper).unwrap();

        let found = discover_env_files(&deeper, ".env", true);
        assert_eq!(found, vec![root.join("test").join("subdir").join(".env")]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let temp = TempDir::new().unwrap();
        let found = discover_env_files(temp.path(), ".envcascade-never-present", false);
        assert!(found.is_empty());
    }

    #[test]
    fn test_directory_named_like_the_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        fs::create_dir(root.join(".envdir-marker")).unwrap();

        let found = discover_env_files(&root, ".envdir-marker", false);
        assert!(found.is_empty());
    }

    #[test]
    fn test_dot_dot_segments_do_not_duplicate_levels() {
        let (_temp, root) = layered();
        let start = root.join("test").join("subdir").join("..");

        let found = discover_env_files(&start, ".env", false);
        let ours: Vec<_> = found.iter().filter(|p| p.starts_with(&root)).collect();
        assert_eq!(ours, vec![&root.join(".env"), &root.join("test").join(".env")]);
    }
}
