//! Shared test utilities for envcascade integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Build small `.env` trees on disk.
//!
//! Invariants / Assumptions:
//! - `ENVCASCADE_*` defaults and `RUST_LOG` from the host never reach the binary.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a hermetic `envcascade` command for integration testing.
pub fn envcascade_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envcascade");

    // Clear potential host leakage
    cmd.env_remove("ENVCASCADE_PREFIX")
        .env_remove("ENVCASCADE_ROOT_VAR")
        .env_remove("RUST_LOG");

    cmd
}

/// A project tree with `root/.env` and `root/sub/.env`.
#[allow(dead_code)]
pub struct Cascade {
    pub temp: TempDir,
    pub root: PathBuf,
    pub sub: PathBuf,
}

/// Builds the standard development/color/shade cascade.
#[allow(dead_code)]
pub fn cascade() -> Cascade {
    let temp = TempDir::new().expect("create temp dir");
    let root = temp.path().canonicalize().expect("canonical temp dir");
    let sub = root.join("sub");
    fs::create_dir_all(&sub).expect("create sub dir");
    write_env(
        &root,
        "development = yes\nif development\n\tcolor = magenta\nif not development\n\tcolor = azure\n",
    );
    write_env(&sub, "if color is magenta\n\tshade = light\n");
    Cascade { temp, root, sub }
}

/// Writes `contents` to `dir/.env`.
#[allow(dead_code)]
pub fn write_env(dir: &Path, contents: &str) {
    fs::write(dir.join(".env"), contents).expect("write .env");
}
