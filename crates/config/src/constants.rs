//! Centralized constants for the envcascade workspace.
//!
//! This module contains names and defaults shared between the library and
//! the CLI so that the file name token and variable names are defined once.

// =============================================================================
// Discovery
// =============================================================================

/// File name searched for at every directory level during discovery.
pub const ENV_FILE_NAME: &str = ".env";

// =============================================================================
// Loader Defaults
// =============================================================================

/// Conventional variable that receives the directory of the innermost
/// discovered file when root tracking is enabled.
pub const DEFAULT_ROOT_VAR: &str = "DIR_ROOT";

// =============================================================================
// CLI Environment
// =============================================================================

/// Default for the CLI's `--prefix` flag.
pub const PREFIX_ENV: &str = "ENVCASCADE_PREFIX";

/// Default for the CLI's `--root-var` flag.
pub const ROOT_VAR_ENV: &str = "ENVCASCADE_ROOT_VAR";
