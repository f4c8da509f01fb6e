//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadError` variants and usage errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - The exit status of a child started by `run`, which is passed through as-is.
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use envcascade_config::LoadError;
use thiserror::Error;

/// Structured exit codes for envcascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Parse error - an env file has an invalid line or bad indentation.
    ///
    /// Scripts should fix the file and not retry.
    ParseError = 2,

    /// I/O error - an env file or the command to run could not be accessed.
    IoError = 3,

    /// Usage error - bad arguments such as a malformed `--set` pair.
    UsageError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Parse { .. } | LoadError::Structure { .. } => ExitCode::ParseError,
            LoadError::Io { .. } => ExitCode::IoError,
            LoadError::InvalidOperator(_) => ExitCode::ParseError,
            LoadError::MissingCallbacks { .. } => ExitCode::GeneralError,
        }
    }
}

/// Invalid command-line input detected after clap parsing.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if cause.is::<UsageError>() {
                return ExitCode::UsageError;
            }
            if cause.is::<std::io::Error>() {
                return ExitCode::IoError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ParseError.as_i32(), 2);
        assert_eq!(ExitCode::IoError.as_i32(), 3);
        assert_eq!(ExitCode::UsageError.as_i32(), 4);
    }

    #[test]
    fn test_parse_errors_map_to_parse_exit_code() {
        let err = LoadError::Parse {
            file: ".env".to_string(),
            line: 3,
            text: "??? garbage".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ParseError);

        let err = LoadError::Structure {
            file: ".env".to_string(),
            line: 2,
            message: "unexpected indentation".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ParseError);
    }

    #[test]
    fn test_load_error_found_through_context() {
        let err = anyhow::Error::new(LoadError::Io {
            path: PathBuf::from("/srv/app/.env"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
        .context("failed to load env files");
        assert_eq!(err.exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_usage_error_maps_to_usage_exit_code() {
        let err: anyhow::Error = UsageError("invalid --set 'novalue'".to_string()).into();
        assert_eq!(err.exit_code(), ExitCode::UsageError);
    }

    #[test]
    fn test_plain_io_error_maps_to_io_exit_code() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        let err = result.context("failed to spawn").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
