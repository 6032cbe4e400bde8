//! # CLI Error Type
//!
//! Unified error type for the command-line front end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read plays.json ──── io::Error ─────────────► CliError::Read           │
//! │  parse JSON ───────── serde_json::Error ─────► CliError::Parse          │
//! │  compute_statement ── CoreError ─────────────► CliError::Core           │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                  stderr message + ErrorCode exit status │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use playbill_core::CoreError;
use thiserror::Error;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize statements: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("No invoice for customer: {0}")]
    CustomerNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Machine-readable error category, mapped to a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Fixture file missing or unreadable
    Io,

    /// Fixture file is not valid JSON for the expected shape
    InvalidInput,

    /// Invoice references a play the catalog lacks
    NotFound,

    /// Play genre has no amount formula
    UnknownGenre,

    /// Bad flag or environment value
    Config,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::Config => 2,
            ErrorCode::Io => 3,
            ErrorCode::InvalidInput => 4,
            ErrorCode::NotFound => 5,
            ErrorCode::UnknownGenre => 6,
        }
    }
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Read { .. } => ErrorCode::Io,
            CliError::Parse { .. } => ErrorCode::InvalidInput,
            CliError::Serialize(_) => ErrorCode::Internal,
            CliError::CustomerNotFound(_) => ErrorCode::NotFound,
            CliError::Config(_) => ErrorCode::Config,
            CliError::Core(CoreError::PlayNotFound { .. }) => ErrorCode::NotFound,
            CliError::Core(CoreError::UnknownGenre { .. }) => ErrorCode::UnknownGenre,
            CliError::Core(CoreError::TotalOverflow { .. }) => ErrorCode::InvalidInput,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        ExitCode::from(err.code().exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: CliError = CoreError::PlayNotFound {
            play_id: "macbeth".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Play not found: macbeth");

        let err: CliError = CoreError::UnknownGenre {
            genre: "history".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::UnknownGenre);
        assert_eq!(err.code().exit_code(), 6);

        let err: CliError = CoreError::TotalOverflow {
            customer: "BigCo".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_read_error_message_names_path() {
        let err = CliError::Read {
            path: PathBuf::from("missing/plays.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.code(), ErrorCode::Io);
        assert_eq!(
            err.to_string(),
            "Failed to read missing/plays.json: no such file"
        );
    }
}
