//! Error types and exit codes for gitview-engine

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for gitview-engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Repository unreadable: {path}")]
    RepoUnreadable { path: String },

    #[error("Git error: {message}")]
    Git { message: String },

    #[error("Malformed staging-index line: {line:?}")]
    IndexParse { line: String },

    #[error("Watch error: {message}")]
    Watch { message: String },

    #[error("Encoding error: {message}")]
    Encode { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: Repository unreadable / IO error
    /// - 3: Staging-index parse failure
    /// - 4: Watch or encoding failure
    /// - 5: Git subprocess error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::RepoUnreadable { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::IndexParse { .. } => ExitCode::from(3),
            Self::Watch { .. } => ExitCode::from(4),
            Self::Encode { .. } => ExitCode::from(4),
            Self::Git { .. } => ExitCode::from(5),
        }
    }
}

/// Result type alias for gitview-engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
