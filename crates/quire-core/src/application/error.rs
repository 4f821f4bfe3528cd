//! Application layer errors.
//!
//! These errors represent failures touching the filesystem, not malformed
//! tables. Table errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materialising a scaffold.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A directory could not be created (permission denied, a file in the way).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// File content could not be persisted.
    #[error("Write error at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to create directory: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file sits where a directory is expected".into(),
            ],
            Self::WriteError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["This appears to be a bug in Quire".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }

    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FilesystemError { path, .. } | Self::WriteError { path, .. } => Some(path),
            Self::LockPoisoned => None,
        }
    }
}
