// ============================================================================
// domain/error.rs - TABLE CONSTRUCTION ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Scaffold paths cannot be empty")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the base directory: {path}")]
    ParentTraversal { path: String },

    // ========================================================================
    // Table Errors
    // ========================================================================
    #[error("Duplicate path in scaffold table: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPath => vec!["Every scaffold entry needs a file name".into()],
            Self::AbsolutePathNotAllowed { path } | Self::ParentTraversal { path } => vec![
                format!("Offending path: {path}"),
                "Scaffold paths must be relative to the base directory".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{path}' appears more than once"),
                "Each file may only be listed once per scaffold".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
