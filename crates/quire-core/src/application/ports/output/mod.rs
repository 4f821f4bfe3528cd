//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `quire-adapters` crate provides implementations.

use std::path::Path;

use crate::error::QuireResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `quire_adapters::filesystem::LocalFilesystem` (production)
/// - `quire_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Directory failures are reported as `ApplicationError::FilesystemError`,
/// file failures as `ApplicationError::WriteError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> QuireResult<()>;

    /// Create a file that must not exist yet and write `content` to it.
    ///
    /// Returns `Ok(false)` without writing if a regular file already
    /// occupies `path`. Existing files are never truncated.
    fn write_new(&self, path: &Path, content: &str) -> QuireResult<bool>;

    /// Check if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}
