//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use quire_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{QuireError, QuireResult},
};
use tracing::warn;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> QuireResult<()> {
        fs::create_dir_all(path).map_err(|e| dir_error(path, e))
    }

    fn write_new(&self, path: &Path, content: &str) -> QuireResult<bool> {
        // create_new closes the window between the caller's existence check
        // and the write: an existing file is never opened for writing.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => {
                return Ok(false);
            }
            Err(e) => return Err(write_error(path, e, "create file")),
        };

        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        if let Err(e) = written {
            drop(file);
            // We created this file a moment ago; don't leave a truncated copy
            // that the next run would skip.
            if let Err(rm) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %rm, "Could not remove partial file");
            }
            return Err(write_error(path, e, "write file"));
        }

        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn dir_error(path: &Path, e: io::Error) -> QuireError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to create directory: {e}"),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error, operation: &str) -> QuireError {
    ApplicationError::WriteError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
