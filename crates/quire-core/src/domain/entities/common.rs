use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Serialize, Serializer};

/// A filesystem path guaranteed to stay beneath its base directory.
///
/// Invariant: non-empty, never absolute, no `..` segments. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Validate `path`, dropping `.` segments so `./a` and `a` compare equal.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => normalized.push(segment),
                Component::CurDir => {}
                Component::ParentDir => return Err(DomainError::ParentTraversal { path: display }),
                // `\foo` or `C:foo` on Windows: not absolute, but not relative either.
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display });
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self(normalized))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.display())
    }
}
