//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use quire_core::{
    application::{ApplicationError, ports::Filesystem},
    error::QuireResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and keep
/// the other for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file (and its parent chain) without counting it as a write.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path, content.into());
        }
    }

    /// Refuse any directory creation or file write at or beneath `path`,
    /// as if it were mounted read-only.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of successful `write_new` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }

    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> QuireResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.directories.contains(&current) {
                continue;
            }
            let reason = if inner.files.contains_key(&current) {
                Some("Failed to create directory: File exists")
            } else if inner.is_read_only(&current) {
                Some("Failed to create directory: Read-only file system")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: reason.into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> QuireResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) {
            return Ok(false);
        }

        let write_error = |reason: &str| ApplicationError::WriteError {
            path: path.to_path_buf(),
            reason: reason.into(),
        };

        if inner.directories.contains(path) {
            return Err(write_error("Failed to create file: Is a directory").into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(write_error("Parent directory does not exist").into());
            }
        }
        if inner.is_read_only(path) {
            return Err(write_error("Failed to create file: Read-only file system").into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("proj/_extensions/ext")).unwrap();
        assert!(fs.is_dir(Path::new("proj")));
        assert!(fs.is_dir(Path::new("proj/_extensions")));
        assert!(fs.is_dir(Path::new("proj/_extensions/ext")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_new(Path::new("proj/a.txt"), "x").is_err());
        fs.create_dir_all(Path::new("proj")).unwrap();
        assert!(fs.write_new(Path::new("proj/a.txt"), "x").unwrap());
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn seeded_file_is_never_overwritten() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("proj/a.txt", "custom");
        assert!(!fs.write_new(Path::new("proj/a.txt"), "template").unwrap());
        assert_eq!(fs.read_file(Path::new("proj/a.txt")).as_deref(), Some("custom"));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn directory_through_file_fails() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("proj", "I am a file");
        let err = fs.create_dir_all(Path::new("proj/chapters")).unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn read_only_subtree_rejects_writes() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("proj")).unwrap();
        fs.set_read_only("proj/locked");
        assert!(fs.create_dir_all(Path::new("proj/locked/deeper")).is_err());
        assert!(fs.create_dir_all(Path::new("proj/open")).is_ok());
    }

    #[test]
    fn clones_share_state() {
        let a = MemoryFilesystem::new();
        let b = a.clone();
        a.insert_file("x.txt", "1");
        assert!(b.is_file(Path::new("x.txt")));
        assert_eq!(b.list_files(), vec![PathBuf::from("x.txt")]);
    }
}
