//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole scaffolding workflow:
//! 1. Validate the table
//! 2. Ensure the base directory exists (fatal on failure)
//! 3. Write every entry that is not already on disk, in table order
//!
//! Per-entry failures are recorded in the [`ScaffoldReport`] and the run
//! moves on; there is no rollback. Concurrent runs against the same base
//! directory may race between the existence check and the write.

use std::path::Path;
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, EntryOutcome, ScaffoldReport, ScaffoldTable},
    error::QuireResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use quire_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(Box::new(filesystem)); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create `path` and any missing ancestors. No-op if it is already a
    /// directory.
    #[instrument(level = "trace", skip_all, fields(path = %path.display()))]
    pub fn ensure_directory(&self, path: &Path) -> QuireResult<()> {
        if self.filesystem.is_dir(path) {
            trace!("directory already present");
            return Ok(());
        }

        if self.filesystem.exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "a non-directory entry already exists at this path".into(),
            }
            .into());
        }

        self.filesystem.create_dir_all(path)?;
        debug!("directory created");
        Ok(())
    }

    /// Write `content` to `path` unless a regular file is already there.
    ///
    /// Performs at most one write. The parent chain is created first.
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn write_if_absent(&self, path: &Path, content: &str) -> QuireResult<EntryOutcome> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_directory(parent)?;
        }

        if self.filesystem.is_file(path) {
            return Ok(EntryOutcome::Skipped);
        }

        // `false` means another writer got there between the check and the write.
        if self.filesystem.write_new(path, content)? {
            Ok(EntryOutcome::Created)
        } else {
            Ok(EntryOutcome::Skipped)
        }
    }

    /// Materialise `table` beneath `base`.
    ///
    /// Fails before touching any entry if the table is malformed or `base`
    /// cannot be created. Otherwise returns one outcome per entry.
    #[instrument(
        skip_all,
        fields(table = %table.name(), base = %base.as_ref().display())
    )]
    pub fn run(&self, base: impl AsRef<Path>, table: &ScaffoldTable) -> QuireResult<ScaffoldReport> {
        let base = base.as_ref();
        validator::validate_table(table)?;

        self.ensure_directory(base)?;
        info!(entries = table.len(), "Scaffolding into base directory");

        let mut report = ScaffoldReport::new(base, false);
        for entry in table {
            let path = base.join(entry.path.as_path());
            let outcome = match self.write_if_absent(&path, &entry.content) {
                Ok(outcome) => outcome,
                Err(e) => EntryOutcome::Failed {
                    reason: e.to_string(),
                },
            };

            match &outcome {
                EntryOutcome::Created => info!(path = %entry.path, "created"),
                EntryOutcome::Skipped => info!(path = %entry.path, "skipped (exists)"),
                EntryOutcome::Failed { reason } => warn!(path = %entry.path, %reason, "failed"),
            }
            report.record(entry.path.clone(), outcome);
        }

        info!(
            created = report.created(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Scaffold finished"
        );
        Ok(report)
    }

    /// Report what [`run`](Self::run) would do without writing anything.
    #[instrument(
        skip_all,
        fields(table = %table.name(), base = %base.as_ref().display())
    )]
    pub fn preview(
        &self,
        base: impl AsRef<Path>,
        table: &ScaffoldTable,
    ) -> QuireResult<ScaffoldReport> {
        let base = base.as_ref();
        validator::validate_table(table)?;

        if self.filesystem.exists(base) && !self.filesystem.is_dir(base) {
            return Err(ApplicationError::FilesystemError {
                path: base.to_path_buf(),
                reason: "a non-directory entry already exists at this path".into(),
            }
            .into());
        }

        let mut report = ScaffoldReport::new(base, true);
        for entry in table {
            let outcome = if self.filesystem.is_file(&base.join(entry.path.as_path())) {
                EntryOutcome::Skipped
            } else {
                EntryOutcome::Created
            };
            report.record(entry.path.clone(), outcome);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::MockFilesystem;

    fn table() -> ScaffoldTable {
        ScaffoldTable::builder("test")
            .file("a.txt", "alpha")
            .file("b.txt", "beta")
            .build()
            .unwrap()
    }

    /// Mock where only the given directories and files exist.
    fn mock_with(dirs: &[&str], files: &[&str]) -> MockFilesystem {
        let dirs: Vec<PathBuf> = dirs.iter().map(PathBuf::from).collect();
        let files: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

        let mut fs = MockFilesystem::new();
        let d = dirs.clone();
        fs.expect_is_dir()
            .returning(move |p| d.iter().any(|x| x == p));
        let f = files.clone();
        fs.expect_is_file()
            .returning(move |p| f.iter().any(|x| x == p));
        fs.expect_exists()
            .returning(move |p| dirs.iter().chain(files.iter()).any(|x| x == p));
        fs
    }

    #[test]
    fn base_colliding_with_file_is_fatal_and_writes_nothing() {
        let mut fs = mock_with(&[], &["proj"]);
        fs.expect_create_dir_all().never();
        fs.expect_write_new().never();

        let service = ScaffoldService::new(Box::new(fs));
        let err = service.run("proj", &table()).unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn uncreatable_base_is_fatal() {
        let mut fs = mock_with(&[], &[]);
        fs.expect_create_dir_all().times(1).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        fs.expect_write_new().never();

        let service = ScaffoldService::new(Box::new(fs));
        assert!(service.run("proj", &table()).unwrap_err().is_filesystem());
    }

    #[test]
    fn write_error_is_recorded_and_run_continues() {
        let mut fs = mock_with(&["proj"], &[]);
        fs.expect_write_new().times(2).returning(|p, _| {
            if p == Path::new("proj/a.txt") {
                Err(ApplicationError::WriteError {
                    path: p.to_path_buf(),
                    reason: "No space left on device".into(),
                }
                .into())
            } else {
                Ok(true)
            }
        });

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.run("proj", &table()).unwrap();

        assert!(matches!(
            report.outcome_of("a.txt"),
            Some(EntryOutcome::Failed { reason }) if reason.contains("No space left")
        ));
        assert_eq!(report.outcome_of("b.txt"), Some(&EntryOutcome::Created));
        assert!(!report.is_complete());
    }

    #[test]
    fn blocked_subdirectory_fails_only_its_entry() {
        let table = ScaffoldTable::builder("test")
            .file("locked/x.txt", "x")
            .file("ok.txt", "ok")
            .build()
            .unwrap();

        let mut fs = mock_with(&["proj"], &[]);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("proj/locked"))
            .times(1)
            .returning(|p| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into())
            });
        fs.expect_write_new()
            .withf(|p, content| p == Path::new("proj/ok.txt") && content == "ok")
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.run("proj", &table).unwrap();

        assert_eq!(report.failed(), 1);
        assert_eq!(report.created(), 1);
        assert_eq!(report.entries[0].outcome.as_str(), "failed");
    }

    #[test]
    fn existing_file_is_skipped_without_write() {
        let mut fs = mock_with(&["proj"], &["proj/a.txt"]);
        fs.expect_write_new()
            .withf(|p, _| p == Path::new("proj/b.txt"))
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.run("proj", &table()).unwrap();

        assert_eq!(report.outcome_of("a.txt"), Some(&EntryOutcome::Skipped));
        assert_eq!(report.outcome_of("b.txt"), Some(&EntryOutcome::Created));
    }

    #[test]
    fn lost_race_reports_skipped() {
        let mut fs = mock_with(&["proj"], &[]);
        fs.expect_write_new().returning(|_, _| Ok(false));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.run("proj", &table()).unwrap();
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn directory_in_place_of_file_parent_is_filesystem_error() {
        let mut fs = mock_with(&["proj"], &["proj/chapters"]);
        fs.expect_write_new().never();

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .write_if_absent(Path::new("proj/chapters/01.qmd"), "# One")
            .unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn preview_never_writes() {
        let mut fs = mock_with(&["proj"], &["proj/b.txt"]);
        fs.expect_create_dir_all().never();
        fs.expect_write_new().never();

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.preview("proj", &table()).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.outcome_of("a.txt"), Some(&EntryOutcome::Created));
        assert_eq!(report.outcome_of("b.txt"), Some(&EntryOutcome::Skipped));
    }

    #[test]
    fn preview_flags_colliding_base() {
        let fs = mock_with(&[], &["proj"]);
        let service = ScaffoldService::new(Box::new(fs));
        assert!(service.preview("proj", &table()).unwrap_err().is_filesystem());
    }
}
