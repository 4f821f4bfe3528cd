use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::common::RelativePath;

/// What happened to a single table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// The file was absent and has been written.
    Created,
    /// A regular file already existed; nothing was written.
    Skipped,
    /// The entry could not be materialised. Later entries are still attempted.
    Failed { reason: String },
}

impl EntryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Skipped => "skipped",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub path: RelativePath,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Result of a scaffold run (or preview), one report per table entry in
/// table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub base: PathBuf,
    pub dry_run: bool,
    pub entries: Vec<EntryReport>,
}

impl ScaffoldReport {
    pub fn new(base: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            base: base.into(),
            dry_run,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, path: RelativePath, outcome: EntryOutcome) {
        self.entries.push(EntryReport { path, outcome });
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(EntryOutcome::is_failure)
    }

    /// `true` when no entry failed.
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome_of(&self, path: &str) -> Option<&EntryOutcome> {
        self.entries
            .iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| &e.outcome)
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

impl fmt::Display for ScaffoldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} skipped, {} failed",
            self.created(),
            self.skipped(),
            self.failed()
        )
    }
}
