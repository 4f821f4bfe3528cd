use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// One `(path, content)` pair of a scaffold.
///
/// The content is written verbatim; nothing is substituted or normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldEntry {
    pub path: RelativePath,
    pub content: Cow<'static, str>,
}

impl ScaffoldEntry {
    pub fn new(path: RelativePath, content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }

    /// Content length in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered, immutable set of files making up a scaffold.
///
/// Paths are unique. Order only decides the order in which outcomes are
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTable {
    name: Cow<'static, str>,
    entries: Vec<ScaffoldEntry>,
}

impl ScaffoldTable {
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ScaffoldTableBuilder {
        ScaffoldTableBuilder {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ScaffoldEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScaffoldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ScaffoldEntry> {
        self.entries.iter().find(|e| e.path.as_str() == path)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ScaffoldTable {
    type Item = &'a ScaffoldEntry;
    type IntoIter = std::slice::Iter<'a, ScaffoldEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builder for [`ScaffoldTable`]; path errors surface at [`build`](Self::build).
#[derive(Debug)]
pub struct ScaffoldTableBuilder {
    name: Cow<'static, str>,
    entries: Vec<Result<ScaffoldEntry, DomainError>>,
}

impl ScaffoldTableBuilder {
    pub fn file(
        mut self,
        path: impl Into<String>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        let entry = RelativePath::try_new(path.into()).map(|p| ScaffoldEntry::new(p, content));
        self.entries.push(entry);
        self
    }

    pub fn entry(mut self, entry: ScaffoldEntry) -> Self {
        self.entries.push(Ok(entry));
        self
    }

    pub fn build(self) -> Result<ScaffoldTable, DomainError> {
        let entries = self.entries.into_iter().collect::<Result<Vec<_>, _>>()?;
        let table = ScaffoldTable {
            name: self.name,
            entries,
        };
        table.validate()?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let table = ScaffoldTable::builder("t")
            .file("b.txt", "b")
            .file("a/b.txt", "hello")
            .file("a.txt", "a")
            .build()
            .unwrap();

        let paths: Vec<_> = table.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["b.txt", "a/b.txt", "a.txt"]);
        assert_eq!(table.name(), "t");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let err = ScaffoldTable::builder("t")
            .file("a/b.txt", "one")
            .file("a/b.txt", "two")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicatePath {
                path: "a/b.txt".into()
            }
        );
    }

    #[test]
    fn dotted_alias_is_a_duplicate() {
        let err = ScaffoldTable::builder("t")
            .file("a.txt", "one")
            .file("./a.txt", "two")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicatePath {
                path: "a.txt".into()
            }
        );
    }

    #[test]
    fn invalid_path_fails_build() {
        let err = ScaffoldTable::builder("t")
            .file("ok.txt", "")
            .file("../escape.txt", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::ParentTraversal { .. }));
    }

    #[test]
    fn lookup_by_path() {
        let table = ScaffoldTable::builder("t")
            .file("a/b.txt", "hello")
            .build()
            .unwrap();
        assert_eq!(table.get("a/b.txt").map(|e| e.size()), Some(5));
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn empty_table_is_valid() {
        let table = ScaffoldTable::builder("empty").build().unwrap();
        assert!(table.is_empty());
    }
}
