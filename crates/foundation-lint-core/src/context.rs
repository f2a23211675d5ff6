//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::scope::{self, ConsumerScope};

/// Context provided to per-file rules.
///
/// Carries the analyzed file's path, the project root, and the effective
/// library-source roots, so every rule asks the same scope questions the
/// same way. Created per analysis and dropped afterwards; rules hold no
/// state between files.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file, as the host supplied it.
    pub path: &'a Path,
    /// Absolute project root.
    pub project_root: &'a Path,
    /// Path relative to the project root, separator-normalized. Falls back
    /// to the full path when the file lies outside the root.
    pub relative_path: PathBuf,
    /// Library-source roots relative to the project root; empty means the
    /// fixed default pair.
    pub library_roots: Vec<String>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, project_root: &'a Path) -> Self {
        let relative_path = crate::utils::paths::relative_to_root(
            &path.to_string_lossy(),
            &project_root.to_string_lossy(),
        )
        .map_or_else(|| path.to_path_buf(), PathBuf::from);

        Self {
            path,
            project_root,
            relative_path,
            library_roots: Vec::new(),
        }
    }

    /// Replaces the library-source root override list.
    #[must_use]
    pub fn with_library_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Classifies this file for consumer-scoped detectors.
    #[must_use]
    pub fn consumer_scope(&self) -> ConsumerScope {
        scope::consumer_scope(
            &self.path.to_string_lossy(),
            &self.project_root.to_string_lossy(),
        )
    }

    /// Whether this file is part of the design-system library source.
    #[must_use]
    pub fn is_library_source(&self) -> bool {
        scope::is_library_source(
            &self.path.to_string_lossy(),
            &self.project_root.to_string_lossy(),
            &self.library_roots,
        )
    }

    /// Whether consumer-contract detectors should run at all: consumer
    /// scope, and not library source.
    #[must_use]
    pub fn is_consumer(&self) -> bool {
        self.consumer_scope() == ConsumerScope::Consumer && !self.is_library_source()
    }
}
