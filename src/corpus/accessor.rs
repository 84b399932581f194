//! Filesystem access to the corpus root.
//!
//! The root holds one subdirectory per canonical category. Nothing here
//! writes to disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::category::{ContentCategory, FileKind};
use super::error::{CorpusError, Result};

/// Read-only handle on a corpus root directory.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory backing a category.
    pub fn category_dir(&self, category: ContentCategory) -> PathBuf {
        self.root.join(category.as_str())
    }

    /// Eligible filenames in a category, in directory enumeration order
    /// (not sorted). A missing directory is an empty category.
    pub fn list_eligible_files(&self, category: ContentCategory) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(mode = %category, dir = %dir.display(), "mode directory missing");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(CorpusError::CategoryUnavailable {
                    category: category.to_string(),
                    source,
                })
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CorpusError::CategoryUnavailable {
                category: category.to_string(),
                source,
            })?;
            // Follows symlinks so linked files are listed like regular ones.
            if !entry.path().is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(mode = %category, path = %entry.path().display(), "skipping non-UTF-8 filename");
                continue;
            };
            if FileKind::from_filename(&name).is_some() {
                files.push(name);
            }
        }
        Ok(files)
    }

    /// Read one file's raw text. The filename must name a file directly inside
    /// the category directory.
    pub fn read_file(&self, category: ContentCategory, filename: &str) -> Result<String> {
        let not_found = |source| CorpusError::NotFound {
            category: category.to_string(),
            filename: filename.to_string(),
            source,
        };

        if !is_plain_filename(filename) {
            return Err(not_found(None));
        }

        let path = self.category_dir(category).join(filename);
        std::fs::read_to_string(&path).map_err(|e| not_found(Some(e)))
    }
}

/// Rejects empty names, `.`/`..`, and anything with a path separator.
fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\'])
}
