use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::document::Document;
use crate::error::{DocGuardError, Result};

use super::{DocExtractor, PathPattern};

/// Reads documents from JSON entity manifests.
///
/// Each manifest is a JSON array of document records:
///
/// ```json
/// [
///   {
///     "path": "Foo#bar",
///     "kind": "method",
///     "visibility": "public",
///     "docstring": "Returns the bar.\n\nLonger description.",
///     "tags": [{"name": "return", "types": ["String"]}],
///     "signature": {"params": [], "returns_value": true},
///     "location": {"file": "lib/foo.rb", "line": 12}
///   }
/// ]
/// ```
///
/// Files are visited pattern by pattern, sorted by name within a pattern, and
/// each file at most once. Documents keep file order, then array order.
#[derive(Debug, Clone)]
pub struct ManifestExtractor {
    base_dir: PathBuf,
}

impl ManifestExtractor {
    /// Create an extractor resolving relative patterns against `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Expand patterns into the list of manifest files to read.
    ///
    /// A glob whose walk root does not exist matches nothing; a literal path
    /// that does not exist is an error.
    ///
    /// # Errors
    /// Returns an error if a pattern is not a valid glob, a literal path is
    /// missing, or a directory cannot be walked.
    pub fn resolve_files(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = IndexSet::new();
        for raw in patterns {
            let pattern = PathPattern::new(raw, &self.base_dir)?;
            let before = files.len();
            for entry in WalkDir::new(pattern.root()).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) if !pattern.is_literal() && is_missing_root(&err) => break,
                    Err(err) => return Err(walk_error(pattern.root(), err)),
                };
                if entry.file_type().is_file() && pattern.is_match(entry.path()) {
                    files.insert(entry.into_path());
                }
            }
            if files.len() == before {
                log::debug!("Pattern '{raw}' matched no manifest files");
            }
        }
        Ok(files.into_iter().collect())
    }

    fn read_manifest(path: &Path) -> Result<Vec<Document>> {
        let content = std::fs::read_to_string(path).map_err(|source| DocGuardError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DocGuardError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DocExtractor for ManifestExtractor {
    fn extract(&self, patterns: &[String]) -> Result<Vec<Document>> {
        let files = self.resolve_files(patterns)?;
        log::debug!("Reading {} manifest file(s)", files.len());

        // The first error in file order wins
        let per_file: Vec<Result<Vec<Document>>> = files
            .par_iter()
            .map(|path| Self::read_manifest(path))
            .collect();

        let per_file = per_file.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(per_file.into_iter().flatten().collect())
    }
}

fn is_missing_root(err: &walkdir::Error) -> bool {
    err.depth() == 0
        && err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

fn walk_error(root: &Path, err: walkdir::Error) -> DocGuardError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DocGuardError::FileAccess {
        path,
        source: err.into(),
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
