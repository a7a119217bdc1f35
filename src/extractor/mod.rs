//! Sources of [`Document`]s.
//!
//! Parsing source code is not this crate's job. [`DocExtractor`] is the seam
//! where an external extractor plugs in; [`ManifestExtractor`] reads the JSON
//! entity manifests such an extractor writes.

mod manifest;
mod pattern;

pub use manifest::ManifestExtractor;
pub use pattern::PathPattern;

use crate::document::Document;
use crate::error::Result;

pub trait DocExtractor {
    /// Produce the documents found under the given path patterns.
    ///
    /// Documents must come back in a stable order: the evaluation order, and
    /// therefore the report, follows it.
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or a source cannot be read.
    fn extract(&self, patterns: &[String]) -> Result<Vec<Document>>;
}

/// Extractor over an in-memory document list, ignoring patterns.
#[derive(Debug, Clone, Default)]
pub struct StaticExtractor {
    documents: Vec<Document>,
}

impl StaticExtractor {
    #[must_use]
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl DocExtractor for StaticExtractor {
    fn extract(&self, _patterns: &[String]) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }
}
