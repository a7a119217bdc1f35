mod types;

pub use types::{EntityKind, Location, Signature, Tag, Visibility};

use serde::{Deserialize, Serialize};

/// A documentable entity together with its raw doc comment.
///
/// Documents are produced by a [`DocExtractor`](crate::extractor::DocExtractor)
/// and only read afterwards: all fields are private and there are no setters.
/// The `with_*` builders consume the value and are meant for construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    path: String,
    kind: EntityKind,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    docstring: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signature: Option<Signature>,
    #[serde(default)]
    location: Location,
}

impl Document {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: EntityKind, location: Location) -> Self {
        Self {
            path: path.into(),
            kind,
            visibility: Visibility::Public,
            docstring: String::new(),
            tags: Vec::new(),
            signature: None,
            location,
        }
    }

    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = docstring.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Qualified entity identifier, e.g. `Foo::Bar#baz`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn docstring(&self) -> &str {
        &self.docstring
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub const fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn is_method(&self) -> bool {
        self.kind == EntityKind::Method
    }

    /// First paragraph of the doc comment, trimmed. See [`summary_text`].
    #[must_use]
    pub fn summary_text(&self) -> &str {
        summary_text(&self.docstring)
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |tag| tag.name == name)
    }

    /// Text of the first `@api` tag, trimmed.
    #[must_use]
    pub fn api_text(&self) -> Option<&str> {
        self.tags_named("api")
            .next()
            .map(|tag| tag.text.as_deref().unwrap_or_default().trim())
    }
}

/// Extract the summary from a raw doc comment.
///
/// The summary is everything before the first blank line (a line holding only
/// whitespace), trimmed. A comment that starts with a blank line has no
/// summary.
#[must_use]
pub fn summary_text(docstring: &str) -> &str {
    let mut end = docstring.len();
    let mut offset = 0;
    for line in docstring.split('\n') {
        if line.trim().is_empty() && offset + line.len() < docstring.len() {
            end = offset;
            break;
        }
        offset += line.len() + 1;
    }
    docstring[..end].trim()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
