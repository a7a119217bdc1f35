use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{DocGuardError, Result};

/// Glob used when a pattern names a plain directory.
const DIRECTORY_GLOB: &str = "**/*.json";

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// A compiled path pattern: the literal directory to walk plus the glob that
/// walked files must match.
#[derive(Debug, Clone)]
pub struct PathPattern {
    root: PathBuf,
    matcher: GlobMatcher,
    literal: bool,
}

impl PathPattern {
    /// Compile a pattern relative to `base`.
    ///
    /// A pattern naming an existing directory is treated as every manifest
    /// below it.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid glob.
    pub fn new(pattern: &str, base: &Path) -> Result<Self> {
        let literal = !has_glob_meta(pattern);
        let pattern = if !has_glob_meta(pattern) && base.join(pattern).is_dir() {
            format!("{}/{DIRECTORY_GLOB}", pattern.trim_end_matches(['/', '\\']))
        } else {
            pattern.to_string()
        };

        let relative = Path::new(&pattern);
        let (glob_text, root) = if relative.is_absolute() || base.as_os_str().is_empty() {
            (to_glob_path(&pattern), literal_prefix(relative))
        } else {
            let base_text = to_glob_path(&base.to_string_lossy());
            (
                format!(
                    "{}/{}",
                    globset::escape(base_text.trim_end_matches('/')),
                    to_glob_path(&pattern)
                ),
                base.join(literal_prefix(relative)),
            )
        };

        let matcher = GlobBuilder::new(&glob_text)
            .literal_separator(true)
            .build()
            .map_err(|source| DocGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?
            .compile_matcher();

        Ok(Self {
            root,
            matcher,
            literal,
        })
    }

    /// Directory (or file) where walking starts.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the pattern, as written, names a path with no glob syntax.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.literal
    }

    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}

fn to_glob_path(text: &str) -> String {
    text.replace('\\', "/")
}

fn has_glob_meta(text: &str) -> bool {
    text.contains(GLOB_META)
}

/// Leading path components that contain no glob syntax.
fn literal_prefix(path: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    for component in path.components() {
        if let Component::Normal(part) = component
            && has_glob_meta(&part.to_string_lossy())
        {
            break;
        }
        root.push(component);
    }
    root
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
