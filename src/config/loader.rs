use std::path::{Path, PathBuf};

use crate::error::{DocGuardError, Result};

use super::model::PartialConfig;

/// Name of the config file searched for during discovery.
pub const LOCAL_CONFIG_NAME: &str = ".doc-guard.toml";

/// Entry marking a project root; discovery does not continue above it.
pub const PROJECT_ROOT_MARKER: &str = ".git";

/// A config file layer together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadResult {
    /// Parsed file contents; empty when no file was found.
    pub layer: PartialConfig,
    /// Path of the loaded file, if any.
    pub source: Option<PathBuf>,
}

/// Trait for loading the file layer of the configuration.
pub trait ConfigLoader {
    /// Discover and load the config file.
    ///
    /// A missing file is not an error; the returned layer is then empty.
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path (file or directory) exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads `.doc-guard.toml` from the filesystem.
///
/// Discovery starts at `start_dir` and walks up the parent directories. It
/// stops at the first directory containing the config file, after checking a
/// directory that contains a `.git` entry, or at the filesystem root.
///
/// The start directory is resolved by the caller once (normally the current
/// directory at program start) and passed in.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    start_dir: PathBuf,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, start_dir)
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub fn with_fs(fs: F, start_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            start_dir: start_dir.into(),
        }
    }

    /// Find the nearest config file at or above the start directory.
    #[must_use]
    pub fn discover(&self) -> Option<PathBuf> {
        for dir in self.start_dir.ancestors() {
            let candidate = dir.join(LOCAL_CONFIG_NAME);
            if self.fs.exists(&candidate) {
                return Some(candidate);
            }
            if self.fs.exists(&dir.join(PROJECT_ROOT_MARKER)) {
                log::debug!("Stopped config discovery at project root {}", dir.display());
                return None;
            }
        }
        None
    }

    fn parse_config(content: &str) -> Result<PartialConfig> {
        toml::from_str(content).map_err(DocGuardError::from)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.discover() {
            Some(path) => self.load_from_path(&path),
            None => {
                log::debug!(
                    "No {LOCAL_CONFIG_NAME} found from {}, using defaults",
                    self.start_dir.display()
                );
                Ok(LoadResult::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| DocGuardError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
        let layer = Self::parse_config(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(LoadResult {
            layer,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
