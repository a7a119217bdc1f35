use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DocGuardError, Result};

/// Where the report is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportOutput {
    #[default]
    Stdout,
    File(PathBuf),
}

impl ReportOutput {
    /// Write the rendered report, creating parent directories of a file target.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            Self::File(path) => {
                let to_file_error = |source| DocGuardError::FileAccess {
                    path: path.clone(),
                    source,
                };
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(to_file_error)?;
                }
                std::fs::write(path, content).map_err(to_file_error)
            }
        }
    }
}

impl From<PathBuf> for ReportOutput {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

impl From<&Path> for ReportOutput {
    fn from(path: &Path) -> Self {
        Self::from(path.to_path_buf())
    }
}

impl From<String> for ReportOutput {
    fn from(path: String) -> Self {
        Self::from(PathBuf::from(path))
    }
}

impl From<&str> for ReportOutput {
    fn from(path: &str) -> Self {
        Self::from(PathBuf::from(path))
    }
}
