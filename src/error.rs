use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown rule '{key}' in configuration (known rules: {})", known.join(", "))]
    UnknownRule { key: String, known: Vec<String> },

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid entity manifest: {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DocGuardError {
    /// Short category name of the error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::UnknownRule { .. } | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ManifestParse { .. } => "Manifest",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, DocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
