use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "doc-guard")]
#[command(author, version, about = "Documentation coverage guard - enforce a documentation score")]
#[command(long_about = "Measure documentation quality against a set of rules and compare the \
    weighted coverage score with a threshold.\n\n\
    Exit codes:\n  \
    0 - Threshold met\n  \
    1 - Threshold not met\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Entity manifests or globs to measure (overrides `path` from config)
    pub paths: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Required coverage percentage (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Require coverage to equal the threshold exactly
    #[arg(long, conflicts_with = "no_exact")]
    pub exact: bool,

    /// Accept coverage at or above the threshold
    #[arg(long)]
    pub no_exact: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List failing measurements and enable debug logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout (exit code only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Print the built-in rule identities and exit
    #[arg(long)]
    pub list_rules: bool,
}

impl Cli {
    /// `Some(true)` for `--exact`, `Some(false)` for `--no-exact`.
    #[must_use]
    pub const fn exact_override(&self) -> Option<bool> {
        match (self.exact, self.no_exact) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
