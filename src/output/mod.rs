mod destination;
mod json;
mod text;

pub use destination::ReportOutput;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::ThresholdOutcome;
use crate::error::Result;
use crate::measurement::MeasurementSet;

/// Everything a formatter needs to render the outcome of a run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub measurements: &'a MeasurementSet,
    pub outcome: ThresholdOutcome,
    /// List individual failures, not only the summary.
    pub verbose: bool,
}

/// Trait for formatting a run report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
