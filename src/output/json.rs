use serde::Serialize;

use crate::checker::ThresholdOutcome;
use crate::error::Result;
use crate::measurement::Measurement;

use super::{OutputFormatter, Report};

/// Structured report; measurements are always included regardless of verbosity.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    threshold: ThresholdOutcome,
    measurements: Vec<&'a Measurement>,
}

#[derive(Serialize)]
struct Summary {
    coverage: u8,
    total: usize,
    passed: usize,
    failed: usize,
    total_weight: u64,
    passed_weight: u64,
    success: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let set = report.measurements;
        let output = JsonOutput {
            summary: Summary {
                coverage: set.coverage(),
                total: set.len(),
                passed: set.passed_count(),
                failed: set.failed_count(),
                total_weight: set.total_weight(),
                passed_weight: set.passed_weight(),
                success: report.outcome.is_success(),
            },
            threshold: report.outcome,
            measurements: set.iter().collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
