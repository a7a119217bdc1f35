//! End-to-end run: documents in, measurements and threshold outcome out.

use rayon::prelude::*;

use crate::checker::{ThresholdChecker, ThresholdOutcome};
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::extractor::DocExtractor;
use crate::measurement::MeasurementSet;
use crate::output::{OutputFormatter, Report};
use crate::rules::RuleRegistry;

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub measurements: MeasurementSet,
    pub outcome: ThresholdOutcome,
}

impl RunResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    #[must_use]
    pub const fn report(&self, verbose: bool) -> Report<'_> {
        Report {
            measurements: &self.measurements,
            outcome: self.outcome,
            verbose,
        }
    }
}

/// Evaluate every rule against every document.
///
/// Documents are evaluated in parallel; the ordered collect keeps document
/// order, so the set is in (document, rule, sub-check) order.
#[must_use]
pub fn measure(documents: &[Document], registry: &RuleRegistry, config: &Config) -> MeasurementSet {
    documents
        .par_iter()
        .map(|document| registry.evaluate(document, config))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Measure documents and decide the threshold outcome.
#[must_use]
pub fn evaluate(documents: &[Document], registry: &RuleRegistry, config: &Config) -> RunResult {
    let measurements = measure(documents, registry, config);
    let outcome = ThresholdChecker::from_config(config).check(measurements.coverage());
    log::debug!(
        "Evaluated {} document(s) into {} measurement(s), coverage {}%",
        documents.len(),
        measurements.len(),
        outcome.coverage()
    );
    RunResult {
        measurements,
        outcome,
    }
}

/// Extract documents for the configured paths, evaluate them, and write the
/// report to the configured output.
///
/// # Errors
/// Returns an error if extraction, formatting or writing the report fails.
pub fn run<E, F>(config: &Config, extractor: &E, formatter: &F) -> Result<RunResult>
where
    E: DocExtractor + ?Sized,
    F: OutputFormatter + ?Sized,
{
    let documents = extractor.extract(config.path())?;
    log::debug!("Extracted {} document(s)", documents.len());

    let registry = RuleRegistry::builtin();
    let result = evaluate(&documents, &registry, config);

    let rendered = formatter.format(&result.report(config.verbose()))?;
    config.output().write(&rendered)?;

    Ok(result)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
