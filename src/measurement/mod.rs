mod set;

pub use set::{DocumentFailures, MeasurementSet};

use serde::Serialize;

use crate::document::{Document, Location};
use crate::rules::{RuleId, Verdict};

/// Result of one rule sub-check applied to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    rule: RuleId,
    document: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    weight: u32,
    location: Location,
}

impl Measurement {
    #[must_use]
    pub fn new(rule: RuleId, document: &Document, verdict: Verdict, weight: u32) -> Self {
        let (passed, description) = match verdict {
            Verdict::Pass => (true, None),
            Verdict::Fail(description) => (false, Some(description)),
        };
        Self {
            rule,
            document: document.path().to_string(),
            passed,
            description,
            weight,
            location: document.location().clone(),
        }
    }

    #[must_use]
    pub const fn rule(&self) -> RuleId {
        self.rule
    }

    /// Identifier of the measured entity.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }

    /// Failure description; `None` for passing measurements.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }
}
