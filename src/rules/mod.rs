//! Documentation rules and the registry that runs them.
//!
//! A rule inspects one [`Document`] and reports one verdict per independent
//! sub-check. The shared [`Rule::evaluate`] turns verdicts into
//! [`Measurement`]s and handles the `enabled` flag, the per-rule `exclude`
//! list and entity applicability, so individual rules only implement
//! [`Rule::applies_to`] and [`Rule::check`].

mod api;
mod id;
mod registry;
mod summary;
mod tags;

pub use api::{ApiTagInclusion, ApiTagPresence, ApiTagPrivateMethod, ApiTagProtectedMethod};
pub use id::RuleId;
pub use registry::{Registration, RuleRegistry, BUILTIN_RULES};
pub use summary::{
    DEFAULT_MAX_SUMMARY_LENGTH, DelimiterStyle, SummaryDelimiter, SummaryLength, SummaryPresence,
    SummarySingleLine,
};
pub use tags::{ExampleTag, ParamTagConsistency, ParamTagPresence, ReturnTag};

use crate::config::RuleConfig;
use crate::document::Document;
use crate::measurement::Measurement;

/// Outcome of a single sub-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(String),
}

impl Verdict {
    /// Pass when `ok`, otherwise fail with the given description.
    pub fn from_bool(ok: bool, description: impl FnOnce() -> String) -> Self {
        if ok { Self::Pass } else { Self::Fail(description()) }
    }
}

pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;

    /// Whether the rule has anything to say about this document.
    ///
    /// Returning false is a silent skip, not a failure.
    fn applies_to(&self, document: &Document, config: &RuleConfig) -> bool;

    /// Run the sub-checks for an applicable document, in a stable order.
    fn check(&self, document: &Document, config: &RuleConfig) -> Vec<Verdict>;

    /// Evaluate the rule against a document.
    ///
    /// Disabled rules, excluded entities and inapplicable documents produce no
    /// measurements.
    fn evaluate(&self, document: &Document, config: &RuleConfig) -> Vec<Measurement> {
        if !config.enabled
            || config.excludes(document.path())
            || !self.applies_to(document, config)
        {
            return Vec::new();
        }

        self.check(document, config)
            .into_iter()
            .map(|verdict| Measurement::new(self.id(), document, verdict, config.weight))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
