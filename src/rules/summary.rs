use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::document::Document;

use super::{Rule, RuleId, Verdict};

/// Default maximum summary length, in characters.
pub const DEFAULT_MAX_SUMMARY_LENGTH: usize = 80;

/// How `Summary::Delimiter` expects a summary to end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStyle {
    /// Summary must end with `.`, `!` or `?`.
    #[default]
    Terminated,
    /// Summary must not end with a period.
    Bare,
}

/// Entities that delegate to another via `@see` are exempt from summary rules.
fn has_own_summary(document: &Document) -> bool {
    !document.has_tag("see")
}

pub struct SummaryPresence;

impl Rule for SummaryPresence {
    fn id(&self) -> RuleId {
        RuleId::SummaryPresence
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        has_own_summary(document)
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(!document.summary_text().is_empty(), || {
            format!("The {} summary should be specified", document.kind())
        })]
    }
}

pub struct SummaryLength;

impl Rule for SummaryLength {
    fn id(&self) -> RuleId {
        RuleId::SummaryLength
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        has_own_summary(document) && !document.summary_text().is_empty()
    }

    fn check(&self, document: &Document, config: &RuleConfig) -> Vec<Verdict> {
        let max = config.max_length.unwrap_or(DEFAULT_MAX_SUMMARY_LENGTH);
        let length = document.summary_text().chars().count();
        vec![Verdict::from_bool(length <= max, || {
            format!(
                "The {} summary should be {max} characters or less in length (found {length})",
                document.kind()
            )
        })]
    }
}

pub struct SummaryDelimiter;

impl Rule for SummaryDelimiter {
    fn id(&self) -> RuleId {
        RuleId::SummaryDelimiter
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        !document.summary_text().is_empty()
    }

    fn check(&self, document: &Document, config: &RuleConfig) -> Vec<Verdict> {
        let summary = document.summary_text();
        let verdict = match config.delimiter.unwrap_or_default() {
            DelimiterStyle::Terminated => {
                Verdict::from_bool(summary.ends_with(['.', '!', '?']), || {
                    format!(
                        "The {} summary should end with '.', '!' or '?'",
                        document.kind()
                    )
                })
            }
            DelimiterStyle::Bare => Verdict::from_bool(!summary.ends_with('.'), || {
                format!("The {} summary should not end in a period", document.kind())
            }),
        };
        vec![verdict]
    }
}

pub struct SummarySingleLine;

impl Rule for SummarySingleLine {
    fn id(&self) -> RuleId {
        RuleId::SummarySingleLine
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        !document.summary_text().is_empty()
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(!document.summary_text().contains('\n'), || {
            format!("The {} summary should be a single line", document.kind())
        })]
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
