use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::DocGuardError;

/// Stable identity of a built-in rule.
///
/// The string form (`Summary::Presence`, `ReturnTag`, ...) is the key used in
/// the `[rules]` table of the config file and in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    SummaryPresence,
    SummaryLength,
    SummaryDelimiter,
    SummarySingleLine,
    ParamTagPresence,
    ParamTagConsistency,
    ReturnTag,
    ExampleTag,
    ApiTagPresence,
    ApiTagInclusion,
    ApiTagProtectedMethod,
    ApiTagPrivateMethod,
}

impl RuleId {
    /// All rule identities, in evaluation order.
    pub const ALL: [Self; 12] = [
        Self::SummaryPresence,
        Self::SummaryLength,
        Self::SummaryDelimiter,
        Self::SummarySingleLine,
        Self::ParamTagPresence,
        Self::ParamTagConsistency,
        Self::ReturnTag,
        Self::ExampleTag,
        Self::ApiTagPresence,
        Self::ApiTagInclusion,
        Self::ApiTagProtectedMethod,
        Self::ApiTagPrivateMethod,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SummaryPresence => "Summary::Presence",
            Self::SummaryLength => "Summary::Length",
            Self::SummaryDelimiter => "Summary::Delimiter",
            Self::SummarySingleLine => "Summary::SingleLine",
            Self::ParamTagPresence => "ParamTag::Presence",
            Self::ParamTagConsistency => "ParamTag::Consistency",
            Self::ReturnTag => "ReturnTag",
            Self::ExampleTag => "ExampleTag",
            Self::ApiTagPresence => "ApiTag::Presence",
            Self::ApiTagInclusion => "ApiTag::Inclusion",
            Self::ApiTagProtectedMethod => "ApiTag::ProtectedMethod",
            Self::ApiTagPrivateMethod => "ApiTag::PrivateMethod",
        }
    }

    /// Rule-specific option keys accepted in this rule's config table,
    /// on top of `enabled`, `weight` and `exclude`.
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::SummaryLength => &["max_length"],
            Self::SummaryDelimiter => &["delimiter"],
            Self::ExampleTag => &["public_only"],
            _ => &[],
        }
    }

    #[must_use]
    pub fn known_names() -> Vec<String> {
        Self::ALL.iter().map(|id| id.as_str().to_string()).collect()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = DocGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DocGuardError::UnknownRule {
                key: s.to_string(),
                known: Self::known_names(),
            })
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
