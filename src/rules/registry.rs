use crate::config::Config;
use crate::document::Document;
use crate::measurement::Measurement;

use super::{
    ApiTagInclusion, ApiTagPresence, ApiTagPrivateMethod, ApiTagProtectedMethod, ExampleTag,
    ParamTagConsistency, ParamTagPresence, ReturnTag, Rule, RuleId, SummaryDelimiter,
    SummaryLength, SummaryPresence, SummarySingleLine,
};

/// Entry in the built-in rule table.
pub struct Registration {
    pub id: RuleId,
    pub build: fn() -> Box<dyn Rule>,
}

/// Built-in rules in evaluation order. Matches [`RuleId::ALL`].
pub const BUILTIN_RULES: &[Registration] = &[
    Registration {
        id: RuleId::SummaryPresence,
        build: || Box::new(SummaryPresence),
    },
    Registration {
        id: RuleId::SummaryLength,
        build: || Box::new(SummaryLength),
    },
    Registration {
        id: RuleId::SummaryDelimiter,
        build: || Box::new(SummaryDelimiter),
    },
    Registration {
        id: RuleId::SummarySingleLine,
        build: || Box::new(SummarySingleLine),
    },
    Registration {
        id: RuleId::ParamTagPresence,
        build: || Box::new(ParamTagPresence),
    },
    Registration {
        id: RuleId::ParamTagConsistency,
        build: || Box::new(ParamTagConsistency),
    },
    Registration {
        id: RuleId::ReturnTag,
        build: || Box::new(ReturnTag),
    },
    Registration {
        id: RuleId::ExampleTag,
        build: || Box::new(ExampleTag),
    },
    Registration {
        id: RuleId::ApiTagPresence,
        build: || Box::new(ApiTagPresence),
    },
    Registration {
        id: RuleId::ApiTagInclusion,
        build: || Box::new(ApiTagInclusion),
    },
    Registration {
        id: RuleId::ApiTagProtectedMethod,
        build: || Box::new(ApiTagProtectedMethod),
    },
    Registration {
        id: RuleId::ApiTagPrivateMethod,
        build: || Box::new(ApiTagPrivateMethod),
    },
];

/// The set of rules run against every document.
///
/// Every registered rule is always invoked; disabling a rule happens inside
/// [`Rule::evaluate`] so the evaluation shape does not depend on the config.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES.iter().map(|entry| (entry.build)()).collect(),
        }
    }

    /// Build a registry from an explicit rule list, in the given order.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against one document, in registry order.
    #[must_use]
    pub fn evaluate(&self, document: &Document, config: &Config) -> Vec<Measurement> {
        self.rules
            .iter()
            .flat_map(|rule| rule.evaluate(document, &config.rule_config(rule.id())))
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
