use crate::config::RuleConfig;
use crate::document::{Document, Visibility};

use super::{Rule, RuleId, Verdict};

const API_LEVELS: [&str; 3] = ["public", "semipublic", "private"];

pub struct ApiTagPresence;

impl Rule for ApiTagPresence {
    fn id(&self) -> RuleId {
        RuleId::ApiTagPresence
    }

    fn applies_to(&self, _document: &Document, _config: &RuleConfig) -> bool {
        true
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(document.has_tag("api"), || {
            format!("The {} should have an @api tag", document.kind())
        })]
    }
}

pub struct ApiTagInclusion;

impl Rule for ApiTagInclusion {
    fn id(&self) -> RuleId {
        RuleId::ApiTagInclusion
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        document.has_tag("api")
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        let level = document.api_text().unwrap_or_default();
        vec![Verdict::from_bool(API_LEVELS.contains(&level), || {
            format!("The @api tag must be either public, semipublic or private (found '{level}')")
        })]
    }
}

pub struct ApiTagProtectedMethod;

impl Rule for ApiTagProtectedMethod {
    fn id(&self) -> RuleId {
        RuleId::ApiTagProtectedMethod
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        document.is_method()
            && document.visibility() == Visibility::Protected
            && document.has_tag("api")
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        let level = document.api_text().unwrap_or_default();
        vec![Verdict::from_bool(
            matches!(level, "semipublic" | "private"),
            || {
                "A method with protected visibility must have an @api tag of semipublic or private"
                    .to_string()
            },
        )]
    }
}

pub struct ApiTagPrivateMethod;

impl Rule for ApiTagPrivateMethod {
    fn id(&self) -> RuleId {
        RuleId::ApiTagPrivateMethod
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        document.is_method()
            && document.visibility() == Visibility::Private
            && document.has_tag("api")
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(document.api_text() == Some("private"), || {
            "A method with private visibility must have an @api tag of private".to_string()
        })]
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
