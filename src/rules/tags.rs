use crate::config::RuleConfig;
use crate::document::{Document, Visibility};

use super::{Rule, RuleId, Verdict};

fn signature_params(document: &Document) -> Option<&[String]> {
    if !document.is_method() {
        return None;
    }
    document.signature().map(|sig| sig.params.as_slice())
}

/// Every parameter of a method must be documented by a `@param` tag.
pub struct ParamTagPresence;

impl Rule for ParamTagPresence {
    fn id(&self) -> RuleId {
        RuleId::ParamTagPresence
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        signature_params(document).is_some()
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        let params = signature_params(document).unwrap_or_default();
        params
            .iter()
            .map(|param| {
                let documented = document
                    .tags_named("param")
                    .any(|tag| tag.param.as_deref() == Some(param.as_str()));
                Verdict::from_bool(documented, || {
                    format!("The parameter '{param}' should be documented with a @param tag")
                })
            })
            .collect()
    }
}

/// Every `@param` tag must name an actual parameter of the method.
pub struct ParamTagConsistency;

impl Rule for ParamTagConsistency {
    fn id(&self) -> RuleId {
        RuleId::ParamTagConsistency
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        signature_params(document).is_some()
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        let params = signature_params(document).unwrap_or_default();
        document
            .tags_named("param")
            .map(|tag| match tag.param.as_deref() {
                Some(name) => Verdict::from_bool(params.iter().any(|p| p == name), || {
                    format!("The @param tag '{name}' does not match any parameter of the method")
                }),
                None => Verdict::Fail("The @param tag should name a parameter".to_string()),
            })
            .collect()
    }
}

/// Methods that return a value must document it with `@return`.
pub struct ReturnTag;

impl Rule for ReturnTag {
    fn id(&self) -> RuleId {
        RuleId::ReturnTag
    }

    fn applies_to(&self, document: &Document, _config: &RuleConfig) -> bool {
        document.is_method() && document.signature().is_none_or(|sig| sig.returns_value)
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(document.has_tag("return"), || {
            "The method should have a @return tag".to_string()
        })]
    }
}

/// Methods should show usage with an `@example` tag.
///
/// Only public methods are checked unless `public_only = false`.
pub struct ExampleTag;

impl Rule for ExampleTag {
    fn id(&self) -> RuleId {
        RuleId::ExampleTag
    }

    fn applies_to(&self, document: &Document, config: &RuleConfig) -> bool {
        let public_only = config.public_only.unwrap_or(true);
        document.is_method() && (!public_only || document.visibility() == Visibility::Public)
    }

    fn check(&self, document: &Document, _config: &RuleConfig) -> Vec<Verdict> {
        vec![Verdict::from_bool(document.has_tag("example"), || {
            format!(
                "The {} method should have an @example tag",
                document.visibility()
            )
        })]
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
