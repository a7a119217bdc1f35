use super::*;
use crate::document::{EntityKind, Location, Signature, Tag};
use crate::measurement::Measurement;

fn method(params: &[&str]) -> Document {
    Document::new("Foo#bar", EntityKind::Method, Location::new("lib/foo.rb", 1))
        .with_signature(Signature::new(params.iter().copied()))
}

fn descriptions(measurements: &[Measurement]) -> Vec<Option<&str>> {
    measurements.iter().map(Measurement::description).collect()
}

#[test]
fn param_presence_emits_one_measurement_per_parameter() {
    let doc = method(&["a", "b", "c"]).with_tag(Tag::new("param").with_param("b"));

    let measurements = ParamTagPresence.evaluate(&doc, &RuleConfig::default());

    assert_eq!(
        descriptions(&measurements),
        [
            Some("The parameter 'a' should be documented with a @param tag"),
            None,
            Some("The parameter 'c' should be documented with a @param tag"),
        ]
    );
}

#[test]
fn param_presence_without_parameters_is_empty() {
    assert!(ParamTagPresence
        .evaluate(&method(&[]), &RuleConfig::default())
        .is_empty());
}

#[test]
fn param_rules_need_a_signature() {
    let doc = Document::new("Foo#bar", EntityKind::Method, Location::default())
        .with_tag(Tag::new("param").with_param("x"));
    assert!(ParamTagPresence.evaluate(&doc, &RuleConfig::default()).is_empty());
    assert!(ParamTagConsistency.evaluate(&doc, &RuleConfig::default()).is_empty());
}

#[test]
fn param_consistency_flags_unknown_and_unnamed_tags() {
    let doc = method(&["a"])
        .with_tag(Tag::new("param").with_param("a"))
        .with_tag(Tag::new("param").with_param("z"))
        .with_tag(Tag::new("param"));

    let measurements = ParamTagConsistency.evaluate(&doc, &RuleConfig::default());

    assert_eq!(
        descriptions(&measurements),
        [
            None,
            Some("The @param tag 'z' does not match any parameter of the method"),
            Some("The @param tag should name a parameter"),
        ]
    );
}

#[test]
fn return_tag_required_for_value_returning_methods() {
    let config = RuleConfig::default();
    let bare = method(&[]);
    let documented = method(&[]).with_tag(Tag::new("return"));

    assert!(ReturnTag.evaluate(&bare, &config)[0].is_failed());
    assert!(ReturnTag.evaluate(&documented, &config)[0].is_passed());
}

#[test]
fn return_tag_skips_void_methods_and_non_methods() {
    let config = RuleConfig::default();
    let void = Document::new("Foo#initialize", EntityKind::Method, Location::default())
        .with_signature(Signature::new(["a"]).void());
    let attribute = Document::new("Foo#name", EntityKind::Attribute, Location::default());

    assert!(ReturnTag.evaluate(&void, &config).is_empty());
    assert!(ReturnTag.evaluate(&attribute, &config).is_empty());
}

#[test]
fn example_tag_checks_public_methods_only_by_default() {
    let config = RuleConfig::default();
    let private = method(&[]).with_visibility(Visibility::Private);

    assert!(ExampleTag.evaluate(&private, &config).is_empty());
    assert!(ExampleTag.evaluate(&method(&[]), &config)[0].is_failed());
    assert!(
        ExampleTag.evaluate(&method(&[]).with_tag(Tag::new("example")), &config)[0].is_passed()
    );
}

#[test]
fn example_tag_can_include_non_public_methods() {
    let config = RuleConfig {
        public_only: Some(false),
        ..RuleConfig::default()
    };
    let private = method(&[]).with_visibility(Visibility::Private);

    let measurements = ExampleTag.evaluate(&private, &config);

    assert_eq!(
        descriptions(&measurements),
        [Some("The private method should have an @example tag")]
    );
}
