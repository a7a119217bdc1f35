//! Tests for config parsing, explicit path loading, and error handling.

use std::path::Path;

use crate::config::loader::ConfigLoader;
use crate::config::{FileConfigLoader, PathList};
use crate::error::DocGuardError;
use crate::rules::DelimiterStyle;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_explicit_path() {
    let config_content = r#"
threshold = 95
require_exact_threshold = false
verbose = false
path = ["lib/**/*.json", "app/**/*.json"]
output = "coverage.txt"
"#;

    let fs = MockFileSystem::new().with_file("/custom/path/config.toml", config_content);

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let result = loader
        .load_from_path(Path::new("/custom/path/config.toml"))
        .unwrap();

    let layer = result.layer;
    assert_eq!(layer.threshold, Some(95));
    assert_eq!(layer.require_exact_threshold, Some(false));
    assert_eq!(layer.verbose, Some(false));
    assert_eq!(
        layer.path,
        Some(PathList::Many(vec![
            "lib/**/*.json".to_string(),
            "app/**/*.json".to_string()
        ]))
    );
    assert_eq!(layer.output.as_deref(), Some("coverage.txt"));
}

#[test]
fn path_accepts_single_string() {
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", "path = \"src/*.json\"\n");

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let layer = loader.load().unwrap().layer;

    assert_eq!(layer.path, Some(PathList::One("src/*.json".to_string())));
}

#[test]
fn parses_rule_tables() {
    let config_content = r#"
[rules."Summary::Length"]
max_length = 100
weight = 2

[rules."Summary::Delimiter"]
delimiter = "bare"

[rules."ApiTag::Presence"]
enabled = false
exclude = ["Foo#bar"]
"#;
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", config_content);

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let rules = loader.load().unwrap().layer.rules.unwrap();

    let keys: Vec<&str> = rules.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["Summary::Length", "Summary::Delimiter", "ApiTag::Presence"]
    );
    assert_eq!(rules["Summary::Length"].max_length, Some(100));
    assert_eq!(rules["Summary::Length"].weight, 2);
    assert_eq!(
        rules["Summary::Delimiter"].delimiter,
        Some(DelimiterStyle::Bare)
    );
    assert!(!rules["ApiTag::Presence"].enabled);
    assert_eq!(rules["ApiTag::Presence"].exclude, vec!["Foo#bar"]);
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new()
        .with_file("/project/.doc-guard.toml", "this is not valid toml [[[");

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let err = loader.load().unwrap_err();

    assert!(matches!(err, DocGuardError::TomlParse(_)));
}

#[test]
fn rejects_unknown_top_level_key() {
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", "treshold = 90\n");

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let err = loader.load().unwrap_err();

    assert!(matches!(err, DocGuardError::TomlParse(_)));
    assert!(err.to_string().contains("treshold"));
}

#[test]
fn rejects_unknown_rule_option() {
    let fs = MockFileSystem::new().with_file(
        "/project/.doc-guard.toml",
        "[rules.ReturnTag]\nseverity = 3\n",
    );

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let err = loader.load().unwrap_err();

    assert!(err.to_string().contains("severity"));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let fs = MockFileSystem::new();

    let loader = FileConfigLoader::with_fs(fs, "/project");
    let err = loader
        .load_from_path(Path::new("/does/not/exist.toml"))
        .unwrap_err();

    assert!(matches!(err, DocGuardError::FileAccess { .. }));
}
