use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = DocGuardError::Config("invalid threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid threshold");
}

#[test]
fn error_display_unknown_rule_lists_known_rules() {
    let err = DocGuardError::UnknownRule {
        key: "Summary::Missing".to_string(),
        known: vec!["Summary::Presence".to_string(), "ReturnTag".to_string()],
    };
    let message = err.to_string();
    assert!(message.contains("'Summary::Missing'"));
    assert!(message.contains("Summary::Presence, ReturnTag"));
}

#[test]
fn error_display_file_access() {
    let err = DocGuardError::FileAccess {
        path: PathBuf::from(".doc-guard.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains(".doc-guard.toml"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        DocGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        DocGuardError::UnknownRule {
            key: "Nope".to_string(),
            known: Vec::new(),
        }
        .error_type(),
        "Config"
    );
    assert_eq!(
        DocGuardError::FileAccess {
            path: PathBuf::from("a.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileAccess"
    );
    assert_eq!(
        DocGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn manifest_parse_error_keeps_source() {
    let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let err = DocGuardError::ManifestParse {
        path: PathBuf::from("lib/foo.json"),
        source,
    };
    assert!(err.to_string().contains("lib/foo.json"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(err.error_type(), "Manifest");
}

#[test]
fn toml_errors_are_config_errors() {
    let source = toml::from_str::<toml::Table>("threshold = [").unwrap_err();
    let err = DocGuardError::from(source);
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().starts_with("TOML parse error"));
}
