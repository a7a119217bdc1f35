use std::path::{Path, PathBuf};

use super::*;

#[test]
fn root_is_literal_prefix_under_base() {
    let pattern = PathPattern::new("lib/**/*.json", Path::new("/work")).unwrap();
    assert_eq!(pattern.root(), Path::new("/work/lib"));
}

#[test]
fn literal_file_pattern_roots_at_file() {
    let pattern = PathPattern::new("lib/foo.json", Path::new("/work")).unwrap();
    assert_eq!(pattern.root(), Path::new("/work/lib/foo.json"));
    assert!(pattern.is_match(Path::new("/work/lib/foo.json")));
}

#[test]
fn double_star_crosses_directories_single_star_does_not() {
    let deep = PathPattern::new("lib/**/*.json", Path::new("/work")).unwrap();
    assert!(deep.is_match(Path::new("/work/lib/a.json")));
    assert!(deep.is_match(Path::new("/work/lib/x/y/a.json")));
    assert!(!deep.is_match(Path::new("/work/lib/a.txt")));

    let shallow = PathPattern::new("lib/*.json", Path::new("/work")).unwrap();
    assert!(shallow.is_match(Path::new("/work/lib/a.json")));
    assert!(!shallow.is_match(Path::new("/work/lib/x/a.json")));
}

#[test]
fn absolute_pattern_ignores_base() {
    let pattern = PathPattern::new("/data/*.json", Path::new("/work")).unwrap();
    assert_eq!(pattern.root(), Path::new("/data"));
    assert!(pattern.is_match(Path::new("/data/a.json")));
}

#[test]
fn existing_directory_expands_to_all_manifests() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lib/nested")).unwrap();

    let pattern = PathPattern::new("lib", dir.path()).unwrap();

    assert_eq!(pattern.root(), dir.path().join("lib"));
    assert!(pattern.is_match(&dir.path().join("lib/nested/a.json")));
    assert!(!pattern.is_match(&dir.path().join("lib/nested/a.rb")));
}

#[test]
fn invalid_glob_is_reported() {
    let err = PathPattern::new("lib/[unclosed", Path::new("/work")).unwrap_err();
    assert!(matches!(
        err,
        DocGuardError::InvalidPattern { ref pattern, .. } if pattern == "lib/[unclosed"
    ));
}

#[test]
fn literal_prefix_stops_at_first_glob_component() {
    assert_eq!(
        literal_prefix(Path::new("a/b*/c")),
        PathBuf::from("a")
    );
    assert_eq!(literal_prefix(Path::new("a/b/c")), PathBuf::from("a/b/c"));
}

#[test]
fn literal_patterns_are_flagged() {
    let base = Path::new("/work");
    assert!(PathPattern::new("lib/foo.json", base).unwrap().is_literal());
    assert!(!PathPattern::new("lib/*.json", base).unwrap().is_literal());
    assert!(!PathPattern::new("lib/**/*.json", base).unwrap().is_literal());
}
