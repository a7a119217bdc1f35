#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

/// A temporary project directory.
///
/// The directory is marked as a project root so config discovery never
/// escapes into the surrounding filesystem.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir(".git");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Writes `.doc-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doc-guard.toml", content);
    }

    /// Writes an entity manifest.
    pub fn create_manifest(&self, relative_path: &str, content: &str) {
        self.create_file(relative_path, content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully documented public method; every built-in rule passes.
pub const DOCUMENTED_MANIFEST: &str = r#"[
  {
    "path": "Calc#add",
    "kind": "method",
    "docstring": "Add two numbers.\n\nReturns their sum.",
    "tags": [
      {"name": "param", "param": "a", "types": ["Integer"]},
      {"name": "param", "param": "b", "types": ["Integer"]},
      {"name": "return", "types": ["Integer"]},
      {"name": "example", "text": "add(1, 2) # => 3"},
      {"name": "api", "text": "public"}
    ],
    "signature": {"params": ["a", "b"]},
    "location": {"file": "lib/calc.rb", "line": 4}
  }
]
"#;

/// A method with no documentation at all; every applicable rule fails.
pub const UNDOCUMENTED_MANIFEST: &str = r#"[
  {
    "path": "Calc#sub",
    "kind": "method",
    "signature": {"params": ["a", "b"]},
    "location": {"file": "lib/calc.rb", "line": 12}
  }
]
"#;
