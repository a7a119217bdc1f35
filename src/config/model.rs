use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::output::ReportOutput;
use crate::rules::{DelimiterStyle, RuleId};

/// Default coverage threshold, in percent.
pub const DEFAULT_THRESHOLD: u8 = 100;

/// Default glob of entity manifests to scan.
pub const DEFAULT_PATH: &str = "lib/**/*.json";

/// Fully resolved run configuration.
///
/// Built once per run by [`Config::resolve`]. Only `path` and `output` can be
/// changed afterwards, through their setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    threshold: u8,
    require_exact_threshold: bool,
    verbose: bool,
    path: Vec<String>,
    rules: IndexMap<RuleId, RuleConfig>,
    output: ReportOutput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            require_exact_threshold: true,
            verbose: true,
            path: vec![DEFAULT_PATH.to_string()],
            rules: IndexMap::new(),
            output: ReportOutput::Stdout,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    #[must_use]
    pub const fn require_exact_threshold(&self) -> bool {
        self.require_exact_threshold
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Glob patterns of entity manifests to scan.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    #[must_use]
    pub const fn output(&self) -> &ReportOutput {
        &self.output
    }

    /// Explicitly configured rules, in config order.
    #[must_use]
    pub const fn rules(&self) -> &IndexMap<RuleId, RuleConfig> {
        &self.rules
    }

    /// Configuration slice for a rule, falling back to the rule defaults.
    #[must_use]
    pub fn rule_config(&self, id: RuleId) -> Cow<'_, RuleConfig> {
        self.rules
            .get(&id)
            .map_or_else(|| Cow::Owned(RuleConfig::default()), Cow::Borrowed)
    }

    pub fn set_path(&mut self, path: Vec<String>) {
        self.path = path;
    }

    pub fn set_output(&mut self, output: impl Into<ReportOutput>) {
        self.output = output.into();
    }

    pub(super) const fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    pub(super) const fn set_require_exact_threshold(&mut self, exact: bool) {
        self.require_exact_threshold = exact;
    }

    pub(super) const fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub(super) fn insert_rule(&mut self, id: RuleId, rule: RuleConfig) {
        self.rules.insert(id, rule);
    }
}

/// Per-rule settings, the `[rules."Rule::Id"]` tables of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Disabled rules still run but yield no measurements.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Weight of each measurement in the coverage score.
    #[serde(default = "default_weight")]
    pub weight: u32,

    /// Entity identifiers this rule skips (e.g. `Foo#bar`).
    #[serde(default)]
    pub exclude: Vec<String>,

    /// `Summary::Length`: maximum summary length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// `Summary::Delimiter`: expected summary ending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<DelimiterStyle>,

    /// `ExampleTag`: only check public methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_only: Option<bool>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            weight: default_weight(),
            exclude: Vec::new(),
            max_length: None,
            delimiter: None,
            public_only: None,
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn excludes(&self, entity: &str) -> bool {
        self.exclude.iter().any(|e| e == entity)
    }

    /// Names of the rule-specific options set in this table.
    #[must_use]
    pub fn option_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.max_length.is_some() {
            keys.push("max_length");
        }
        if self.delimiter.is_some() {
            keys.push("delimiter");
        }
        if self.public_only.is_some() {
            keys.push("public_only");
        }
        keys
    }
}

/// One layer of configuration: the contents of a config file or a set of
/// explicit overrides. Unset fields leave the lower layer untouched.
///
/// Unknown top-level keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_exact_threshold: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathList>,

    /// Report destination: a file path, or `-` for stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Rule tables keyed by rule identity. Keys are resolved at merge time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<IndexMap<String, RuleConfig>>,
}

/// `path` accepts a single glob or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    One(String),
    Many(Vec<String>),
}

impl PathList {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(path) => vec![path],
            Self::Many(paths) => paths,
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_weight() -> u32 {
    1
}
