//! Layered config resolution.
//!
//! Layers are applied in order (defaults, config file, explicit overrides).
//! A later layer wins per top-level key, and a rule table replaces the
//! previous table for the same rule as a whole.

use std::str::FromStr;

use crate::error::{DocGuardError, Result};
use crate::rules::RuleId;

use super::model::{Config, PartialConfig, RuleConfig};

impl Config {
    /// Resolve the run configuration from defaults and the given layers.
    ///
    /// # Errors
    /// Returns an error if any layer names an unknown rule, sets an option the
    /// rule does not support, or has an out-of-range threshold.
    pub fn resolve<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = PartialConfig>,
    {
        layers
            .into_iter()
            .try_fold(Self::default(), |config, layer| config.merged(layer))
    }

    /// Apply one layer on top of this config.
    ///
    /// # Errors
    /// See [`Config::resolve`].
    pub fn merged(mut self, layer: PartialConfig) -> Result<Self> {
        if let Some(threshold) = layer.threshold {
            validate_threshold(threshold)?;
            self.set_threshold(threshold);
        }
        if let Some(exact) = layer.require_exact_threshold {
            self.set_require_exact_threshold(exact);
        }
        if let Some(verbose) = layer.verbose {
            self.set_verbose(verbose);
        }
        if let Some(path) = layer.path {
            self.set_path(path.into_vec());
        }
        if let Some(output) = layer.output {
            self.set_output(output);
        }
        for (key, rule) in layer.rules.unwrap_or_default() {
            let id = resolve_rule_key(&key)?;
            validate_rule_options(id, &rule)?;
            self.insert_rule(id, rule);
        }
        Ok(self)
    }
}

/// Map a `[rules]` key to a registered rule identity.
///
/// # Errors
/// Returns [`DocGuardError::UnknownRule`] if the key names no built-in rule.
pub fn resolve_rule_key(key: &str) -> Result<RuleId> {
    RuleId::from_str(key)
}

fn validate_threshold(threshold: u8) -> Result<()> {
    if threshold > 100 {
        return Err(DocGuardError::Config(format!(
            "threshold must be between 0 and 100, got {threshold}"
        )));
    }
    Ok(())
}

fn validate_rule_options(id: RuleId, rule: &RuleConfig) -> Result<()> {
    let supported = id.options();
    if let Some(key) = rule
        .option_keys()
        .into_iter()
        .find(|key| !supported.contains(key))
    {
        return Err(DocGuardError::Config(format!(
            "rules.\"{id}\": option '{key}' is not supported by this rule"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
