use std::fmt;

use serde::Serialize;

use crate::config::Config;

/// Result of comparing coverage against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ThresholdOutcome {
    Met { coverage: u8, threshold: u8 },
    Below { coverage: u8, threshold: u8 },
    /// Coverage overshot the threshold in exact mode.
    Above { coverage: u8, threshold: u8 },
}

impl ThresholdOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Met { .. })
    }

    #[must_use]
    pub const fn coverage(&self) -> u8 {
        match self {
            Self::Met { coverage, .. }
            | Self::Below { coverage, .. }
            | Self::Above { coverage, .. } => *coverage,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> u8 {
        match self {
            Self::Met { threshold, .. }
            | Self::Below { threshold, .. }
            | Self::Above { threshold, .. } => *threshold,
        }
    }
}

impl fmt::Display for ThresholdOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Met {
                coverage,
                threshold,
            } => write!(f, "Coverage of {coverage}% meets the threshold of {threshold}%"),
            Self::Below {
                coverage,
                threshold,
            } => write!(
                f,
                "Coverage must be at least {threshold}% but was {coverage}%"
            ),
            Self::Above {
                coverage,
                threshold,
            } => write!(
                f,
                "Coverage has increased above the threshold of {threshold}% to {coverage}%. \
                 You should update your threshold value."
            ),
        }
    }
}

/// Decides success of a run from its coverage.
///
/// In exact mode only `coverage == threshold` succeeds, so both regressions
/// and unrecorded improvements fail. Otherwise the threshold is a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChecker {
    threshold: u8,
    require_exact: bool,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(threshold: u8, require_exact: bool) -> Self {
        Self {
            threshold,
            require_exact,
        }
    }

    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.threshold(), config.require_exact_threshold())
    }

    #[must_use]
    pub const fn check(&self, coverage: u8) -> ThresholdOutcome {
        let threshold = self.threshold;
        if coverage < threshold {
            ThresholdOutcome::Below {
                coverage,
                threshold,
            }
        } else if self.require_exact && coverage > threshold {
            ThresholdOutcome::Above {
                coverage,
                threshold,
            }
        } else {
            ThresholdOutcome::Met {
                coverage,
                threshold,
            }
        }
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
