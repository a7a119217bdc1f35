use serde::Serialize;

use crate::document::Location;

use super::Measurement;

/// Ordered collection of measurements for a run.
///
/// Order is document order, then rule order, then sub-check order. Nothing
/// in this type reorders measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    measurements: Vec<Measurement>,
}

/// Failing measurements of one document, for grouped reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailures<'a> {
    pub document: &'a str,
    pub location: &'a Location,
    pub failures: Vec<&'a Measurement>,
}

impl MeasurementSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measurements: Vec::new(),
        }
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.measurements.iter().filter(|m| m.is_passed()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.len() - self.passed_count()
    }

    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.measurements.iter().map(|m| u64::from(m.weight())).sum()
    }

    #[must_use]
    pub fn passed_weight(&self) -> u64 {
        self.measurements
            .iter()
            .filter(|m| m.is_passed())
            .map(|m| u64::from(m.weight()))
            .sum()
    }

    /// Weighted coverage percentage, rounded half up to an integer.
    ///
    /// An empty set (or one whose total weight is zero) is fully covered.
    #[must_use]
    pub fn coverage(&self) -> u8 {
        let total = self.total_weight();
        if total == 0 {
            return 100;
        }
        let passed = self.passed_weight();
        // round(100 * passed / total) with halves rounded up, in integers
        let rounded = (200 * passed + total) / (2 * total);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| m.is_failed())
    }

    /// Failing measurements grouped by document, in measurement order.
    ///
    /// Consecutive failures of the same document share a group; a document
    /// with no failures has no group.
    #[must_use]
    pub fn failures_by_document(&self) -> Vec<DocumentFailures<'_>> {
        let mut groups: Vec<DocumentFailures<'_>> = Vec::new();
        for measurement in self.failures() {
            match groups.last_mut() {
                Some(group)
                    if group.document == measurement.document()
                        && group.location == measurement.location() =>
                {
                    group.failures.push(measurement);
                }
                _ => groups.push(DocumentFailures {
                    document: measurement.document(),
                    location: measurement.location(),
                    failures: vec![measurement],
                }),
            }
        }
        groups
    }
}

impl From<Vec<Measurement>> for MeasurementSet {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }
}

impl FromIterator<Measurement> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self {
            measurements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Measurement> for MeasurementSet {
    fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        self.measurements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
