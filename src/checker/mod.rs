mod threshold;

pub use threshold::{ThresholdChecker, ThresholdOutcome};
