pub mod checker;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod measurement;
pub mod output;
pub mod pipeline;
pub mod rules;

pub use error::{DocGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
