use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, Report};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text report.
///
/// ```text
/// lib/foo.rb:10: Foo#bar
///   [Summary::Presence] The method summary should be specified
///
/// Coverage: 67%  Success: 2  Failed: 1  Total: 3
/// FAILED: Coverage must be at least 100% but was 67%
/// ```
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_failures(&self, report: &Report<'_>, output: &mut String) {
        for group in report.measurements.failures_by_document() {
            let header = format!("{}: {}", group.location, group.document);
            writeln!(output, "{}", self.colorize(&header, ansi::CYAN)).ok();
            for measurement in group.failures {
                writeln!(
                    output,
                    "  [{}] {}",
                    measurement.rule(),
                    measurement.description().unwrap_or_default()
                )
                .ok();
            }
        }
    }

    fn format_summary(&self, report: &Report<'_>, output: &mut String) {
        let set = report.measurements;
        writeln!(
            output,
            "Coverage: {}%  Success: {}  Failed: {}  Total: {}",
            set.coverage(),
            self.colorize(&set.passed_count().to_string(), ansi::GREEN),
            self.colorize(&set.failed_count().to_string(), ansi::RED),
            set.len()
        )
        .ok();

        let status = if report.outcome.is_success() {
            self.colorize("PASSED", ansi::GREEN)
        } else {
            self.colorize("FAILED", ansi::RED)
        };
        writeln!(output, "{status}: {}", report.outcome).ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut output = String::new();

        if report.verbose && report.measurements.failed_count() > 0 {
            self.format_failures(report, &mut output);
            writeln!(output).ok();
        }

        self.format_summary(report, &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
