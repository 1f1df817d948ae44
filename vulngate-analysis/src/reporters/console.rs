//! Console reporter — human-readable output with color codes.

use vulngate_core::model::Severity;

use super::Reporter;
use crate::gates::BuildVerdict;
use crate::result::ScanResult;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn verdict_symbol(&self, verdict: BuildVerdict) -> &'static str {
        match verdict {
            BuildVerdict::Success => "✓",
            BuildVerdict::Unstable => "⚠",
            BuildVerdict::Failure => "✗",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Critical => "\x1b[35m",   // magenta
            Severity::High => "\x1b[31m",       // red
            Severity::Medium => "\x1b[33m",     // yellow
            Severity::Low => "\x1b[36m",        // cyan
            Severity::Info => "\x1b[32m",       // green
            Severity::Unassigned => "\x1b[90m", // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, result: &ScanResult, verdict: BuildVerdict) -> Result<String, String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Dependency vulnerability gate — build #{}\n\n",
            result.build_number()
        ));

        for severity in Severity::ALL {
            let count = result.count(severity);
            output.push_str(&format!(
                "  {}{:<10}{} {}\n",
                self.color_start(severity),
                severity.name(),
                self.color_end(),
                count
            ));
        }

        output.push_str(&format!(
            "\n  total: {} distinct finding(s)\n",
            result.total_findings()
        ));
        output.push_str(&format!(
            "{} verdict: {}\n",
            self.verdict_symbol(verdict),
            verdict
        ));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vulngate_core::model::SeverityDistribution;

    #[test]
    fn test_generate_without_color() {
        let mut distribution = SeverityDistribution::new(12);
        distribution.add(Severity::High);

        let result = ScanResult::new(Vec::new(), distribution);
        let reporter = ConsoleReporter::new(false);
        let output = reporter
            .generate(&result, BuildVerdict::Unstable)
            .unwrap();

        assert!(output.contains("build #12"));
        assert!(output.contains("HIGH"));
        assert!(output.contains("verdict: UNSTABLE"));
        assert!(!output.contains("\x1b["));
    }
}
