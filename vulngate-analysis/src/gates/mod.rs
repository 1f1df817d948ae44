//! Risk gate — threshold comparison producing a build verdict.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vulngate_core::config::Thresholds;
use vulngate_core::model::{Severity, SeverityDistribution};

/// Verdict of a gate evaluation, ordered by severity of outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildVerdict {
    Success,
    Unstable,
    Failure,
}

impl BuildVerdict {
    pub fn name(self) -> &'static str {
        match self {
            BuildVerdict::Success => "SUCCESS",
            BuildVerdict::Unstable => "UNSTABLE",
            BuildVerdict::Failure => "FAILURE",
        }
    }
}

impl std::fmt::Display for BuildVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Only these tiers carry threshold configuration; info and unassigned
/// findings count toward the distribution but never move the verdict.
const GATED_SEVERITIES: [Severity; 4] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
];

/// Evaluates current (and optionally previous-build) severity distributions
/// against configured thresholds.
///
/// Failure always wins over instability: the total-findings and new-findings
/// failure passes return immediately, while an unstable trigger is held as a
/// pending verdict until all rules have run. Threshold values are taken as
/// supplied; the only checks performed are on unset fields.
#[derive(Debug, Clone)]
pub struct RiskGate {
    thresholds: Thresholds,
}

impl RiskGate {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Apply the threshold rules to the current build's distribution, with
    /// `previous` supplying the baseline for the new-findings rules.
    ///
    /// Without a previous distribution (first-ever run, or its result was
    /// not retrievable) the new-findings rules are skipped entirely, so only
    /// total thresholds can produce a non-success verdict.
    pub fn evaluate(
        &self,
        previous: Option<&SeverityDistribution>,
        current: &SeverityDistribution,
    ) -> BuildVerdict {
        let mut verdict = BuildVerdict::Success;

        let totals = &self.thresholds.total_findings;
        for severity in GATED_SEVERITIES {
            let count = current.count(severity);
            if breaches(count, totals.failed(severity)) {
                debug!(%severity, count, "total-findings failure threshold breached");
                return BuildVerdict::Failure;
            }
        }
        for severity in GATED_SEVERITIES {
            let count = current.count(severity);
            if breaches(count, totals.unstable(severity)) {
                debug!(%severity, count, "total-findings unstable threshold breached");
                verdict = BuildVerdict::Unstable;
                break;
            }
        }

        if let Some(previous) = previous {
            let news = &self.thresholds.new_findings;
            for severity in GATED_SEVERITIES {
                let count = current.count(severity);
                let baseline = previous.count(severity);
                if breaches_delta(count, baseline, news.failed(severity)) {
                    debug!(%severity, count, baseline, "new-findings failure threshold breached");
                    return BuildVerdict::Failure;
                }
            }
            for severity in GATED_SEVERITIES {
                let count = current.count(severity);
                let baseline = previous.count(severity);
                if breaches_delta(count, baseline, news.unstable(severity)) {
                    debug!(%severity, count, baseline, "new-findings unstable threshold breached");
                    verdict = BuildVerdict::Unstable;
                    break;
                }
            }
        }

        verdict
    }
}

/// A total threshold triggers when it is configured and the current count is
/// both non-zero and at or above the ceiling.
fn breaches(count: u32, threshold: Option<u32>) -> bool {
    threshold.is_some_and(|t| count > 0 && count >= t)
}

/// A new-findings threshold triggers on the increase over the previous
/// build: `current >= previous + threshold`, with the same non-zero guard.
fn breaches_delta(count: u32, baseline: u32, threshold: Option<u32>) -> bool {
    threshold.is_some_and(|t| count > 0 && count >= baseline.saturating_add(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaches_requires_nonzero_count() {
        assert!(!breaches(0, Some(0)));
        assert!(breaches(1, Some(0)));
        assert!(breaches(3, Some(3)));
        assert!(!breaches(2, Some(3)));
        assert!(!breaches(100, None));
    }

    #[test]
    fn test_breaches_delta() {
        assert!(breaches_delta(5, 3, Some(2)));
        assert!(!breaches_delta(4, 3, Some(2)));
        assert!(!breaches_delta(0, 0, Some(0)));
        assert!(breaches_delta(1, 1, Some(0)));
        assert!(!breaches_delta(9, 0, None));
    }

    #[test]
    fn test_breaches_delta_saturates_on_extreme_threshold() {
        assert!(breaches_delta(u32::MAX, 1, Some(u32::MAX)));
        assert!(!breaches_delta(u32::MAX - 1, 1, Some(u32::MAX)));
    }

    #[test]
    fn test_verdict_ordering() {
        assert!(BuildVerdict::Failure > BuildVerdict::Unstable);
        assert!(BuildVerdict::Unstable > BuildVerdict::Success);
    }
}
