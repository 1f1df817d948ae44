//! Per-build result container.

use serde::{Deserialize, Serialize};

use vulngate_core::model::{Finding, Severity, SeverityDistribution};

/// The aggregated outcome of one build's report ingestion: the deduplicated
/// findings in their stable sort order plus the severity distribution.
///
/// Immutable after construction; the host persists this, answers per-severity
/// count queries from it, and replays its distribution into a later gate
/// evaluation as "the previous build".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    findings: Vec<Finding>,
    distribution: SeverityDistribution,
}

impl ScanResult {
    pub fn new(findings: Vec<Finding>, distribution: SeverityDistribution) -> Self {
        Self {
            findings,
            distribution,
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn severity_distribution(&self) -> &SeverityDistribution {
        &self.distribution
    }

    pub fn build_number(&self) -> u32 {
        self.distribution.build_number()
    }

    pub fn count(&self, severity: Severity) -> u32 {
        self.distribution.count(severity)
    }

    pub fn total_findings(&self) -> usize {
        self.findings.len()
    }
}
