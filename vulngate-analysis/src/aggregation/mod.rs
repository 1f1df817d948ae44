//! Findings aggregation across report files.

use std::collections::BTreeMap;

use vulngate_core::model::{Finding, SeverityDistribution};

use crate::result::ScanResult;

/// Merges findings from any number of report files for one build into a
/// deduplicated, ordered set, while maintaining the running severity
/// distribution.
///
/// Ordering is the `Finding` comparison order (dependency identity, then
/// vulnerability identity); a finding with the same composite key seen again
/// only bumps its occurrence count. The distribution's total therefore
/// always equals the number of distinct findings. Not internally
/// synchronized: feed one aggregator from one thread.
#[derive(Debug)]
pub struct FindingsAggregator {
    distribution: SeverityDistribution,
    findings: BTreeMap<Finding, u32>,
}

impl FindingsAggregator {
    pub fn new(build_number: u32) -> Self {
        Self {
            distribution: SeverityDistribution::new(build_number),
            findings: BTreeMap::new(),
        }
    }

    /// Add the findings of one parsed report. Duplicates of already-seen
    /// findings are dropped from the set and counted as extra occurrences;
    /// an empty batch is a no-op.
    pub fn add_findings(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            let severity = finding.normalized_severity();
            let occurrences = self.findings.entry(finding).or_insert(0);
            *occurrences += 1;
            if *occurrences == 1 {
                self.distribution.add(severity);
            }
        }
    }

    /// All distinct findings seen so far, in the stable `Finding` sort
    /// order. The same input set always yields the same output order.
    pub fn aggregated_findings(&self) -> Vec<&Finding> {
        self.findings.keys().collect()
    }

    pub fn severity_distribution(&self) -> &SeverityDistribution {
        &self.distribution
    }

    /// How many times a finding was reported across all added batches;
    /// 0 when it was never added.
    pub fn occurrences(&self, finding: &Finding) -> u32 {
        self.findings.get(finding).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Freeze into the per-build result container.
    pub fn into_result(self) -> ScanResult {
        ScanResult::new(self.findings.into_keys().collect(), self.distribution)
    }
}
