//! Per-build severity count vector.

use serde::{Deserialize, Serialize};

use super::Severity;

/// Count of findings per severity tier for one build.
///
/// Built incrementally by [`add`](SeverityDistribution::add); the sum of all
/// counters equals the number of distinct findings added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityDistribution {
    build_number: u32,
    critical: u32,
    high: u32,
    medium: u32,
    low: u32,
    info: u32,
    unassigned: u32,
}

impl SeverityDistribution {
    pub fn new(build_number: u32) -> Self {
        Self {
            build_number,
            ..Self::default()
        }
    }

    pub fn build_number(&self) -> u32 {
        self.build_number
    }

    /// Increment exactly one counter.
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Info => self.info += 1,
            Severity::Unassigned => self.unassigned += 1,
        }
    }

    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
            Severity::Unassigned => self.unassigned,
        }
    }

    pub fn critical(&self) -> u32 {
        self.critical
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn medium(&self) -> u32 {
        self.medium
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn info(&self) -> u32 {
        self.info
    }

    pub fn unassigned(&self) -> u32 {
        self.unassigned
    }

    /// Sum of all six counters.
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.info + self.unassigned
    }
}
