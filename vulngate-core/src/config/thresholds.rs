//! Risk-gate thresholds.

use serde::{Deserialize, Serialize};

use crate::model::Severity;

/// Ceilings for one gate pass, per severity and target state.
///
/// An unset field means no limit is configured for that severity/state. A
/// value of 0 is valid and means any occurrence at all triggers, since the
/// gate rule additionally requires `count > 0`. No range validation is
/// performed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdGroup {
    pub unstable_critical: Option<u32>,
    pub unstable_high: Option<u32>,
    pub unstable_medium: Option<u32>,
    pub unstable_low: Option<u32>,
    pub failed_critical: Option<u32>,
    pub failed_high: Option<u32>,
    pub failed_medium: Option<u32>,
    pub failed_low: Option<u32>,
    /// Carried in the model for host compatibility; not consulted by the
    /// gate evaluation.
    pub limit_to_analysis_exploitable: bool,
}

impl ThresholdGroup {
    /// The failed-state ceiling for a severity. Info and unassigned findings
    /// have no configuration fields and always return `None`.
    pub fn failed(&self, severity: Severity) -> Option<u32> {
        match severity {
            Severity::Critical => self.failed_critical,
            Severity::High => self.failed_high,
            Severity::Medium => self.failed_medium,
            Severity::Low => self.failed_low,
            Severity::Info | Severity::Unassigned => None,
        }
    }

    /// The unstable-state ceiling for a severity.
    pub fn unstable(&self, severity: Severity) -> Option<u32> {
        match severity {
            Severity::Critical => self.unstable_critical,
            Severity::High => self.unstable_high,
            Severity::Medium => self.unstable_medium,
            Severity::Low => self.unstable_low,
            Severity::Info | Severity::Unassigned => None,
        }
    }
}

/// The two independent threshold groups of a gate evaluation: absolute
/// ceilings on the current build, and ceilings on the increase relative to
/// the previous build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub total_findings: ThresholdGroup,
    pub new_findings: ThresholdGroup,
}
