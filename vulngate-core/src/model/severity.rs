//! Severity tiers and scanner-string normalization.

use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered from least to most severe so that
/// `Critical > High > Medium > Low > Info > Unassigned` under `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Unassigned,
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All tiers, most severe first.
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
        Severity::Unassigned,
    ];

    /// Integer rank used for comparison: Critical = 5 down to Unassigned = 0.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 5,
            Severity::High => 4,
            Severity::Medium => 3,
            Severity::Low => 2,
            Severity::Info => 1,
            Severity::Unassigned => 0,
        }
    }

    /// True when `self` is at least as severe as `other`.
    pub fn is_at_least(self, other: Severity) -> bool {
        self.rank() >= other.rank()
    }

    /// Canonical upper-case name of the tier.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
            Severity::Unassigned => "UNASSIGNED",
        }
    }

    /// Normalize an arbitrary scanner-reported severity string.
    ///
    /// Case-insensitive, trims surrounding whitespace, and maps the synonyms
    /// scanners actually emit: `MODERATE` to `Medium`, `INFORMATIONAL` to
    /// `Info`, `UNKNOWN` to `Unassigned`. Blank or unrecognized input falls
    /// back to `Unassigned`. Total: never fails.
    ///
    /// Note that the bare string `INFO` is not a scanner severity and is not
    /// recognized; informational findings arrive as `INFORMATIONAL`.
    pub fn normalize(raw: &str) -> Severity {
        match raw.trim().to_uppercase().as_str() {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" | "MODERATE" => Severity::Medium,
            "LOW" => Severity::Low,
            "INFORMATIONAL" => Severity::Info,
            _ => Severity::Unassigned,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
