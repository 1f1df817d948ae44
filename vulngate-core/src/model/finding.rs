//! Findings: one vulnerability on one scanned dependency.

use serde::{Deserialize, Serialize};

use super::{Dependency, Severity, Vulnerability};

/// An immutable pair of one `Dependency` and one `Vulnerability` reported
/// against it.
///
/// Equality and ordering are lexicographic, dependency first, then
/// vulnerability. Two findings from different report files with the same
/// composite key are the same finding for deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Finding {
    dependency: Dependency,
    vulnerability: Vulnerability,
}

impl Finding {
    pub fn new(dependency: Dependency, vulnerability: Vulnerability) -> Self {
        Self {
            dependency,
            vulnerability,
        }
    }

    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    pub fn vulnerability(&self) -> &Vulnerability {
        &self.vulnerability
    }

    /// The vulnerability's severity after scanner-string normalization.
    /// A missing severity normalizes to `Unassigned`.
    pub fn normalized_severity(&self) -> Severity {
        self.vulnerability
            .severity
            .as_deref()
            .map_or(Severity::Unassigned, Severity::normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(file_name: &str, cve: &str, severity: &str) -> Finding {
        let dependency = Dependency {
            file_name: Some(file_name.to_string()),
            ..Dependency::default()
        };
        let vulnerability = Vulnerability {
            name: Some(cve.to_string()),
            severity: Some(severity.to_string()),
            ..Vulnerability::default()
        };
        Finding::new(dependency, vulnerability)
    }

    #[test]
    fn test_normalized_severity() {
        assert_eq!(
            finding("a.jar", "CVE-1", "moderate").normalized_severity(),
            Severity::Medium
        );
        let absent = Finding::new(Dependency::default(), Vulnerability::default());
        assert_eq!(absent.normalized_severity(), Severity::Unassigned);
    }

    #[test]
    fn test_ordering_dependency_then_vulnerability() {
        let a = finding("a.jar", "CVE-2", "HIGH");
        let b = finding("b.jar", "CVE-1", "HIGH");
        assert!(a < b);

        let c = finding("a.jar", "CVE-1", "HIGH");
        assert!(c < a);
    }

    #[test]
    fn test_equality_is_composite_key() {
        let a = finding("a.jar", "CVE-1", "HIGH");
        let b = finding("a.jar", "CVE-1", "HIGH");
        assert_eq!(a, b);
        assert_ne!(a, finding("a.jar", "CVE-1", "LOW"));
    }
}
