//! Reported vulnerabilities and their pass-through CVSS data.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Advisory database that produced a vulnerability entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VulnerabilitySource {
    Nvd,
    Npm,
    RetireJs,
    OssIndex,
}

impl VulnerabilitySource {
    /// Parse the `source` attribute of a report's `<vulnerability>` element.
    /// Unrecognized databases map to `None` rather than failing the parse.
    pub fn parse(raw: &str) -> Option<VulnerabilitySource> {
        match raw.trim().to_uppercase().as_str() {
            "NVD" => Some(VulnerabilitySource::Nvd),
            "NPM" => Some(VulnerabilitySource::Npm),
            "RETIREJS" => Some(VulnerabilitySource::RetireJs),
            "OSSINDEX" => Some(VulnerabilitySource::OssIndex),
            _ => None,
        }
    }
}

/// CVSSv2 sub-scores as reported. Opaque pass-through data; the field
/// spelling `authenticationr` matches the report schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvssV2 {
    pub score: Option<String>,
    pub access_vector: Option<String>,
    pub access_complexity: Option<String>,
    pub authenticationr: Option<String>,
    pub confidential_impact: Option<String>,
    pub integrity_impact: Option<String>,
    pub availability_impact: Option<String>,
    pub severity: Option<String>,
}

/// CVSSv3 sub-scores as reported. Opaque pass-through data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvssV3 {
    pub base_score: Option<String>,
    pub attack_vector: Option<String>,
    pub attack_complexity: Option<String>,
    pub privileges_required: Option<String>,
    pub user_interaction: Option<String>,
    pub scope: Option<String>,
    pub confidentiality_impact: Option<String>,
    pub integrity_impact: Option<String>,
    pub availability_impact: Option<String>,
    pub base_severity: Option<String>,
}

/// An advisory reference attached to a vulnerability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub source: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
}

/// One vulnerability as reported against a dependency.
///
/// `severity` is kept as the raw scanner string and normalized only on read
/// via [`Severity::normalize`](super::Severity::normalize). Identity and
/// ordering compare `(name, source, severity)` field-by-field; the CVSS
/// blocks, references, cwes, and description are excluded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vulnerability {
    pub name: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub source: Option<VulnerabilitySource>,
    pub cvss_v2: Option<CvssV2>,
    pub cvss_v3: Option<CvssV3>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub cwes: Vec<String>,
}

impl Vulnerability {
    fn identity(&self) -> (Option<&str>, Option<VulnerabilitySource>, Option<&str>) {
        (self.name.as_deref(), self.source, self.severity.as_deref())
    }
}

impl PartialEq for Vulnerability {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Vulnerability {}

impl Ord for Vulnerability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for Vulnerability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for Vulnerability {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
