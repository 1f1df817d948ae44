//! Scanned dependency files.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Vulnerability;

/// One scanned artifact/file from a report, together with the
/// vulnerabilities reported against it.
///
/// Identity, equality, and ordering are defined by the tuple
/// `(file_name, file_path, md5, sha1, sha256)` compared field-by-field;
/// description, license, project references, and the vulnerability list
/// do not participate. This is the key used for deduplication across
/// report files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dependency {
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub project_references: Vec<String>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl Dependency {
    fn identity(&self) -> (
        Option<&str>,
        Option<&str>,
        Option<&str>,
        Option<&str>,
        Option<&str>,
    ) {
        (
            self.file_name.as_deref(),
            self.file_path.as_deref(),
            self.md5.as_deref(),
            self.sha1.as_deref(),
            self.sha256.as_deref(),
        )
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Dependency {}

impl Ord for Dependency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for Dependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for Dependency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
