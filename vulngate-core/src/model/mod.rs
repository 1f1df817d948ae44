//! Normalized finding model.
//!
//! One scan report produces a list of `Finding`s, each pairing a scanned
//! `Dependency` with one `Vulnerability` reported against it. Identity and
//! ordering on these types drive deduplication across report files.

pub mod dependency;
pub mod distribution;
pub mod finding;
pub mod severity;
pub mod vulnerability;

pub use dependency::Dependency;
pub use distribution::SeverityDistribution;
pub use finding::Finding;
pub use severity::Severity;
pub use vulnerability::{CvssV2, CvssV3, Reference, Vulnerability, VulnerabilitySource};
