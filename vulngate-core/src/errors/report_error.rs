//! Report parsing errors.

use super::error_code::{self, VulngateErrorCode};

/// Errors raised while parsing one vulnerability-scan report document.
///
/// The parser fails fast: none of these variants come with partial results.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Malformed XML: {0}")]
    Xml(String),

    #[error("DOCTYPE declarations are not allowed in report files")]
    DoctypeForbidden,

    #[error("Input is not a dependency-check report file")]
    NotAReport,

    #[error("Unsupported report schema version: engine {version}")]
    UnsupportedSchema { version: String },

    #[error("Invalid engine version \"{input}\"")]
    InvalidVersion { input: String },
}

impl VulngateErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
