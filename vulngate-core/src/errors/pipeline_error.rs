//! Pipeline errors and non-fatal error collection.

use super::error_code::{self, VulngateErrorCode};
use super::{ConfigError, ReportError};

/// Errors that can occur while collecting findings across report files.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Report {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: ReportError,
    },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl VulngateErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Report { source, .. } => source.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a multi-report run that accumulates non-fatal errors.
///
/// A single unparsable report file is skipped and recorded here instead of
/// failing the whole build evaluation; the remaining valid files still
/// contribute to `data`.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
