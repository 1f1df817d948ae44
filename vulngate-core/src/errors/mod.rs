//! Error handling for Vulngate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::VulngateErrorCode;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
