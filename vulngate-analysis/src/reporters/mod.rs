//! Reporters — output formats for a build's gate outcome.

pub mod console;
pub mod json;

use crate::gates::BuildVerdict;
use crate::result::ScanResult;

/// Trait for rendering a build's result and verdict.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, result: &ScanResult, verdict: BuildVerdict) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
