//! JSON reporter for machine consumption.

use serde::Serialize;

use vulngate_core::model::Severity;

use super::Reporter;
use crate::gates::BuildVerdict;
use crate::result::ScanResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    build_number: u32,
    verdict: &'a str,
    severity_counts: Vec<JsonCount<'a>>,
    total_findings: usize,
    findings: &'a ScanResult,
}

#[derive(Serialize)]
struct JsonCount<'a> {
    severity: &'a str,
    count: u32,
}

/// JSON reporter emitting the full result plus a severity summary.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &ScanResult, verdict: BuildVerdict) -> Result<String, String> {
        let report = JsonReport {
            build_number: result.build_number(),
            verdict: verdict.name(),
            severity_counts: Severity::ALL
                .iter()
                .map(|&severity| JsonCount {
                    severity: severity.name(),
                    count: result.count(severity),
                })
                .collect(),
            total_findings: result.total_findings(),
            findings: result,
        };
        serde_json::to_string_pretty(&report).map_err(|e| e.to_string())
    }
}
