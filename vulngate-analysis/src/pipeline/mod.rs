//! Multi-report pipeline: locate, parse, aggregate, evaluate.
//!
//! Each report file is parsed independently (in parallel); a file that fails
//! to parse is logged and recorded as a non-fatal error while the remaining
//! files still contribute to the build's result.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::warn;

use vulngate_core::config::GateConfig;
use vulngate_core::errors::{ConfigError, PipelineError, PipelineResult};
use vulngate_core::model::{Finding, SeverityDistribution};

use crate::aggregation::FindingsAggregator;
use crate::gates::{BuildVerdict, RiskGate};
use crate::report;
use crate::result::ScanResult;

/// A build's aggregated result together with its gate verdict.
#[derive(Debug)]
pub struct BuildOutcome {
    pub result: ScanResult,
    pub verdict: BuildVerdict,
}

impl Default for BuildOutcome {
    fn default() -> Self {
        Self {
            result: ScanResult::new(Vec::new(), SeverityDistribution::default()),
            verdict: BuildVerdict::Success,
        }
    }
}

/// Resolve the configured report glob under a workspace root. Returns the
/// matched paths in sorted order; a pattern matching nothing is not an
/// error here (the host decides what an empty file set means).
///
/// The root is a literal directory, so any glob metacharacters it contains
/// are escaped before the configured pattern is appended.
pub fn find_reports(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = if escaped_root.is_empty() {
        pattern.to_string()
    } else {
        format!("{}/{pattern}", escaped_root.trim_end_matches('/'))
    };
    let mut paths: Vec<PathBuf> = glob::glob(&full_pattern)
        .map_err(|e| {
            PipelineError::from(ConfigError::Pattern {
                pattern: full_pattern.clone(),
                message: e.to_string(),
            })
        })?
        .flatten()
        .collect();
    paths.sort();
    Ok(paths)
}

/// Parse every report file and aggregate the findings for one build.
///
/// Unreadable or unparsable files are skipped and recorded as non-fatal
/// errors; zero input files yield an empty result with a zero-valued
/// distribution.
pub fn collect_findings(build_number: u32, paths: &[PathBuf]) -> PipelineResult<ScanResult> {
    let parsed: Vec<Result<Vec<Finding>, PipelineError>> = paths
        .par_iter()
        .map(|path| parse_one(path))
        .collect();

    let mut aggregator = FindingsAggregator::new(build_number);
    let mut errors = Vec::new();
    for outcome in parsed {
        match outcome {
            Ok(findings) => aggregator.add_findings(findings),
            Err(error) => {
                warn!(%error, "skipping report file");
                errors.push(error);
            }
        }
    }

    let mut result = PipelineResult::new(aggregator.into_result());
    result.errors = errors;
    result
}

/// Collect findings and run the risk gate in one pass.
pub fn evaluate_build(
    config: &GateConfig,
    build_number: u32,
    paths: &[PathBuf],
    previous: Option<&SeverityDistribution>,
) -> PipelineResult<BuildOutcome> {
    let collected = collect_findings(build_number, paths);
    let gate = RiskGate::new(config.thresholds.clone());
    let verdict = gate.evaluate(previous, collected.data.severity_distribution());

    PipelineResult {
        data: BuildOutcome {
            result: collected.data,
            verdict,
        },
        errors: collected.errors,
    }
}

fn parse_one(path: &Path) -> Result<Vec<Finding>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    report::parse(BufReader::new(file)).map_err(|source| PipelineError::Report {
        path: path.display().to_string(),
        source,
    })
}
