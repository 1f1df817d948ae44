//! Pipeline tests: report discovery, skip-on-error collection, evaluation.

use std::path::PathBuf;

use vulngate_analysis::gates::BuildVerdict;
use vulngate_analysis::pipeline::{collect_findings, evaluate_build, find_reports};
use vulngate_core::config::GateConfig;
use vulngate_core::errors::{ConfigError, PipelineError};
use vulngate_core::model::Severity;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn report_xml(file_name: &str, cve: &str, severity: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<analysis>
    <scanInfo><engineVersion>6.5.3</engineVersion></scanInfo>
    <dependencies>
        <dependency>
            <fileName>{file_name}</fileName>
            <filePath>/repo/{file_name}</filePath>
            <vulnerabilities>
                <vulnerability source="NVD">
                    <name>{cve}</name>
                    <severity>{severity}</severity>
                </vulnerability>
            </vulnerabilities>
        </dependency>
    </dependencies>
</analysis>
"#
    )
}

#[test]
fn test_find_reports_matches_pattern() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("module-a").join("target");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        nested.join("dependency-check-report.xml"),
        report_xml("a.jar", "CVE-1", "HIGH"),
    )
    .unwrap();
    std::fs::write(dir.path().join("unrelated.xml"), "<other/>").unwrap();

    let config = GateConfig::default();
    let paths = find_reports(dir.path(), &config.report_pattern).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("dependency-check-report.xml"));
}

#[test]
fn test_find_reports_empty_match_is_ok() {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = find_reports(dir.path(), "**/dependency-check-report.xml").unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_find_reports_invalid_pattern_is_config_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = find_reports(dir.path(), "***/report.xml").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Config(ConfigError::Pattern { .. })
    ));
}

#[test]
fn test_find_reports_root_with_metacharacters() {
    let dir = tempfile::TempDir::new().unwrap();
    let bracketed = dir.path().join("build [release]").join("target");
    std::fs::create_dir_all(&bracketed).unwrap();
    std::fs::write(
        bracketed.join("dependency-check-report.xml"),
        report_xml("a.jar", "CVE-1", "HIGH"),
    )
    .unwrap();

    let root = dir.path().join("build [release]");
    let paths = find_reports(&root, "**/dependency-check-report.xml").unwrap();
    assert_eq!(paths.len(), 1);
}

#[test]
fn test_collect_findings_across_files_deduplicates() {
    let dir = tempfile::TempDir::new().unwrap();
    let first = dir.path().join("report-1.xml");
    let second = dir.path().join("report-2.xml");
    // Both reports contain the same finding.
    std::fs::write(&first, report_xml("lib.jar", "CVE-2019-10088", "HIGH")).unwrap();
    std::fs::write(&second, report_xml("lib.jar", "CVE-2019-10088", "HIGH")).unwrap();

    let collected = collect_findings(3, &[first, second]);
    assert!(collected.is_clean());
    assert_eq!(collected.data.total_findings(), 1);
    assert_eq!(collected.data.count(Severity::High), 1);
    assert_eq!(collected.data.build_number(), 3);
}

#[test]
fn test_bad_file_is_skipped_not_fatal() {
    init_tracing();
    let dir = tempfile::TempDir::new().unwrap();
    let good = dir.path().join("good.xml");
    let bad = dir.path().join("bad.xml");
    let missing = dir.path().join("missing.xml");
    std::fs::write(&good, report_xml("lib.jar", "CVE-1", "CRITICAL")).unwrap();
    std::fs::write(&bad, "<analysis><oops></analysis>").unwrap();

    let collected = collect_findings(1, &[good, bad, missing]);
    assert_eq!(collected.error_count(), 2);
    assert_eq!(collected.data.total_findings(), 1);
    assert!(collected
        .errors
        .iter()
        .any(|e| matches!(e, PipelineError::Report { .. })));
    assert!(collected
        .errors
        .iter()
        .any(|e| matches!(e, PipelineError::Io { .. })));
}

#[test]
fn test_collect_with_no_files_yields_empty_result() {
    let collected = collect_findings(1, &[]);
    assert!(collected.is_clean());
    assert_eq!(collected.data.total_findings(), 0);
    assert_eq!(collected.data.severity_distribution().total(), 0);
}

#[test]
fn test_evaluate_build_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let report = dir.path().join("report.xml");
    std::fs::write(&report, report_xml("lib.jar", "CVE-1", "CRITICAL")).unwrap();

    let config = GateConfig::from_toml_str(
        r#"
[thresholds.total_findings]
failed_critical = 1
"#,
    )
    .unwrap();

    let outcome = evaluate_build(&config, 7, &[report], None);
    assert!(outcome.is_clean());
    assert_eq!(outcome.data.verdict, BuildVerdict::Failure);
    assert_eq!(outcome.data.result.count(Severity::Critical), 1);
}

#[test]
fn test_evaluate_build_with_no_reports_is_success() {
    let config = GateConfig::from_toml_str(
        r#"
[thresholds.total_findings]
failed_critical = 1
[thresholds.new_findings]
failed_high = 0
"#,
    )
    .unwrap();

    let paths: Vec<PathBuf> = Vec::new();
    let outcome = evaluate_build(&config, 1, &paths, None);
    assert_eq!(outcome.data.verdict, BuildVerdict::Success);
}
