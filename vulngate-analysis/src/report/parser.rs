//! Streaming parser for dependency-check XML reports.

use std::io::BufRead;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use vulngate_core::errors::ReportError;
use vulngate_core::model::{
    CvssV2, CvssV3, Dependency, Finding, Reference, Vulnerability, VulnerabilitySource,
};

use super::EngineVersion;

/// Parse one vulnerability-scan report into findings, one per
/// (dependency, vulnerability) pair, in document order.
///
/// Fails fast on malformed XML, a root element other than `analysis`, an
/// unsupported engine schema version, or any DOCTYPE declaration (external
/// entities are never resolved). No partial results are returned on failure.
pub fn parse(input: impl BufRead) -> Result<Vec<Finding>, ReportError> {
    let mut reader = Reader::from_reader(input);
    let mut state = ParseState::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::DocType(_)) => return Err(ReportError::DoctypeForbidden),
            Ok(Event::Start(ref e)) => state.open_element(e)?,
            Ok(Event::Empty(ref e)) => {
                // Self-closing leaves carry no text; open/close for the
                // container bookkeeping only.
                state.open_element(e)?;
                state.close_element(e.local_name().as_ref());
            }
            Ok(Event::Text(ref e)) => {
                let raw = String::from_utf8_lossy(e.as_ref()).to_string();
                let text = unescape(&raw)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|_| raw.clone());
                state.text.push_str(&text);
            }
            Ok(Event::CData(ref e)) => {
                state.text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::End(ref e)) => state.close_element(e.local_name().as_ref()),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ReportError::Xml(e.to_string())),
        }
        buf.clear();
    }

    if !state.saw_root {
        return Err(ReportError::NotAReport);
    }

    // Reports written by engines older than 5.0.0 use an incompatible
    // schema; a missing scanInfo block parses as version 0.0.0.
    let version = EngineVersion::parse(state.engine_version.as_deref().unwrap_or(""))?;
    if version < EngineVersion::MIN_SUPPORTED {
        return Err(ReportError::UnsupportedSchema {
            version: version.to_string(),
        });
    }

    let findings = convert(state.dependencies);
    debug!(count = findings.len(), engine = %version, "parsed report");
    Ok(findings)
}

fn convert(dependencies: Vec<Dependency>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for dependency in &dependencies {
        for vulnerability in &dependency.vulnerabilities {
            findings.push(Finding::new(dependency.clone(), vulnerability.clone()));
        }
    }
    findings
}

#[derive(Default)]
struct ParseState {
    saw_root: bool,
    in_scan_info: bool,
    in_project_references: bool,
    in_cwes: bool,
    engine_version: Option<String>,
    dependencies: Vec<Dependency>,
    dependency: Option<Dependency>,
    vulnerability: Option<Vulnerability>,
    cvss_v2: Option<CvssV2>,
    cvss_v3: Option<CvssV3>,
    reference: Option<Reference>,
    text: String,
}

impl ParseState {
    fn open_element(&mut self, element: &BytesStart<'_>) -> Result<(), ReportError> {
        let name = String::from_utf8_lossy(element.local_name().as_ref()).to_string();

        if !self.saw_root {
            if name != "analysis" {
                return Err(ReportError::NotAReport);
            }
            self.saw_root = true;
            self.text.clear();
            return Ok(());
        }

        match name.as_str() {
            "scanInfo" => self.in_scan_info = true,
            "dependency" => self.dependency = Some(Dependency::default()),
            "projectReferences" => self.in_project_references = true,
            "cwes" => self.in_cwes = true,
            "vulnerability" => {
                let mut vulnerability = Vulnerability::default();
                for attr in element.attributes().flatten() {
                    if attr.key.local_name().as_ref() == b"source" {
                        let value = String::from_utf8_lossy(&attr.value);
                        vulnerability.source = VulnerabilitySource::parse(&value);
                    }
                }
                self.vulnerability = Some(vulnerability);
            }
            "cvssV2" => self.cvss_v2 = Some(CvssV2::default()),
            "cvssV3" => self.cvss_v3 = Some(CvssV3::default()),
            "reference" => self.reference = Some(Reference::default()),
            _ => {}
        }

        self.text.clear();
        Ok(())
    }

    fn close_element(&mut self, local_name: &[u8]) {
        let name = String::from_utf8_lossy(local_name).to_string();
        let value = self.text.trim().to_string();
        self.text.clear();
        let value = (!value.is_empty()).then_some(value);

        // Containers first, then leaves in innermost-scope-first order:
        // several leaf names (name, source, severity, description,
        // integrityImpact) repeat across nesting levels.
        match name.as_str() {
            "scanInfo" => self.in_scan_info = false,
            "projectReferences" => self.in_project_references = false,
            "cwes" => self.in_cwes = false,
            "reference" => {
                if let (Some(reference), Some(vulnerability)) =
                    (self.reference.take(), self.vulnerability.as_mut())
                {
                    vulnerability.references.push(reference);
                }
            }
            "cvssV2" => {
                if let (Some(cvss), Some(vulnerability)) =
                    (self.cvss_v2.take(), self.vulnerability.as_mut())
                {
                    vulnerability.cvss_v2 = Some(cvss);
                }
            }
            "cvssV3" => {
                if let (Some(cvss), Some(vulnerability)) =
                    (self.cvss_v3.take(), self.vulnerability.as_mut())
                {
                    vulnerability.cvss_v3 = Some(cvss);
                }
            }
            "vulnerability" => {
                if let (Some(vulnerability), Some(dependency)) =
                    (self.vulnerability.take(), self.dependency.as_mut())
                {
                    dependency.vulnerabilities.push(vulnerability);
                }
            }
            "dependency" => {
                if let Some(dependency) = self.dependency.take() {
                    self.dependencies.push(dependency);
                }
            }
            "projectReference" => {
                if self.in_project_references {
                    if let (Some(dependency), Some(value)) = (self.dependency.as_mut(), value) {
                        dependency.project_references.push(value);
                    }
                }
            }
            "cwe" => {
                if self.in_cwes {
                    if let (Some(vulnerability), Some(value)) =
                        (self.vulnerability.as_mut(), value)
                    {
                        vulnerability.cwes.push(value);
                    }
                }
            }
            "engineVersion" => {
                if self.in_scan_info {
                    self.engine_version = value;
                }
            }
            _ => {
                if let Some(reference) = self.reference.as_mut() {
                    set_reference_field(reference, &name, value);
                } else if let Some(cvss) = self.cvss_v2.as_mut() {
                    set_cvss_v2_field(cvss, &name, value);
                } else if let Some(cvss) = self.cvss_v3.as_mut() {
                    set_cvss_v3_field(cvss, &name, value);
                } else if let Some(vulnerability) = self.vulnerability.as_mut() {
                    set_vulnerability_field(vulnerability, &name, value);
                } else if let Some(dependency) = self.dependency.as_mut() {
                    set_dependency_field(dependency, &name, value);
                }
            }
        }
    }
}

fn set_reference_field(reference: &mut Reference, name: &str, value: Option<String>) {
    match name {
        "source" => reference.source = value,
        "url" => reference.url = value,
        "name" => reference.name = value,
        _ => {}
    }
}

fn set_cvss_v2_field(cvss: &mut CvssV2, name: &str, value: Option<String>) {
    match name {
        "score" => cvss.score = value,
        "accessVector" => cvss.access_vector = value,
        "accessComplexity" => cvss.access_complexity = value,
        "authenticationr" => cvss.authenticationr = value,
        "confidentialImpact" => cvss.confidential_impact = value,
        "integrityImpact" => cvss.integrity_impact = value,
        "availabilityImpact" => cvss.availability_impact = value,
        "severity" => cvss.severity = value,
        _ => {}
    }
}

fn set_cvss_v3_field(cvss: &mut CvssV3, name: &str, value: Option<String>) {
    match name {
        "baseScore" => cvss.base_score = value,
        "attackVector" => cvss.attack_vector = value,
        "attackComplexity" => cvss.attack_complexity = value,
        "privilegesRequired" => cvss.privileges_required = value,
        "userInteraction" => cvss.user_interaction = value,
        "scope" => cvss.scope = value,
        "confidentialityImpact" => cvss.confidentiality_impact = value,
        "integrityImpact" => cvss.integrity_impact = value,
        "availabilityImpact" => cvss.availability_impact = value,
        "baseSeverity" => cvss.base_severity = value,
        _ => {}
    }
}

fn set_vulnerability_field(vulnerability: &mut Vulnerability, name: &str, value: Option<String>) {
    match name {
        "name" => vulnerability.name = value,
        "description" => vulnerability.description = value,
        "severity" => vulnerability.severity = value,
        _ => {}
    }
}

fn set_dependency_field(dependency: &mut Dependency, name: &str, value: Option<String>) {
    match name {
        "fileName" => dependency.file_name = value,
        "filePath" => dependency.file_path = value,
        "md5" => dependency.md5 = value,
        "sha1" => dependency.sha1 = value,
        "sha256" => dependency.sha256 = value,
        "description" => dependency.description = value,
        "license" => dependency.license = value,
        _ => {}
    }
}
