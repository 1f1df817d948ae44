//! Top-level gate configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Thresholds;
use crate::errors::ConfigError;

fn default_report_pattern() -> String {
    "**/dependency-check-report.xml".to_string()
}

/// Configuration for one build's gate evaluation.
///
/// Everything is optional: an empty TOML document yields a config that
/// selects the default report pattern and never fails a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Glob pattern used to select report files under the build workspace.
    pub report_pattern: String,
    /// When true, the host should abort the build on a failed verdict
    /// instead of merely marking it failed. The core only carries the flag.
    pub stop_build: bool,
    pub thresholds: Thresholds,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            report_pattern: default_report_pattern(),
            stop_build: false,
            thresholds: Thresholds::default(),
        }
    }
}

impl GateConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
