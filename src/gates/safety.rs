//! Fails the build when safety reports any vulnerable dependency.

use std::{fmt::Display, path::Path};

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::{
    Exit,
    gates::{describe, is_truthy, load_report},
};

/// The report safety writes with `--json`.
pub const REPORT: &str = "safety-report.json";

/// Represents a safety JSON report.
#[derive(Debug, Default, Deserialize)]
pub struct SafetyReport {
    /// The vulnerable dependencies. Any non-empty value fails the build, whatever its shape.
    #[serde(default)]
    pub vulnerabilities: Value,
}

/// Represents one vulnerable dependency of a safety JSON report, kept as raw JSON for logs.
#[derive(Debug, Deserialize)]
pub struct Vulnerability {
    /// The vulnerable package.
    pub package_name: Option<Value>,
    /// The installed version.
    pub analyzed_version: Option<Value>,
    /// The advisory id.
    pub vulnerability_id: Option<Value>,
}

impl Display for Vulnerability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            describe(self.package_name.as_ref()),
            describe(self.analyzed_version.as_ref()),
            describe(self.vulnerability_id.as_ref())
        )
    }
}

impl SafetyReport {
    /// The entries of a list of vulnerabilities that can be described; empty for other shapes.
    pub fn entries(&self) -> Vec<Vulnerability> {
        match &self.vulnerabilities {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| Vulnerability::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Decides the exit status of a loaded report.
pub fn evaluate(report: &SafetyReport) -> Exit {
    if !is_truthy(&report.vulnerabilities) {
        info!("no safety vulnerabilities");
        return Exit::Success;
    }

    for vulnerability in report.entries() {
        error!(" - {vulnerability}");
    }
    error!("safety reported vulnerabilities");
    Exit::Findings
}

/// Checks the report at `path`. An absent or unparsable report passes.
pub fn check(path: &Path) -> Exit {
    match load_report::<SafetyReport>(path) {
        Some(report) => evaluate(&report),
        None => Exit::Success,
    }
}
