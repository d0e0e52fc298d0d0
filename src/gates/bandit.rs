//! Fails the build on bandit findings at or above a configurable severity.

use std::{fmt::Display, path::Path, str::FromStr};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    Exit,
    gates::{describe, load_report},
};

/// The report bandit writes with `-f json -o bandit-report.json`.
pub const REPORT: &str = "bandit-report.json";

/// The fail level used when none is configured.
pub const DEFAULT_FAIL_LEVEL: &str = "MEDIUM";

/// The severity of a bandit issue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Low severity.
    Low,
    /// Medium severity.
    Medium,
    /// High severity.
    High,
    /// Any other value, including none at all. Never fails the build.
    #[default]
    Other,
}

impl Severity {
    /// Orders severities from harmless to severe, [`Severity::Other`] being the most harmless.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Other => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Other,
        }
    }
}

/// Reads any JSON value, so that one odd severity cannot hide the rest of the report.
fn lenient_severity<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Severity::from(s.as_str()),
        _ => Severity::Other,
    })
}

/// Represents a bandit JSON report.
#[derive(Debug, Default, Deserialize)]
pub struct BanditReport {
    /// The findings, in report order.
    #[serde(default)]
    pub results: Vec<BanditIssue>,
}

/// Represents one finding of a bandit JSON report.
///
/// Only the severity is interpreted; the other fields are kept as raw JSON for logs.
#[derive(Debug, Deserialize)]
pub struct BanditIssue {
    /// The severity bandit assigned.
    #[serde(default, deserialize_with = "lenient_severity")]
    pub issue_severity: Severity,
    /// The bandit check, such as `B602`.
    pub test_id: Option<Value>,
    /// The offending file.
    pub filename: Option<Value>,
    /// The offending line.
    pub line_number: Option<Value>,
}

impl Display for BanditIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} {} at {}:{}",
            self.issue_severity,
            describe(self.test_id.as_ref()),
            describe(self.filename.as_ref()),
            describe(self.line_number.as_ref())
        )
    }
}

/// The lowest severity that fails the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailLevel {
    /// Never fail.
    None,
    /// Fail on HIGH issues.
    High,
    /// Fail on MEDIUM or HIGH issues.
    Medium,
}

/// A fail level other than `NONE`, `HIGH` or `MEDIUM`.
#[derive(Debug, Error)]
#[error("unknown SECURITY_FAIL_LEVEL: {0}")]
pub struct UnknownFailLevel(
    /// The rejected value, uppercased.
    pub String,
);

impl FromStr for FailLevel {
    type Err = UnknownFailLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(Self::None),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            other => Err(UnknownFailLevel(other.to_owned())),
        }
    }
}

impl Display for FailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        })
    }
}

impl FailLevel {
    /// The lowest failing severity, or [`None`] if nothing fails.
    pub const fn threshold(self) -> Option<Severity> {
        match self {
            Self::None => None,
            Self::High => Some(Severity::High),
            Self::Medium => Some(Severity::Medium),
        }
    }
}

/// Decides the exit status of a loaded report under a fail level given as text.
pub fn evaluate(report: &BanditReport, level: &str) -> Exit {
    let level = match level.parse::<FailLevel>() {
        Ok(level) => level,
        Err(err) => {
            warn!("{err}");
            return Exit::UnknownFailLevel;
        }
    };
    let Some(threshold) = level.threshold() else {
        info!("SECURITY_FAIL_LEVEL={level}: not failing on bandit issues");
        return Exit::Success;
    };

    let failing: Vec<_> = report
        .results
        .iter()
        .filter(|issue| issue.issue_severity.rank() >= threshold.rank())
        .collect();
    if failing.is_empty() {
        info!("no bandit issues at or above {level}");
        return Exit::Success;
    }

    for issue in &failing {
        error!(" - {issue}");
    }
    error!("failing on {} bandit issues at or above {level}", failing.len());
    Exit::Findings
}

/// Checks the report at `path`. An absent or unparsable report passes, whatever the fail level.
pub fn check(path: &Path, level: &str) -> Exit {
    match load_report::<BanditReport>(path) {
        Some(report) => evaluate(&report, level),
        None => Exit::Success,
    }
}
