//! Checks a safety JSON report. Exits with 2 if vulnerabilities were found, 0 otherwise.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use secsuite::gates::safety::{self, REPORT};

/// Check a safety JSON report for vulnerable dependencies
#[derive(Debug, Parser)]
#[command(name = "security-safety-check", version, about, long_about = None)]
struct Cli {
    /// Path to the safety JSON report
    #[arg(long, default_value = REPORT)]
    report: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    secsuite::logging::init();

    safety::check(&cli.report).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_default_report() {
        let cli = Cli::try_parse_from(["security-safety-check"]).unwrap();
        assert_eq!(cli.report, PathBuf::from("safety-report.json"));
    }

    #[test]
    fn checks_the_given_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join(REPORT);
        std::fs::write(&report, r#"{"vulnerabilities": [{"package_name": "jinja2"}]}"#).unwrap();

        let cli = Cli::try_parse_from(["security-safety-check", "--report", report.to_str().unwrap()])
            .unwrap();

        assert_eq!(safety::check(&cli.report).code(), 2);
    }
}
