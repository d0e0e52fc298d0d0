//! Checks a bandit JSON report and fails on issues at or above `SECURITY_FAIL_LEVEL`.
//!
//! `SECURITY_FAIL_LEVEL`: `NONE` | `HIGH` | `MEDIUM` (default `MEDIUM`). Exits with 2 on findings,
//! 1 on an unknown level, 0 otherwise.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use secsuite::{
    env,
    gates::bandit::{self, DEFAULT_FAIL_LEVEL, REPORT},
};

/// Check a bandit JSON report against a severity threshold
#[derive(Debug, Parser)]
#[command(name = "security-bandit-check", version, about, long_about = None)]
struct Cli {
    /// Path to the bandit JSON report
    #[arg(long, default_value = REPORT)]
    report: PathBuf,

    /// Lowest failing severity: NONE, HIGH or MEDIUM
    #[arg(long, env = env::SECURITY_FAIL_LEVEL, default_value = DEFAULT_FAIL_LEVEL)]
    fail_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    secsuite::logging::init();

    bandit::check(&cli.report, &cli.fail_level).into()
}
