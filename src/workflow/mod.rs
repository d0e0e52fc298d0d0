//! Data models of GitHub Actions workflows.

#![cfg(feature = "workflow")]

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::Error;

pub mod artifact;
pub mod client;

pub use artifact::{Artifact, Artifacts};
pub use client::GitHubClient;

/// A repository on GitHub, parsed from `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// The owning user or organization.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositoryRef {
    type Err = Error;

    /// Splits at the first `/`; both halves must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_owned(),
                name: name.to_owned(),
            }),
            _ => Err(Error::InvalidRepository(s.to_owned())),
        }
    }
}

impl Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Represents workflow runs from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowRuns {
    /// Number of runs matching the query, across all pages.
    pub total_count: Option<u64>,
    /// Runs on the current page.
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Represents a GitHub Actions workflow run from GitHub REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkflowRun {
    /// Run id, used to list its artifacts.
    pub id: u64,
    /// Run page on GitHub.
    pub html_url: Option<String>,
    /// Branch the run was triggered on.
    pub head_branch: Option<String>,
    /// Commit the run was triggered on.
    pub head_sha: Option<String>,
    /// Creation time, only logged.
    pub created_at: Option<DateTime<Utc>>,
}

impl Display for WorkflowRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.html_url {
            Some(html_url) => write!(f, "id={}, html_url={html_url}", self.id),
            None => write!(f, "id={}", self.id),
        }
    }
}
