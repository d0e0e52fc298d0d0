//! Downloads the artifacts of the latest successful workflow run.
//!
//! The run is resolved, its artifacts are listed and summarized, then the selected ones are
//! fetched and extracted one after another into `output/<artifact name>`.

use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    Exit, Result,
    transactions::{download_and_extract_archive, fetch_artifacts, latest_successful_run},
    workflow::{Artifact, GitHubClient, RepositoryRef},
};

/// The workflow looked up when none is given.
pub const DEFAULT_WORKFLOW: &str = "ci.yml";

/// The output directory used when none is given.
pub const DEFAULT_OUTPUT: &str = "artifacts";

/// What to download and where.
#[derive(Debug, Clone)]
pub struct Options {
    /// The repository owning the workflow.
    pub repo: RepositoryRef,
    /// The workflow file name or id.
    pub workflow: String,
    /// The directory receiving one subdirectory per artifact.
    pub output: PathBuf,
    /// Only print the artifacts of the run.
    pub list_only: bool,
    /// Names of the artifacts to download. [`None`] or an empty list means all of them.
    pub download: Option<Vec<String>>,
}

impl Options {
    /// Downloads every artifact of [`DEFAULT_WORKFLOW`] into [`DEFAULT_OUTPUT`].
    pub fn new(repo: RepositoryRef) -> Self {
        Self {
            repo,
            workflow: DEFAULT_WORKFLOW.to_owned(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            list_only: false,
            download: None,
        }
    }
}

/// How a download run ended without failing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The workflow has no successful run.
    NoSuccessfulRun,
    /// The run has no artifacts.
    NoArtifacts,
    /// The artifacts were listed and nothing was downloaded.
    Listed(Vec<Artifact>),
    /// The selected artifacts were extracted to these directories, in listed order.
    Downloaded(Vec<PathBuf>),
}

impl Outcome {
    /// The process status of the outcome.
    pub const fn exit(&self) -> Exit {
        match self {
            Self::NoSuccessfulRun => Exit::NoSuccessfulRun,
            Self::NoArtifacts | Self::Listed(_) | Self::Downloaded(_) => Exit::Success,
        }
    }
}

/// Keeps the artifacts whose name was requested, in listed order.
///
/// Requested names matching no artifact are ignored.
pub fn select<'a>(artifacts: &'a [Artifact], requested: Option<&[String]>) -> Vec<&'a Artifact> {
    match requested {
        Some(names) if !names.is_empty() => artifacts
            .iter()
            .filter(|artifact| names.contains(&artifact.name))
            .collect(),
        _ => artifacts.iter().collect(),
    }
}

/// Runs the download described by `options`.
///
/// # Errors
///
/// Returns the first network, archive or filesystem error. Artifacts extracted before the error
/// stay on disk.
pub async fn run(client: &GitHubClient, options: &Options) -> Result<Outcome> {
    info!(
        "looking up latest successful run for workflow {} in {}…",
        options.workflow, options.repo
    );
    let Some(run) = latest_successful_run(client, &options.repo, &options.workflow).await? else {
        error!("no successful recent runs found");
        return Ok(Outcome::NoSuccessfulRun);
    };

    let artifacts = fetch_artifacts(client, &options.repo, run.id).await?;
    if artifacts.is_empty() {
        info!("no artifacts found for run {}", run.id);
        return Ok(Outcome::NoArtifacts);
    }

    info!("artifacts:");
    for artifact in &artifacts {
        info!(" - {artifact}");
    }

    if options.list_only {
        return Ok(Outcome::Listed(artifacts));
    }

    let mut saved = Vec::new();
    for artifact in select(&artifacts, options.download.as_deref()) {
        let path = options.output.join(&artifact.name);
        info!("downloading {}…", artifact.name);
        download_and_extract_archive(client, artifact, &path).await?;
        info!("saved to {}", path.display());
        saved.push(path);
    }

    info!("done");
    Ok(Outcome::Downloaded(saved))
}
