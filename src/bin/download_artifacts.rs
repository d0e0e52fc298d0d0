//! Downloads artifacts from the latest successful GitHub Actions run of a workflow.
//!
//! ```sh
//! export GITHUB_REPOSITORY=owner/repo  # or pass --repo
//! export GITHUB_TOKEN=ghp_...          # optional, avoids rate limits and reaches private repos
//! download-artifacts --workflow ci.yml --output artifacts
//! ```

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use secsuite::{
    Exit,
    driver::{self, DEFAULT_OUTPUT, DEFAULT_WORKFLOW, Options, Outcome},
    env,
    workflow::{GitHubClient, RepositoryRef},
};
use tracing::error;

/// Download artifacts from the latest successful GitHub Actions run
#[derive(Debug, Parser)]
#[command(name = "download-artifacts", version, about, long_about = None)]
struct Cli {
    /// Repository in owner/name format
    #[arg(long, env = env::GITHUB_REPOSITORY)]
    repo: RepositoryRef,

    /// Workflow file name or id
    #[arg(long, default_value = DEFAULT_WORKFLOW)]
    workflow: String,

    /// Output directory, receiving one subdirectory per artifact
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// List the artifacts and exit
    #[arg(long)]
    list: bool,

    /// Names of the artifacts to download (default: all)
    #[arg(long, num_args = 0..)]
    download: Option<Vec<String>>,
}

impl Cli {
    fn options(self) -> Options {
        Options {
            repo: self.repo,
            workflow: self.workflow,
            output: self.output,
            list_only: self.list,
            download: self.download,
        }
    }
}

/// Maps the driver result to the process status, logging fatal errors.
fn exit_status(result: anyhow::Result<Outcome>) -> Exit {
    match result {
        Ok(outcome) => outcome.exit(),
        Err(err) => {
            error!("{err:#}");
            Exit::Fatal
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    secsuite::logging::init();

    let client = GitHubClient::new(env::github_token());
    let options = cli.options();

    let result = driver::run(&client, &options)
        .await
        .with_context(|| format!("failed to download artifacts of {}", options.repo));
    exit_status(result).into()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use secsuite::workflow::Artifact;
    use serde_json::json;
    use serial_test::serial;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("download-artifacts").chain(args.iter().copied()))
    }

    fn without_repository_env() {
        // SAFETY: every test touching the environment is `#[serial]`.
        unsafe { std::env::remove_var(env::GITHUB_REPOSITORY) };
    }

    #[test]
    #[serial]
    fn applies_defaults() {
        without_repository_env();
        let options = parse(&["--repo", "owner/repo"]).unwrap().options();

        assert_eq!(options.repo.to_string(), "owner/repo");
        assert_eq!(options.workflow, DEFAULT_WORKFLOW);
        assert_eq!(options.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!options.list_only);
        assert_eq!(options.download, None);
    }

    #[test]
    #[serial]
    fn bare_download_selects_every_artifact() {
        without_repository_env();
        let options = parse(&["--repo", "owner/repo", "--download"]).unwrap().options();
        assert_eq!(options.download, Some(Vec::new()));

        let artifacts: Vec<Artifact> = ["a", "b"]
            .into_iter()
            .map(|name| {
                serde_json::from_value(json!({
                    "name": name,
                    "size_in_bytes": 1,
                    "archive_download_url": format!("https://example/{name}.zip"),
                }))
                .unwrap()
            })
            .collect();
        assert_eq!(driver::select(&artifacts, options.download.as_deref()).len(), 2);
    }

    #[test]
    #[serial]
    fn collects_requested_names() {
        without_repository_env();
        let options = parse(&["--repo", "owner/repo", "--list", "--download", "A", "B"])
            .unwrap()
            .options();

        assert!(options.list_only);
        assert_eq!(options.download, Some(vec!["A".to_owned(), "B".to_owned()]));
    }

    #[test]
    #[serial]
    fn falls_back_to_repository_env() {
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::set_var(env::GITHUB_REPOSITORY, "acme/widgets") };
        let cli = parse(&[]);
        without_repository_env();

        assert_eq!(cli.unwrap().repo.to_string(), "acme/widgets");
    }

    #[test]
    #[serial]
    fn rejects_missing_or_malformed_repository() {
        without_repository_env();

        let err = parse(&[]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = parse(&["--repo", "norepo"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn fatal_errors_exit_three() {
        let status = exit_status(Err(anyhow!("request to https://api.github.com failed")));
        assert_eq!(status, Exit::Fatal);
        assert_eq!(status.code(), 3);
    }

    #[test]
    fn outcomes_keep_their_status() {
        assert_eq!(exit_status(Ok(Outcome::NoSuccessfulRun)).code(), 1);
        assert_eq!(exit_status(Ok(Outcome::NoArtifacts)), Exit::Success);
        assert_eq!(exit_status(Ok(Outcome::Downloaded(Vec::new()))), Exit::Success);
    }
}
