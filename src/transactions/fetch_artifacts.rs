use tracing::{debug, info};

use crate::{
    Result,
    workflow::{Artifact, Artifacts, GitHubClient, RepositoryRef},
};

/// Fetches the artifacts of a workflow run, in the order GitHub lists them.
///
/// Only the first page is requested. An empty list is a valid answer.
///
/// # Errors
///
/// Returns an error if the request fails, GitHub answers with a non-success status, or the
/// response is malformed.
pub async fn fetch_artifacts(
    client: &GitHubClient,
    repo: &RepositoryRef,
    run_id: u64,
) -> Result<Vec<Artifact>> {
    let url = client.api_url(&format!(
        "/repos/{}/{}/actions/runs/{run_id}/artifacts",
        repo.owner(),
        repo.name()
    ));
    debug!("fetching artifacts from {url}…");

    let artifacts: Artifacts = client.get_json(&url).await?;
    match artifacts.artifacts.len() {
        0 => debug!("no artifacts at {url}"),
        1 => info!("fetched 1 artifact from {url}"),
        count => info!("fetched {count} artifacts from {url}"),
    }
    Ok(artifacts.artifacts)
}
