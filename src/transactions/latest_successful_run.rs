use tracing::{debug, info};

use crate::{
    Result,
    workflow::{GitHubClient, RepositoryRef, WorkflowRun, WorkflowRuns},
};

/// Only the newest run matters, so a small page is enough.
const RUNS_PER_PAGE: u8 = 5;

/// Finds the latest successful run of a workflow, trusting GitHub to list the newest run first.
///
/// `workflow` is either the workflow file name (such as `ci.yml`) or its numeric id. An absent run
/// is not an error: it means no run of the workflow has succeeded yet.
///
/// # Errors
///
/// Returns an error if the request fails, GitHub answers with a non-success status, or the
/// response is malformed.
pub async fn latest_successful_run(
    client: &GitHubClient,
    repo: &RepositoryRef,
    workflow: &str,
) -> Result<Option<WorkflowRun>> {
    let url = client.api_url(&format!(
        "/repos/{}/{}/actions/workflows/{workflow}/runs?status=success&per_page={RUNS_PER_PAGE}",
        repo.owner(),
        repo.name()
    ));
    debug!("looking up successful runs of {workflow} at {url}…");

    let runs: WorkflowRuns = client.get_json(&url).await?;
    match runs.workflow_runs.into_iter().next() {
        Some(run) => {
            info!("found run: {run}");
            Ok(Some(run))
        }
        None => {
            debug!("no successful runs at {url}");
            Ok(None)
        }
    }
}
