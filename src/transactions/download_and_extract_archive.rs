use std::path::Path;

use tracing::info;

use crate::{
    Result,
    transactions::{download_artifact, extract_archive, verify_digest},
    workflow::{Artifact, GitHubClient},
};

/// Downloads an [`Artifact`] and extracts the downloaded archive to a specified path.
///
/// Nothing is cleaned up when extraction fails halfway.
///
/// See: [`download_artifact`], [`verify_digest`], [`extract_archive`]
///
/// # Errors
///
/// Returns an error if downloading fails, the archive does not match its digest or is not a zip
/// archive, or the output cannot be written.
pub async fn download_and_extract_archive<P>(
    client: &GitHubClient,
    artifact: &Artifact,
    path: P,
) -> Result<()>
where
    P: AsRef<Path> + Send + Sync,
{
    let archive = download_artifact(client, artifact).await?;
    verify_digest(artifact, &archive)?;
    extract_archive(&artifact.name, &archive, &path)?;

    info!(
        "successfully extracted {} to {}",
        artifact.name,
        path.as_ref().display()
    );
    Ok(())
}
