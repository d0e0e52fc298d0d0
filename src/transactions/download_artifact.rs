use sha2::Digest as _;
use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    workflow::{Artifact, GitHubClient},
};

/// Downloads the archive of an [`Artifact`] into memory.
///
/// # Errors
///
/// Returns an error if the request fails or GitHub answers with a non-success status.
pub async fn download_artifact(client: &GitHubClient, artifact: &Artifact) -> Result<Vec<u8>> {
    if artifact.expired {
        warn!("artifact {} is marked as expired", artifact.name);
    }

    let archive = client.get_bytes(&artifact.archive_download_url).await?;
    info!(
        "downloaded {} bytes from {}",
        archive.len(),
        artifact.archive_download_url
    );
    Ok(archive)
}

/// Checks a downloaded archive against the `sha256:` digest GitHub advertises for the artifact.
///
/// Artifacts without a digest, or with a digest of another algorithm, pass unchecked.
///
/// # Errors
///
/// Returns [`Error::Integrity`] if the digests differ.
pub fn verify_digest(artifact: &Artifact, archive: &[u8]) -> Result<()> {
    let Some(digest) = artifact.digest.as_deref() else {
        warn!("digest not provided for {}", artifact.name);
        return Ok(());
    };
    let Some(expected) = digest.strip_prefix("sha256:") else {
        warn!("unsupported digest {digest} for {}, skipping", artifact.name);
        return Ok(());
    };

    let actual = hex::encode(sha2::Sha256::digest(archive));
    if actual.eq_ignore_ascii_case(expected) {
        debug!("digest of {} matches", artifact.name);
        Ok(())
    } else {
        Err(Error::Integrity {
            artifact: artifact.name.clone(),
            expected: expected.to_owned(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(digest: Option<&str>) -> Artifact {
        Artifact {
            id: Some(1),
            name: "dist".to_owned(),
            size_in_bytes: 5,
            archive_download_url: "https://example/dist.zip".to_owned(),
            expired: false,
            digest: digest.map(str::to_owned),
        }
    }

    // sha256("hello")
    const HELLO: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn accepts_matching_digest() {
        let artifact = artifact(Some(&format!("sha256:{HELLO}")));
        assert!(verify_digest(&artifact, b"hello").is_ok());
    }

    #[test]
    fn rejects_mismatching_digest() {
        let artifact = artifact(Some(&format!("sha256:{HELLO}")));
        let err = verify_digest(&artifact, b"goodbye").unwrap_err();
        assert!(matches!(err, Error::Integrity { artifact, .. } if artifact == "dist"));
    }

    #[test]
    fn skips_missing_or_foreign_digest() {
        assert!(verify_digest(&artifact(None), b"anything").is_ok());
        assert!(verify_digest(&artifact(Some("md5:abc")), b"anything").is_ok());
    }
}
