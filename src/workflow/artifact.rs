//! Artifacts from GitHub REST API.

use std::fmt::Display;

use serde::Deserialize;

/// Represents artifacts from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Artifacts {
    /// Number of artifacts of the run, across all pages.
    pub total_count: Option<u64>,
    /// Artifacts on the current page, in server order.
    pub artifacts: Vec<Artifact>,
}

/// Represents an artifact from GitHub REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact id.
    pub id: Option<u64>,
    /// Artifact name, also the name of its output subdirectory.
    pub name: String,
    /// Size of the zip archive.
    pub size_in_bytes: u64,
    /// Where the zip archive is downloaded from.
    pub archive_download_url: String,
    /// Whether the retention period has passed.
    #[serde(default)]
    pub expired: bool,
    /// `sha256:<hex>` digest of the archive, when GitHub recorded one.
    pub digest: Option<String>,
}

impl Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (size={} bytes)", self.name, self.size_in_bytes)?;
        if self.expired {
            f.write_str(" [expired]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_download_url() {
        let err = serde_json::from_str::<Artifacts>(
            r#"{"artifacts": [{"name": "a", "size_in_bytes": 1}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("archive_download_url"));
    }

    #[test]
    fn displays_name_and_size() {
        let artifacts: Artifacts = serde_json::from_str(
            r#"{"total_count": 1, "artifacts": [{"id": 11, "name": "test-art", "size_in_bytes": 123, "archive_download_url": "https://example/art.zip", "expired": true}]}"#,
        )
        .unwrap();
        assert_eq!(artifacts.artifacts[0].to_string(), "test-art (size=123 bytes) [expired]");
        assert_eq!(artifacts.artifacts[0].digest, None);
    }
}
