//! Error types shared by every operation of the crate.
//!
//! "Nothing found" is never an error: an absent run is [`None`] and a run without artifacts is an
//! empty [`Vec`]. Everything here is fatal to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for secsuite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving, listing, downloading and extracting artifacts.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The repository identifier is not in `owner/name` format.
    #[error("repository must be in 'owner/name' format, got {0:?}")]
    InvalidRepository(String),

    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed")]
    Transport {
        /// The requested URL.
        url: String,
        /// The underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} failed: {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The received status.
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response from {url}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The parse failure, naming the offending field.
        #[source]
        source: serde_json::Error,
    },

    /// The downloaded payload is not a readable zip container.
    #[error("artifact {artifact} is not a valid zip archive")]
    ContainerFormat {
        /// The artifact name.
        artifact: String,
        /// The underlying archive error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The downloaded payload does not match the digest advertised by the API.
    #[error("artifact {artifact} is broken: expected sha256 {expected}, got {actual}")]
    Integrity {
        /// The artifact name.
        artifact: String,
        /// The advertised digest.
        expected: String,
        /// The digest of the received bytes.
        actual: String,
    },

    /// A directory or file could not be created.
    #[error("failed to write {}", path.display())]
    Filesystem {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn filesystem<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem { path, source }
    }
}
