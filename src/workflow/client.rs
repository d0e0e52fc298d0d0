//! A minimal GitHub REST API client.

use reqwest::{RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{Error, Result, env::Credential};

/// The public GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

const ACCEPT_JSON: &str = "application/vnd.github+json";
const ACCEPT_OCTET_STREAM: &str = "application/octet-stream";
const USER_AGENT: &str = concat!("secsuite/", env!("CARGO_PKG_VERSION"));

/// Sends requests to GitHub REST API, authenticated when a [`Credential`] is present.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<Credential>,
}

impl GitHubClient {
    /// Creates a client for [`GITHUB_API`].
    pub fn new(credential: Option<Credential>) -> Self {
        Self::with_base_url(GITHUB_API, credential)
    }

    /// Creates a client for another API root, such as a GitHub Enterprise host.
    pub fn with_base_url<U: Into<String>>(base_url: U, credential: Option<Credential>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            credential,
        }
    }

    /// Joins a `/`-prefixed API path onto the base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Builds a request for GitHub REST API.
    pub fn api_request_builder(&self, url: &str) -> RequestBuilder {
        self.request_builder(url, ACCEPT_JSON)
    }

    /// Builds a request for raw content, such as an artifact archive.
    pub fn download_request_builder(&self, url: &str) -> RequestBuilder {
        self.request_builder(url, ACCEPT_OCTET_STREAM)
    }

    fn request_builder(&self, url: &str, accept: &'static str) -> RequestBuilder {
        let builder = self
            .http
            .get(url)
            .header(header::ACCEPT, accept)
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(header::USER_AGENT, USER_AGENT);
        match &self.credential {
            Some(credential) => builder.bearer_auth(credential.token()),
            None => builder,
        }
    }

    /// Requests `url` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success, or the body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("requesting {url}…");
        let body = read_body(url, send(url, self.api_request_builder(url)).await?).await?;
        serde_json::from_slice(&body).map_err(|source| {
            error!("failed to parse data from {url}: {source}");
            Error::Decode {
                url: url.to_owned(),
                source,
            }
        })
    }

    /// Requests `url` as an octet stream and buffers the whole body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("requesting download from {url}…");
        read_body(url, send(url, self.download_request_builder(url)).await?).await
    }
}

async fn send(url: &str, builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await.map_err(|source| {
        error!("failed to request {url}: {source}");
        Error::Transport {
            url: url.to_owned(),
            source,
        }
    })?;

    match response.status() {
        status if status.is_success() => Ok(response),
        status => {
            match status {
                StatusCode::GONE => error!("failed to request {url}: resource expired or removed"),
                _ => match status.canonical_reason() {
                    Some(reason) => {
                        error!("failed to request {url}: {} {reason}", status.as_u16())
                    }
                    None => error!("failed to request {url}: {}", status.as_u16()),
                },
            }
            Err(Error::Status {
                url: url.to_owned(),
                status,
            })
        }
    }
}

async fn read_body(url: &str, response: Response) -> Result<Vec<u8>> {
    response
        .bytes()
        .await
        .map(Vec::from)
        .map_err(|source| Error::Transport {
            url: url.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        let client = GitHubClient::with_base_url("http://localhost:1234//", None);
        assert_eq!(
            client.api_url("/repos/o/r"),
            "http://localhost:1234/repos/o/r"
        );
    }

    #[test]
    fn download_requests_accept_octet_stream() {
        let client = GitHubClient::new(Some(Credential::new("t")));
        let request = client
            .download_request_builder("https://example/art.zip")
            .build()
            .unwrap();
        assert_eq!(request.headers()[header::ACCEPT], ACCEPT_OCTET_STREAM);
        assert_eq!(request.headers()[header::AUTHORIZATION], "Bearer t");
    }

    #[test]
    fn anonymous_requests_carry_no_authorization() {
        let client = GitHubClient::new(None);
        let request = client
            .api_request_builder("https://api.github.com/meta")
            .build()
            .unwrap();
        assert_eq!(request.headers()[header::ACCEPT], ACCEPT_JSON);
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }
}
