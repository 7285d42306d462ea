//! Minimal client for the GitHub repository contents API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GithubAuth;
use crate::error::Result;

const CLIENT_USER_AGENT: &str = concat!("cp-scaffold/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    auth: GithubAuth,
}

#[derive(Debug, Deserialize)]
struct ContentMetadata {
    sha: String,
}

#[derive(Debug, Serialize)]
pub struct PutContent<'a> {
    pub message: &'a str,
    /// Base64 encoded file body.
    pub content: &'a str,
    /// Revision being replaced; required when the file already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}

impl GithubClient {
    pub fn new(auth: GithubAuth) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client, auth })
    }

    pub fn contents_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.auth.api_url, self.auth.username, repo, path
        )
    }

    /// Current revision of `path`, or `None` when it does not exist yet.
    pub async fn file_sha(&self, repo: &str, path: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(self.contents_url(repo, path))
            .basic_auth(&self.auth.username, Some(&self.auth.token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("no existing {} in {} ({})", path, repo, response.status());
            return Ok(None);
        }
        let metadata: ContentMetadata = response.json().await?;
        Ok(Some(metadata.sha))
    }

    /// Creates or updates `path`. Returns the response status; callers decide what success is.
    pub async fn put_file(
        &self,
        repo: &str,
        path: &str,
        body: &PutContent<'_>,
    ) -> Result<StatusCode> {
        let response = self
            .client
            .put(self.contents_url(repo, path))
            .basic_auth(&self.auth.username, Some(&self.auth.token))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!("put {} failed with {}: {}", path, status, text);
        }
        Ok(status)
    }
}
