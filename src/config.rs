use std::env;

use crate::error::{Error, Result};
use crate::template::DEFAULT_LANGUAGE;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Settings read once from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub github_username: Option<String>,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub default_language: String,
}

/// Credentials for the hosting API.
#[derive(Debug, Clone)]
pub struct GithubAuth {
    pub username: String,
    pub token: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            github_username: non_empty("GITHUB_USERNAME"),
            github_token: non_empty("GITHUB_TOKEN"),
            github_api_url: non_empty("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            default_language: non_empty("CP_DEFAULT_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Credentials needed for uploads; only this path requires them.
    pub fn github_auth(&self) -> Result<GithubAuth> {
        let username = self
            .github_username
            .clone()
            .ok_or_else(|| Error::Config("GITHUB_USERNAME is not set".to_string()))?;
        let token = self
            .github_token
            .clone()
            .ok_or_else(|| Error::Config("GITHUB_TOKEN is not set".to_string()))?;
        Ok(GithubAuth {
            username,
            token,
            api_url: self.github_api_url.trim_end_matches('/').to_string(),
        })
    }
}
