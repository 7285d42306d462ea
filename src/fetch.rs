use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::error::Result;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4758.102 Safari/537.36";

/// Fetches problem pages. `None` means the page is unavailable for any reason.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("request to {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "request to get input data from {} failed with code {}",
                url,
                status.as_u16()
            );
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("failed to read page {}: {}", url, e);
                None
            }
        }
    }
}
