use crate::error::Result;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

/// The npm website that user and package pages are scraped from
pub const NPM_WEBSITE: &str = "https://www.npmjs.com";

/// A source of HTML pages addressed by site-relative paths
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page at `path` and returns its body as text
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Fetches pages from the npm website with a single GET per path
///
/// No retries and no timeout: a hung connection hangs the request for that
/// path until the transport gives up.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    base_url: String,
}

impl PageFetcher {
    /// Creates a fetcher for the public npm website
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: NPM_WEBSITE.to_string(),
        }
    }

    /// Creates a fetcher for an alternative host, e.g. a mirror or a mock server
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL all paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body is still scraped; missing fields simply come out as "unknown".
            warn!("GET {} returned HTTP {}", url, status);
        }

        let body = response.text().await?;
        debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}
