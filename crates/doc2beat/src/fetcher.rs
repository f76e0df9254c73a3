//! Document fetching
//!
//! A fetch never fails: network errors are logged and replaced by a
//! bracketed placeholder. [`HttpFetcher::try_fetch`] is the fallible core for
//! callers that want the error.

use crate::error::FetchError;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Timeout for the whole request (connect + body)
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of document text
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &'static str;

    /// Fetch the document at `url`
    ///
    /// Returns the response text, or [`fetch_failed_placeholder`] when the
    /// document could not be retrieved.
    async fn fetch(&self, url: &str) -> String;
}

/// Placeholder returned in place of a document that could not be fetched
pub fn fetch_failed_placeholder(url: &str) -> String {
    format!("[Could not fetch content from {}]", url)
}

/// HTTP fetcher: one GET per URL, no retries
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default User-Agent
    pub fn new() -> Result<Self, FetchError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a fetcher sending a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html, text/plain, */*;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(FETCH_TIMEOUT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(FetchError::ClientBuildError)?;

        Ok(Self { client })
    }

    /// Fetch `url`, reporting failures instead of hiding them
    pub async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrlScheme)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrlScheme);
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::from_reqwest)?;
        debug!(url = %url, chars = body.chars().count(), "Fetched document");
        Ok(body)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, error = %e, "Could not fetch document content");
                fetch_failed_placeholder(url)
            }
        }
    }
}
