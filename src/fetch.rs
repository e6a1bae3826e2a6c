//! Blocking HTTP fetching of article pages.
//!
//! The extraction core never touches the network; this module is the thin
//! layer that turns a URL into HTML for it.

use crate::error::{Result, ScrapeError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/124.0 Safari/537.36"
);

/// Parse `raw` and require an http(s) scheme and a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| ScrapeError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ScrapeError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Request settings for [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Default: 30 seconds
    pub timeout: Duration,
    pub user_agent: String,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: vec![(
                "Accept".to_string(),
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8".to_string(),
            )],
        }
    }
}

impl FetchOptions {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A page body returned by a successful fetch.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP client configured from [`FetchOptions`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ScrapeError::Request(format!("invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ScrapeError::Request(format!("invalid header value for {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .user_agent(options.user_agent)
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(|e| ScrapeError::Request(e.to_string()))?;

        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    /// Fetch `url` and return its body.
    ///
    /// Non-success statuses are errors; the body of an error page is never
    /// handed to the extractor.
    pub fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = validate_url(url)?;
        tracing::info!(url = %parsed, "fetching content");

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().map_err(|e| self.classify(url, e))?;
        tracing::debug!(url = %final_url, bytes = body.len(), "fetched");

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> ScrapeError {
        if err.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            ScrapeError::Connection(url.to_string())
        } else {
            ScrapeError::Request(err.to_string())
        }
    }
}
