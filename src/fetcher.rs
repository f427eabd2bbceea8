use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::BrowserConfig;
use crate::utils;

/// A successfully fetched page body
///
/// `final_url` is the post-redirect URL and is what links are resolved
/// against and what history records.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub final_url: String,
    pub status: u16,
}

/// Errors raised while fetching a page
///
/// Transport-level failures carry no HTTP status (`status_code()` reports 0
/// for them); `HttpStatus` is the one variant produced by a well-formed HTTP
/// response with a non-success status.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("could not connect to server: {0}")]
    Connect(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("server returned HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("could not decode response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl FetchError {
    /// The HTTP status behind this error, or 0 for transport-level failures
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::HttpStatus { status, .. } => *status,
            _ => 0,
        }
    }
}

/// Fetches page bodies for the session
///
/// The session only depends on this trait, so tests can substitute an
/// in-memory implementation.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// HTTP/HTTPS fetcher backed by a reqwest client
///
/// Follows redirects up to the configured limit and applies the configured
/// timeout to each request.
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    pub fn new(config: &BrowserConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = utils::ensure_scheme(url);
        let parsed = Url::parse(&url).map_err(|e| FetchError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        ::log::debug!("fetching {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        ::log::debug!("fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            body,
            final_url,
            status: status.as_u16(),
        })
    }
}

impl HttpFetcher {
    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else if err.is_redirect() {
            FetchError::TooManyRedirects
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else {
            FetchError::Other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_report_status_zero() {
        assert_eq!(FetchError::Timeout(10).status_code(), 0);
        assert_eq!(FetchError::TooManyRedirects.status_code(), 0);
        assert_eq!(FetchError::Connect("refused".to_string()).status_code(), 0);
    }

    #[test]
    fn test_http_errors_carry_their_status() {
        let err = FetchError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "server returned HTTP 404 Not Found");
    }
}
