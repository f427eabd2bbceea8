// Re-export modules
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod history;
pub mod navigator;
pub mod parsers;
pub mod render;
pub mod results;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use results::Page;
pub use session::{ControlFlow, Session};

use crate::config::BrowserConfig;
use crate::fetcher::{FetchError, HttpFetcher};

/// Builder for an interactive browsing session
pub struct Browser {
    config: BrowserConfig,
}

impl Browser {
    /// Create a new Browser builder with default configuration
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: BrowserConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = BrowserConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the home page URL
    pub fn with_home_url(mut self, url: &str) -> Self {
        self.config.home_url = url.to_string();
        self
    }

    /// Override the per-request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Override the user agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Build a session backed by an HTTP fetcher
    pub fn build(self) -> Result<Session<HttpFetcher>, FetchError> {
        let fetcher = HttpFetcher::new(&self.config)?;
        Ok(Session::new(fetcher, &self.config.home_url))
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_take_effect() {
        let browser = Browser::new()
            .with_home_url("https://home.test/")
            .with_timeout(5)
            .with_user_agent("test-agent");
        assert_eq!(browser.config.home_url, "https://home.test/");
        assert_eq!(browser.config.timeout_secs, 5);
        assert_eq!(browser.config.user_agent, "test-agent");
    }

    #[test]
    fn test_builder_produces_a_session() {
        let session = Browser::new().build().expect("client should build");
        assert!(session.page().is_none());
        assert!(!session.navigator().can_go_back());
    }
}
