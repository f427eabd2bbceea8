use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// URL loaded by the `home` command and used when no start URL is given
    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// Timeout for a single page fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects followed before giving up
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl BrowserConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Default value for home_url
fn default_home_url() -> String {
    "https://example.com".to_string()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    10
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("linkwalk/{} (text-based browser)", env!("CARGO_PKG_VERSION"))
}

/// Default value for max_redirects
fn default_max_redirects() -> usize {
    10
}
