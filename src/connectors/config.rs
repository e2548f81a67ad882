use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub github: Option<GithubConnectorConfig>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            github: Some(GithubConnectorConfig::default()),
        }
    }
}

/// GitHub repository listing connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConnectorConfig {
    /// Enable/disable the GitHub connector
    pub enabled: bool,
    /// GitHub API base URL
    pub base_url: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Number of retry attempts for transient failures
    pub retry_attempts: usize,
    /// Number of repositories fetched per profile
    #[serde(default = "GithubConnectorConfig::default_page_size")]
    pub page_size: u32,
    /// Optional API token (falls back to the GITHUB_TOKEN env variable)
    #[serde(skip)]
    pub token: Option<String>,
}

impl GithubConnectorConfig {
    const fn default_page_size() -> u32 {
        5
    }
}

impl Default for GithubConnectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.github.com".to_string(),
            timeout_secs: 10,
            retry_attempts: 3,
            page_size: Self::default_page_size(),
            token: None,
        }
    }
}
