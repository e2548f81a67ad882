use super::config::{ConnectorConfig, GithubConnectorConfig};
use super::errors::ConnectorError;
use actix_web::web;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Public repository fields surfaced to profile readers. Deserialized
/// straight from the GitHub repository listing; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default, rename = "private")]
    pub is_private: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[async_trait]
pub trait GithubConnector: Send + Sync {
    /// Lists a user's oldest-first public repositories, bounded by the
    /// configured page size.
    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, ConnectorError>;
}

pub struct GithubClient {
    base_url: String,
    http_client: reqwest::Client,
    token: Option<String>,
    retry_attempts: usize,
    page_size: u32,
    user_agent: String,
}

impl GithubClient {
    pub fn new(config: GithubConnectorConfig, token: Option<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build the GitHub HTTP client.");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            token,
            retry_attempts: config.retry_attempts,
            page_size: config.page_size,
            user_agent: format!("devlink/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[async_trait]
impl GithubConnector for GithubClient {
    #[tracing::instrument(name = "Fetch github repositories.", skip(self))]
    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, ConnectorError> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=created&direction=asc",
            self.base_url, username, self.page_size
        );

        let mut last_err = None;
        for attempt in 0..=self.retry_attempts {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                tracing::debug!("retrying github request, attempt {}", attempt);
            }

            let mut request = self
                .http_client
                .get(&url)
                .header(USER_AGENT, &self.user_agent)
                .header(ACCEPT, "application/vnd.github+json");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) if err.is_timeout() || err.is_connect() => {
                    last_err = Some(ConnectorError::from(err));
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            return match response.status() {
                StatusCode::NOT_FOUND => Err(ConnectorError::NotFound(format!(
                    "no github user {}",
                    username
                ))),
                StatusCode::UNAUTHORIZED => {
                    Err(ConnectorError::Unauthorized("github rejected the API token".to_string()))
                }
                StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(
                    ConnectorError::RateLimited("github rate limit exceeded".to_string()),
                ),
                status if !status.is_success() => Err(ConnectorError::HttpError(format!(
                    "github returned {}",
                    status
                ))),
                _ => response
                    .json::<Vec<RepositorySummary>>()
                    .await
                    .map_err(|err| ConnectorError::InvalidResponse(err.to_string())),
            };
        }

        Err(last_err
            .unwrap_or_else(|| ConnectorError::ServiceUnavailable("github unreachable".to_string())))
    }
}

/// Stand-in used when the connector is switched off; every call reports the
/// service as unavailable instead of reaching out to the network.
pub struct DisabledGithubConnector;

#[async_trait]
impl GithubConnector for DisabledGithubConnector {
    async fn list_repositories(
        &self,
        _username: &str,
    ) -> Result<Vec<RepositorySummary>, ConnectorError> {
        Err(ConnectorError::ServiceUnavailable(
            "github connector is disabled".to_string(),
        ))
    }
}

/// Builds the connector from settings. The API token is taken from the
/// configuration when present, otherwise from the GITHUB_TOKEN env variable;
/// unauthenticated requests work too, with a lower rate limit.
pub fn init(config: &ConnectorConfig) -> web::Data<Arc<dyn GithubConnector>> {
    let config = config.github.clone().unwrap_or_default();

    if !config.enabled {
        tracing::info!("github connector disabled by configuration");
        return web::Data::new(Arc::new(DisabledGithubConnector) as Arc<dyn GithubConnector>);
    }

    let token = config
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let client = GithubClient::new(config, token);
    web::Data::new(Arc::new(client) as Arc<dyn GithubConnector>)
}
