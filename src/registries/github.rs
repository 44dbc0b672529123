//! GitHub repository API implementation

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::GITHUB_ACCEPT;
use crate::error::FetchError;
use crate::metadata::RepoInfo;
use crate::registries::check_status;
use crate::registry::RepositoryHost;

/// Response from `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    name: String,
    full_name: String,
    html_url: String,
    description: Option<String>,
    stargazers_count: u64,
    #[serde(default)]
    subscribers_count: u64,
    open_issues_count: u64,
    forks_count: u64,
    license: Option<License>,
    #[serde(default)]
    topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct License {
    name: String,
}

impl From<RepositoryResponse> for RepoInfo {
    fn from(repo: RepositoryResponse) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
            html_url: repo.html_url,
            description: repo.description,
            stars_count: repo.stargazers_count,
            watchers_count: repo.subscribers_count,
            issues_count: repo.open_issues_count,
            forks_count: repo.forks_count,
            license: repo.license.map(|l| l.name),
            topics: repo.topics,
        }
    }
}

/// Authenticated client for the GitHub repository endpoint
pub struct GitHubHost {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubHost {
    /// Creates a new GitHubHost against a custom API base URL
    pub fn new(client: reqwest::Client, base_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl RepositoryHost for GitHubHost {
    async fn fetch_repository(&self, repo: &str) -> Result<RepoInfo, FetchError> {
        info!("Fetching GitHub info for {}", repo);
        let url = format!("{}/repos/{}", self.base_url, repo);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", GITHUB_ACCEPT)
            .send()
            .await?;
        let response = check_status(response)?;

        let repository: RepositoryResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub repository response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(repository.into())
    }
}
