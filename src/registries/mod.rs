//! HTTP implementations of the registry traits

pub mod github;
pub mod maven;

pub use github::GitHubHost;
pub use maven::MavenRegistry;

use std::time::Duration;

use tracing::warn;

use crate::config::USER_AGENT;
use crate::error::FetchError;

/// Builds the HTTP client shared by all registries
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Maps non-success statuses to `FetchError`
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    let url = response.url().to_string();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(url));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(FetchError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        warn!("Unexpected status {}: {}", status, url);
        return Err(FetchError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    Ok(response)
}
