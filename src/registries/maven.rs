//! Maven repository implementation

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::metadata::{ModuleDescriptor, PlatformModule, VersioningManifest};
use crate::registries::check_status;
use crate::registry::ArtifactRegistry;

/// Reads `maven-metadata.xml` and Gradle module files over HTTP
pub struct MavenRegistry {
    client: reqwest::Client,
}

impl MavenRegistry {
    /// Creates a new MavenRegistry sharing the given HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response)?;

        response.json().await.map_err(|e| {
            warn!("Failed to parse module metadata {}: {}", url, e);
            FetchError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl ArtifactRegistry for MavenRegistry {
    async fn fetch_metadata(&self, base_url: &str) -> Result<VersioningManifest, FetchError> {
        let url = format!("{}maven-metadata.xml", base_url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response)?;

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read maven metadata {}: {}", url, e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        VersioningManifest::parse(&body)
    }

    async fn fetch_module(
        &self,
        base_url: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<ModuleDescriptor, FetchError> {
        let url = format!("{}{}/{}-{}.module", base_url, version, artifact_id, version);
        debug!("Fetching module {}", url);
        self.get_json(&url).await
    }

    async fn fetch_platform_module(
        &self,
        base_url: &str,
        component_version: &str,
        location: &str,
    ) -> Result<PlatformModule, FetchError> {
        let url = format!("{}{}/{}", base_url, component_version, location);
        debug!("Fetching platform module {}", url);
        self.get_json(&url).await
    }
}
