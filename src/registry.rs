//! Traits for the remote sources the harvester reads from

#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;
use crate::metadata::{ModuleDescriptor, PlatformModule, RepoInfo, VersioningManifest};

/// Source of Maven artifact metadata
///
/// `base_url` is the artifact directory (ending with `/`) that contains
/// `maven-metadata.xml` and one sub-directory per version.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ArtifactRegistry: Send + Sync {
    /// Fetches `{base_url}maven-metadata.xml`
    async fn fetch_metadata(&self, base_url: &str) -> Result<VersioningManifest, FetchError>;

    /// Fetches `{base_url}{version}/{artifact_id}-{version}.module`
    async fn fetch_module(
        &self,
        base_url: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<ModuleDescriptor, FetchError>;

    /// Fetches a platform module at `{base_url}{component_version}/{location}`
    async fn fetch_platform_module(
        &self,
        base_url: &str,
        component_version: &str,
        location: &str,
    ) -> Result<PlatformModule, FetchError>;
}

/// Source-hosting service that describes repositories
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches statistics for a repository in `owner/repo` form
    async fn fetch_repository(&self, repo: &str) -> Result<RepoInfo, FetchError>;
}
