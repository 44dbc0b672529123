//! In-memory registries for pipeline tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use kmp_catalog::error::FetchError;
use kmp_catalog::metadata::{ModuleDescriptor, PlatformModule, RepoInfo, VersioningManifest};
use kmp_catalog::registry::{ArtifactRegistry, RepositoryHost};

/// Artifact registry backed by maps, with optional per-library latency
#[derive(Default)]
pub struct FakeArtifactRegistry {
    manifests: HashMap<String, VersioningManifest>,
    modules: HashMap<(String, String), ModuleDescriptor>,
    platform_modules: HashMap<String, PlatformModule>,
    delays: HashMap<String, Duration>,
    completed: Mutex<Vec<String>>,
}

impl FakeArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, base_url: &str, manifest: VersioningManifest) -> Self {
        self.manifests.insert(base_url.to_string(), manifest);
        self
    }

    pub fn with_module(mut self, base_url: &str, version: &str, module: ModuleDescriptor) -> Self {
        self.modules
            .insert((base_url.to_string(), version.to_string()), module);
        self
    }

    pub fn with_platform_module(mut self, location: &str, module: PlatformModule) -> Self {
        self.platform_modules.insert(location.to_string(), module);
        self
    }

    /// Delays the manifest response for `base_url`
    pub fn with_delay(mut self, base_url: &str, delay: Duration) -> Self {
        self.delays.insert(base_url.to_string(), delay);
        self
    }

    /// Base URLs in the order their manifests were served
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactRegistry for FakeArtifactRegistry {
    async fn fetch_metadata(&self, base_url: &str) -> Result<VersioningManifest, FetchError> {
        if let Some(delay) = self.delays.get(base_url) {
            sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(base_url.to_string());

        self.manifests
            .get(base_url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(base_url.to_string()))
    }

    async fn fetch_module(
        &self,
        base_url: &str,
        _artifact_id: &str,
        version: &str,
    ) -> Result<ModuleDescriptor, FetchError> {
        self.modules
            .get(&(base_url.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("{}{}", base_url, version)))
    }

    async fn fetch_platform_module(
        &self,
        _base_url: &str,
        _component_version: &str,
        location: &str,
    ) -> Result<PlatformModule, FetchError> {
        self.platform_modules
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(location.to_string()))
    }
}

/// Repository host backed by a map
#[derive(Default)]
pub struct FakeRepositoryHost {
    repositories: HashMap<String, RepoInfo>,
}

impl FakeRepositoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, repo: &str, info: RepoInfo) -> Self {
        self.repositories.insert(repo.to_string(), info);
        self
    }
}

#[async_trait]
impl RepositoryHost for FakeRepositoryHost {
    async fn fetch_repository(&self, repo: &str) -> Result<RepoInfo, FetchError> {
        self.repositories
            .get(repo)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(repo.to_string()))
    }
}
