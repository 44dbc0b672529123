//! Per-library pipeline and catalog-wide fan-out

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::catalog::LibraryDescriptor;
use crate::config::ResolutionMode;
use crate::error::HarvestError;
use crate::harvest::versions::fetch_versions_info;
use crate::metadata::{LibraryRecord, RepoInfo};
use crate::registry::{ArtifactRegistry, RepositoryHost};

/// Runs the per-library pipeline against an artifact registry and a repository host
pub struct Harvester {
    artifacts: Arc<dyn ArtifactRegistry>,
    host: Arc<dyn RepositoryHost>,
    mode: ResolutionMode,
}

impl Harvester {
    /// Creates a new Harvester over the given sources
    pub fn new(
        artifacts: Arc<dyn ArtifactRegistry>,
        host: Arc<dyn RepositoryHost>,
        mode: ResolutionMode,
    ) -> Self {
        Self {
            artifacts,
            host,
            mode,
        }
    }

    /// Harvests every library concurrently.
    ///
    /// Records come back in catalog order. The first failing library aborts
    /// the whole run and no records are returned.
    pub async fn harvest_all(
        &self,
        catalog: &[LibraryDescriptor],
    ) -> Result<Vec<LibraryRecord>, HarvestError> {
        info!("Harvesting {} libraries", catalog.len());

        let records = try_join_all(catalog.iter().map(|library| self.harvest_library(library)))
            .await
            .inspect_err(|e| warn!("Harvest aborted: {}", e))?;

        info!("Harvested {} libraries", records.len());
        Ok(records)
    }

    /// Manifest, then versions, then GitHub info for one library
    pub async fn harvest_library(
        &self,
        library: &LibraryDescriptor,
    ) -> Result<LibraryRecord, HarvestError> {
        let base_url = &library.package_repo_base_url;
        info!("Fetching maven metadata {}", base_url);

        let manifest = self
            .artifacts
            .fetch_metadata(base_url)
            .await
            .map_err(|source| HarvestError::Manifest {
                base_url: base_url.clone(),
                source,
            })?;

        let versions =
            fetch_versions_info(self.artifacts.as_ref(), base_url, &manifest, self.mode).await?;

        let github = self.fetch_repo_info(&library.source_repo_id).await?;

        Ok(LibraryRecord::new(
            manifest,
            versions,
            github,
            &library.category,
        ))
    }

    async fn fetch_repo_info(&self, repo: &str) -> Result<RepoInfo, HarvestError> {
        let info = self
            .host
            .fetch_repository(repo)
            .await
            .map_err(|source| HarvestError::Repository {
                repo: repo.to_string(),
                source,
            })?;

        if info.license.is_none() && self.mode.is_strict() {
            return Err(HarvestError::MissingLicense {
                repo: repo.to_string(),
            });
        }

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::metadata::VersioningManifest;
    use crate::registry::{MockArtifactRegistry, MockRepositoryHost};
    use mockall::predicate::eq;

    fn repo_info(license: Option<&str>) -> RepoInfo {
        RepoInfo {
            name: "moko-mvvm".to_string(),
            full_name: "icerockdev/moko-mvvm".to_string(),
            html_url: "https://github.com/icerockdev/moko-mvvm".to_string(),
            description: Some("MVVM for Kotlin Multiplatform".to_string()),
            stars_count: 700,
            watchers_count: 25,
            issues_count: 12,
            forks_count: 80,
            license: license.map(|l| l.to_string()),
            topics: vec![],
        }
    }

    fn artifacts_without_versions() -> MockArtifactRegistry {
        let mut artifacts = MockArtifactRegistry::new();
        artifacts.expect_fetch_metadata().returning(|_| {
            Ok(VersioningManifest::new(
                "dev.icerock.moko",
                "mvvm",
                "0.8.0",
                "20200901000000",
                vec![],
            ))
        });
        artifacts
    }

    fn library() -> LibraryDescriptor {
        LibraryDescriptor::new(
            "https://repo.example.com/m2/dev/icerock/moko/mvvm/",
            "icerockdev/moko-mvvm",
            "architecture",
        )
    }

    #[tokio::test]
    async fn harvest_library_attaches_github_info_and_category() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository()
            .with(eq("icerockdev/moko-mvvm"))
            .times(1)
            .returning(|_| Ok(repo_info(Some("Apache License 2.0"))));

        let harvester = Harvester::new(
            Arc::new(artifacts_without_versions()),
            Arc::new(host),
            ResolutionMode::Strict,
        );
        let record = harvester.harvest_library(&library()).await.unwrap();

        assert_eq!(record.path, "dev.icerock.moko:mvvm");
        assert_eq!(record.category, "architecture");
        assert_eq!(record.github, repo_info(Some("Apache License 2.0")));
        assert!(record.versions.is_empty());
    }

    #[tokio::test]
    async fn harvest_library_fails_on_missing_license_in_strict_mode() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository()
            .returning(|_| Ok(repo_info(None)));

        let harvester = Harvester::new(
            Arc::new(artifacts_without_versions()),
            Arc::new(host),
            ResolutionMode::Strict,
        );
        let result = harvester.harvest_library(&library()).await;

        assert!(matches!(result, Err(HarvestError::MissingLicense { .. })));
    }

    #[tokio::test]
    async fn harvest_library_keeps_missing_license_in_lenient_mode() {
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository()
            .returning(|_| Ok(repo_info(None)));

        let harvester = Harvester::new(
            Arc::new(artifacts_without_versions()),
            Arc::new(host),
            ResolutionMode::Lenient,
        );
        let record = harvester.harvest_library(&library()).await.unwrap();

        assert_eq!(record.github.license, None);
    }

    #[tokio::test]
    async fn harvest_library_skips_github_when_manifest_fails() {
        let mut artifacts = MockArtifactRegistry::new();
        artifacts
            .expect_fetch_metadata()
            .returning(|url| Err(FetchError::NotFound(url.to_string())));
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository().never();

        let harvester = Harvester::new(Arc::new(artifacts), Arc::new(host), ResolutionMode::Strict);
        let result = harvester.harvest_library(&library()).await;

        assert!(matches!(result, Err(HarvestError::Manifest { .. })));
    }

    #[tokio::test]
    async fn harvest_all_fails_when_any_library_fails() {
        let mut artifacts = MockArtifactRegistry::new();
        artifacts
            .expect_fetch_metadata()
            .with(eq("https://broken.example.com/"))
            .returning(|url| Err(FetchError::NotFound(url.to_string())));
        artifacts.expect_fetch_metadata().returning(|_| {
            Ok(VersioningManifest::new("a", "b", "1.0", "20200101000000", vec![]))
        });
        let mut host = MockRepositoryHost::new();
        host.expect_fetch_repository()
            .returning(|_| Ok(repo_info(Some("MIT License"))));

        let catalog = vec![
            library(),
            LibraryDescriptor::new("https://broken.example.com/", "owner/broken", "misc"),
        ];
        let harvester = Harvester::new(Arc::new(artifacts), Arc::new(host), ResolutionMode::Strict);
        let result = harvester.harvest_all(&catalog).await;

        assert!(matches!(
            result,
            Err(HarvestError::Manifest { ref base_url, .. })
                if base_url.as_str() == "https://broken.example.com/"
        ));
    }
}
