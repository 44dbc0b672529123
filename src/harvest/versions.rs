//! Per-version module metadata lookup

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::config::ResolutionMode;
use crate::error::{HarvestError, ResolveError};
use crate::harvest::resolver::resolve_runtime_version;
use crate::metadata::{VersionInfo, VersioningManifest};
use crate::registry::ArtifactRegistry;

/// Resolves one version of an artifact.
///
/// Versions whose module metadata cannot be fetched or read (typically
/// artifacts published without Gradle module metadata) come back as the
/// non-multiplatform sentinel. Only a strict-mode missing stdlib requirement
/// is returned as an error.
pub async fn fetch_version_info(
    registry: &dyn ArtifactRegistry,
    base_url: &str,
    manifest: &VersioningManifest,
    version: &str,
    mode: ResolutionMode,
) -> Result<VersionInfo, HarvestError> {
    info!("Fetching version info {} version {}", base_url, version);

    let module = match registry
        .fetch_module(base_url, &manifest.artifact_id, version)
        .await
    {
        Ok(module) => module,
        Err(e) => {
            debug!("{} {} is not multiplatform: {}", manifest.path, version, e);
            return Ok(VersionInfo::not_multiplatform(version));
        }
    };

    match resolve_runtime_version(registry, base_url, &module, mode).await {
        Ok(runtime_version) => Ok(VersionInfo::multiplatform(
            version,
            module.gradle_version(),
            runtime_version,
            module.targets(),
        )),
        Err(source @ ResolveError::MissingRequirement { .. }) => {
            Err(HarvestError::MissingRuntimeRequirement {
                path: manifest.path.clone(),
                version: version.to_string(),
                source,
            })
        }
        Err(e) => {
            debug!("{} {} is not multiplatform: {}", manifest.path, version, e);
            Ok(VersionInfo::not_multiplatform(version))
        }
    }
}

/// Resolves every version listed in the manifest concurrently.
///
/// The result follows manifest order and still contains sentinels.
pub async fn fetch_versions_info(
    registry: &dyn ArtifactRegistry,
    base_url: &str,
    manifest: &VersioningManifest,
    mode: ResolutionMode,
) -> Result<Vec<VersionInfo>, HarvestError> {
    info!("Fetching versions info {}", base_url);

    let futures = manifest
        .versions
        .iter()
        .map(|version| fetch_version_info(registry, base_url, manifest, version, mode));

    try_join_all(futures).await
}
