//! Kotlin stdlib requirement lookup across platform variants

use tracing::{debug, info};

use crate::config::ResolutionMode;
use crate::error::ResolveError;
use crate::metadata::ModuleDescriptor;
use crate::registry::ArtifactRegistry;

/// Finds the Kotlin stdlib version required by a module, starting at the first variant
pub async fn resolve_runtime_version(
    registry: &dyn ArtifactRegistry,
    base_url: &str,
    module: &ModuleDescriptor,
    mode: ResolutionMode,
) -> Result<Option<String>, ResolveError> {
    resolve_runtime_version_from(registry, base_url, module, 0, mode).await
}

/// Walks variants in order from `start`, one request at a time, and returns
/// the `requires` version of the first stdlib dependency found.
///
/// A variant is skipped when its platform module declares no dependencies, has
/// no stdlib dependency, or the stdlib dependency has no `requires`. In strict
/// mode a stdlib dependency without any version object is an error; in lenient
/// mode it is skipped too. `Ok(None)` means every variant was tried. A module
/// without any variants is `ResolveError::NoVariants`.
pub async fn resolve_runtime_version_from(
    registry: &dyn ArtifactRegistry,
    base_url: &str,
    module: &ModuleDescriptor,
    start: usize,
    mode: ResolutionMode,
) -> Result<Option<String>, ResolveError> {
    let component_version = &module.component.version;

    if module.variants.is_empty() {
        return Err(ResolveError::NoVariants {
            component_version: component_version.clone(),
        });
    }

    for (idx, variant) in module.variants.iter().enumerate().skip(start) {
        info!("Resolving stdlib version {} idx {}", base_url, idx);

        let location = variant
            .available_at
            .as_ref()
            .ok_or_else(|| ResolveError::MissingLocation {
                variant: variant.name.clone(),
            })?;

        let platform = registry
            .fetch_platform_module(base_url, component_version, &location.url)
            .await?;

        let first = platform
            .variants
            .first()
            .ok_or_else(|| ResolveError::EmptyPlatformModule {
                url: location.url.clone(),
            })?;

        let Some(dependencies) = &first.dependencies else {
            debug!("No dependencies in {}", location.url);
            continue;
        };

        let Some(stdlib) = dependencies.iter().find(|dep| dep.is_stdlib()) else {
            debug!("No stdlib dependency in {}", location.url);
            continue;
        };

        match &stdlib.version {
            Some(constraint) => match &constraint.requires {
                Some(requires) => return Ok(Some(requires.clone())),
                None => debug!("{} has no required version in {}", stdlib.module, location.url),
            },
            None if mode.is_strict() => {
                return Err(ResolveError::MissingRequirement {
                    group: stdlib.group.clone(),
                    module: stdlib.module.clone(),
                    url: location.url.clone(),
                });
            }
            None => debug!("{} has no version in {}", stdlib.module, location.url),
        }
    }

    Ok(None)
}
