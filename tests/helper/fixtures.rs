//! Document builders shared by the pipeline tests

use kmp_catalog::metadata::{ModuleDescriptor, PlatformModule, RepoInfo, VersioningManifest};
use serde_json::json;

pub fn manifest(group_id: &str, artifact_id: &str, versions: &[&str]) -> VersioningManifest {
    VersioningManifest::new(
        group_id,
        artifact_id,
        versions.last().copied().unwrap_or_default(),
        "20201015120000",
        versions.iter().map(|v| v.to_string()).collect(),
    )
}

/// Root module whose variants point at the given platform module locations
pub fn root_module(version: &str, locations: &[&str]) -> ModuleDescriptor {
    let variants: Vec<_> = locations
        .iter()
        .enumerate()
        .map(|(i, url)| {
            json!({
                "name": format!("variant{}", i),
                "attributes": { "org.jetbrains.kotlin.platform.type": "jvm" },
                "available-at": { "url": url }
            })
        })
        .collect();

    serde_json::from_value(json!({
        "component": { "version": version },
        "createdBy": { "gradle": { "version": "6.7" } },
        "variants": variants
    }))
    .unwrap()
}

pub fn stdlib_platform_module(requires: &str) -> PlatformModule {
    serde_json::from_value(json!({
        "variants": [{ "dependencies": [
            { "group": "org.jetbrains.kotlin", "module": "kotlin-stdlib", "version": { "requires": requires } }
        ]}]
    }))
    .unwrap()
}

pub fn repo_info(full_name: &str) -> RepoInfo {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    RepoInfo {
        name: name.to_string(),
        full_name: full_name.to_string(),
        html_url: format!("https://github.com/{}", full_name),
        description: None,
        stars_count: 10,
        watchers_count: 2,
        issues_count: 1,
        forks_count: 3,
        license: Some("Apache License 2.0".to_string()),
        topics: vec!["kotlin-multiplatform".to_string()],
    }
}
