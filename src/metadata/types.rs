//! Records emitted into the catalog output

use indexmap::IndexMap;
use serde::Serialize;

use crate::metadata::manifest::VersioningManifest;

/// Platform attributes of one variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetInfo {
    #[serde(rename = "platform", skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    #[serde(rename = "target", skip_serializing_if = "Option::is_none")]
    pub native_target: Option<String>,
}

/// Resolved details of one published version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(rename = "mpp")]
    pub is_multiplatform: bool,
    #[serde(rename = "gradle", skip_serializing_if = "Option::is_none")]
    pub build_tool_version: Option<String>,
    #[serde(rename = "kotlin", skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<IndexMap<String, TargetInfo>>,
}

impl VersionInfo {
    /// Sentinel for versions without usable module metadata
    pub fn not_multiplatform(version: &str) -> Self {
        Self {
            version: version.to_string(),
            is_multiplatform: false,
            build_tool_version: None,
            runtime_version: None,
            targets: None,
        }
    }

    pub fn multiplatform(
        version: &str,
        build_tool_version: &str,
        runtime_version: Option<String>,
        targets: IndexMap<String, TargetInfo>,
    ) -> Self {
        Self {
            version: version.to_string(),
            is_multiplatform: true,
            build_tool_version: Some(build_tool_version.to_string()),
            runtime_version,
            targets: Some(targets),
        }
    }
}

/// GitHub repository statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stars_count: u64,
    pub watchers_count: u64,
    pub issues_count: u64,
    pub forks_count: u64,
    pub license: Option<String>,
    pub topics: Vec<String>,
}

/// One catalog entry in the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub path: String,
    pub latest_version: String,
    pub last_updated: String,
    /// Multiplatform versions only
    pub versions: Vec<VersionInfo>,
    pub github: RepoInfo,
    pub category: String,
}

impl LibraryRecord {
    /// Assembles the record, dropping non-multiplatform versions
    pub fn new(
        manifest: VersioningManifest,
        versions: Vec<VersionInfo>,
        github: RepoInfo,
        category: &str,
    ) -> Self {
        Self {
            group_id: manifest.group_id,
            artifact_id: manifest.artifact_id,
            path: manifest.path,
            latest_version: manifest.latest_version,
            last_updated: manifest.last_updated,
            versions: versions
                .into_iter()
                .filter(|v| v.is_multiplatform)
                .collect(),
            github,
            category: category.to_string(),
        }
    }
}
