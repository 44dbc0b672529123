//! Maven `maven-metadata.xml` parsing

use serde::Deserialize;

use crate::error::FetchError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    group_id: String,
    artifact_id: String,
    versioning: RawVersioning,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVersioning {
    latest: String,
    last_updated: String,
    versions: RawVersions,
}

#[derive(Debug, Deserialize)]
struct RawVersions {
    #[serde(default)]
    version: Vec<String>,
}

/// Versioning manifest of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersioningManifest {
    pub group_id: String,
    pub artifact_id: String,
    /// `groupId:artifactId`
    pub path: String,
    pub latest_version: String,
    /// Maven timestamp, `yyyyMMddHHmmss`
    pub last_updated: String,
    /// Version identifiers in manifest order
    pub versions: Vec<String>,
}

impl VersioningManifest {
    pub fn new(
        group_id: &str,
        artifact_id: &str,
        latest_version: &str,
        last_updated: &str,
        versions: Vec<String>,
    ) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            path: format!("{}:{}", group_id, artifact_id),
            latest_version: latest_version.to_string(),
            last_updated: last_updated.to_string(),
            versions,
        }
    }

    /// Parses the XML body of `maven-metadata.xml`
    pub fn parse(xml: &str) -> Result<Self, FetchError> {
        let raw: RawMetadata = quick_xml::de::from_str(xml)
            .map_err(|e| FetchError::InvalidResponse(format!("maven-metadata.xml: {}", e)))?;

        Ok(Self::new(
            &raw.group_id,
            &raw.artifact_id,
            &raw.versioning.latest,
            &raw.versioning.last_updated,
            raw.versioning.versions.version,
        ))
    }
}
