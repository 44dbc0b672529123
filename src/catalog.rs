//! Static catalog of libraries to harvest

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::HarvestError;

/// One library to harvest. Catalog order is output order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryDescriptor {
    /// Maven directory of the artifact, ending with `/`
    /// (e.g. `https://repo1.maven.org/maven2/dev/icerock/moko/resources/`)
    #[serde(rename = "maven", alias = "packageRepoBaseUrl")]
    pub package_repo_base_url: String,
    /// GitHub repository in `owner/repo` form
    #[serde(rename = "github", alias = "sourceRepoId")]
    pub source_repo_id: String,
    pub category: String,
}

impl LibraryDescriptor {
    pub fn new(base_url: &str, repo: &str, category: &str) -> Self {
        Self {
            package_repo_base_url: base_url.to_string(),
            source_repo_id: repo.to_string(),
            category: category.to_string(),
        }
    }
}

/// Parses a catalog from its JSON text
pub fn parse_catalog(path: &Path, content: &str) -> Result<Vec<LibraryDescriptor>, HarvestError> {
    serde_json::from_str(content).map_err(|source| HarvestError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the catalog file at `path`
pub fn load_catalog(path: &Path) -> Result<Vec<LibraryDescriptor>, HarvestError> {
    let content = std::fs::read_to_string(path).map_err(|source| HarvestError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(path, &content)?;
    info!("Loaded {} libraries from {:?}", catalog.len(), path);

    Ok(catalog)
}
