//! Harvest pipeline
//!
//! ```text
//! catalog ──▶ maven-metadata.xml ──▶ {version}.module ──▶ platform .module
//!    │              (manifest)          (versions)         (stdlib lookup)
//!    │
//!    └──▶ GitHub repository ──▶ LibraryRecord ──▶ data.json
//! ```
//!
//! - [`pipeline`]: per-library chaining and catalog fan-out
//! - [`versions`]: per-version module metadata with the non-multiplatform sentinel
//! - [`resolver`]: sequential walk over platform variants for the stdlib version
//! - [`output`]: JSON writer

pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod versions;

pub use pipeline::Harvester;

use std::sync::Arc;

use tracing::info;

use crate::catalog::load_catalog;
use crate::config::HarvestConfig;
use crate::error::HarvestError;
use crate::registries::{GitHubHost, MavenRegistry, build_client};

/// Runs a full harvest: load the catalog, fetch everything, write the output.
///
/// Nothing is written unless every library succeeds.
pub async fn run(config: &HarvestConfig) -> Result<usize, HarvestError> {
    info!("Starting harvest with {:?}", config);

    let catalog = load_catalog(&config.catalog_path)?;

    let client = build_client(config.request_timeout).map_err(HarvestError::Client)?;
    let harvester = Harvester::new(
        Arc::new(MavenRegistry::new(client.clone())),
        Arc::new(GitHubHost::new(
            client,
            &config.github_api_url,
            &config.github_token,
        )),
        config.mode,
    );

    let records = harvester.harvest_all(&catalog).await?;
    output::write_records(&config.output_path, &records)?;

    Ok(records.len())
}
