//! Harvests Kotlin Multiplatform library metadata into a single catalog file.
//!
//! For each catalog entry the harvester reads the Maven versioning manifest,
//! every version's Gradle module metadata, the Kotlin stdlib version required
//! by its platform variants, and the GitHub repository statistics.

pub mod catalog;
pub mod config;
pub mod error;
pub mod harvest;
pub mod metadata;
pub mod registries;
pub mod registry;
