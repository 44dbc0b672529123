//! Documents read from Maven repositories and records written to the catalog
//!
//! - [`manifest`]: `maven-metadata.xml` versioning manifest
//! - [`module`]: Gradle module metadata (`.module` JSON) and platform variants
//! - [`types`]: resolved per-version records, GitHub info and the aggregated record

pub mod manifest;
pub mod module;
pub mod types;

pub use manifest::VersioningManifest;
pub use module::{ModuleDescriptor, PlatformModule};
pub use types::{LibraryRecord, RepoInfo, TargetInfo, VersionInfo};
