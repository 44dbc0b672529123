//! Gradle module metadata (`.module` files)
//!
//! Only the fields the harvester reads are modeled; everything else in the
//! document is ignored.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::{
    NATIVE_TARGET_ATTRIBUTE, PLATFORM_TYPE_ATTRIBUTE, STDLIB_GROUP, STDLIB_MODULE_PREFIX,
};
use crate::metadata::types::TargetInfo;

/// Root module descriptor published next to each version's artifacts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    pub component: Component,
    pub created_by: CreatedBy,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Component {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedBy {
    pub gradle: GradleInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GradleInfo {
    pub version: String,
}

/// A platform variant of the root module
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    /// Location of the platform-specific module, relative to the component version directory
    #[serde(rename = "available-at")]
    pub available_at: Option<AvailableAt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailableAt {
    pub url: String,
}

/// Platform-specific module referenced by a root variant's `available-at`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformModule {
    #[serde(default)]
    pub variants: Vec<PlatformVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformVariant {
    pub dependencies: Option<Vec<Dependency>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub module: String,
    pub version: Option<VersionConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionConstraint {
    pub requires: Option<String>,
}

impl ModuleDescriptor {
    pub fn gradle_version(&self) -> &str {
        &self.created_by.gradle.version
    }

    /// Maps each variant name to its platform attributes, in declaration order
    pub fn targets(&self) -> IndexMap<String, TargetInfo> {
        self.variants
            .iter()
            .map(|variant| {
                (
                    variant.name.clone(),
                    TargetInfo {
                        platform_type: variant.attribute(PLATFORM_TYPE_ATTRIBUTE),
                        native_target: variant.attribute(NATIVE_TARGET_ATTRIBUTE),
                    },
                )
            })
            .collect()
    }
}

impl Variant {
    fn attribute(&self, key: &str) -> Option<String> {
        self.attributes
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

impl Dependency {
    /// Whether this dependency points at a Kotlin standard library artifact
    pub fn is_stdlib(&self) -> bool {
        self.group == STDLIB_GROUP && self.module.starts_with(STDLIB_MODULE_PREFIX)
    }
}
