use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

// =============================================================================
// Endpoints and defaults
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default location of the library catalog
pub const DEFAULT_CATALOG_PATH: &str = "libraries.json";

/// Default location of the aggregated output
pub const DEFAULT_OUTPUT_PATH: &str = "public/data.json";

/// User agent sent with every request
pub const USER_AGENT: &str = "kmp-catalog";

/// Accept header for the repository endpoint (topics preview)
pub const GITHUB_ACCEPT: &str = "application/vnd.github.mercy-preview+json";

// =============================================================================
// Gradle module metadata conventions
// =============================================================================

/// Maven group of the Kotlin standard library
pub const STDLIB_GROUP: &str = "org.jetbrains.kotlin";

/// Module name prefix shared by all standard library artifacts
/// (kotlin-stdlib, kotlin-stdlib-common, kotlin-stdlib-jdk8, ...)
pub const STDLIB_MODULE_PREFIX: &str = "kotlin-stdlib";

/// Variant attribute carrying the platform type (jvm, js, native, common, androidJvm)
pub const PLATFORM_TYPE_ATTRIBUTE: &str = "org.jetbrains.kotlin.platform.type";

/// Variant attribute carrying the Kotlin/Native target (ios_arm64, linux_x64, ...)
pub const NATIVE_TARGET_ATTRIBUTE: &str = "org.jetbrains.kotlin.native.target";

/// How data-quality gaps in remote documents are treated.
///
/// `Strict` treats a stdlib dependency without a version object, or a
/// repository without a license, as fatal and aborts the run.
/// `Lenient` treats both as absent values instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolutionMode {
    #[default]
    Strict,
    Lenient,
}

impl ResolutionMode {
    pub fn is_strict(self) -> bool {
        self == ResolutionMode::Strict
    }
}

/// Settings for one harvest run
#[derive(Clone, PartialEq)]
pub struct HarvestConfig {
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
    pub github_api_url: String,
    pub github_token: String,
    pub mode: ResolutionMode,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl HarvestConfig {
    pub fn new(github_token: impl Into<String>) -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_token: github_token.into(),
            mode: ResolutionMode::default(),
            request_timeout: None,
        }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for HarvestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarvestConfig")
            .field("catalog_path", &self.catalog_path)
            .field("output_path", &self.output_path)
            .field("github_api_url", &self.github_api_url)
            .field("github_token", &"<redacted>")
            .field("mode", &self.mode)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
