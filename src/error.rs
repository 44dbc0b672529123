use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single HTTP exchange with a Maven repository or GitHub
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure while walking platform variants for the stdlib requirement
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Variant {variant} has no available-at location")]
    MissingLocation { variant: String },

    #[error("Module {component_version} declares no variants")]
    NoVariants { component_version: String },

    #[error("Platform module {url} declares no variants")]
    EmptyPlatformModule { url: String },

    #[error("Dependency {group}:{module} in {url} has no version")]
    MissingRequirement {
        group: String,
        module: String,
        url: String,
    },
}

/// Fatal errors that abort the whole harvest
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Failed to read catalog {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path:?}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch maven metadata from {base_url}: {source}")]
    Manifest {
        base_url: String,
        source: FetchError,
    },

    #[error("Failed to resolve stdlib version for {path} {version}: {source}")]
    MissingRuntimeRequirement {
        path: String,
        version: String,
        source: ResolveError,
    },

    #[error("Failed to fetch repository {repo}: {source}")]
    Repository { repo: String, source: FetchError },

    #[error("Repository {repo} has no license")]
    MissingLicense { repo: String },

    #[error("Failed to write output {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(#[from] serde_json::Error),
}
