use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kmp_catalog::config::{
    DEFAULT_CATALOG_PATH, DEFAULT_GITHUB_API_URL, DEFAULT_OUTPUT_PATH, HarvestConfig,
    ResolutionMode,
};

#[derive(Parser)]
#[command(name = "kmp-catalog")]
#[command(version, about = "Harvest Kotlin Multiplatform library metadata into a catalog file")]
struct Cli {
    /// GitHub token used for repository lookups
    #[arg(env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Library catalog (JSON array of {maven, github, category})
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    #[arg(long, default_value = DEFAULT_GITHUB_API_URL)]
    github_api_url: String,

    /// How missing stdlib versions and licenses are treated
    #[arg(long, value_enum, default_value_t = ResolutionMode::Strict)]
    mode: ResolutionMode,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn harvest_config(&self) -> HarvestConfig {
        HarvestConfig {
            catalog_path: self.catalog.clone(),
            output_path: self.output.clone(),
            github_api_url: self.github_api_url.clone(),
            github_token: self.token.clone(),
            mode: self.mode,
            request_timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref(), cli.json_logs)?;

    let config = cli.harvest_config();
    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(kmp_catalog::harvest::run(&config));

    let count = result?;
    info!("Catalog written with {} libraries", count);
    Ok(())
}

/// Logs go to stderr, or to `log_file` through a non-blocking appender.
/// Filtering follows `RUST_LOG` and defaults to `info`.
fn init_tracing(log_file: Option<&Path>, json: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {:?}", path))?;
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (fmt::writer::BoxMakeWriter::new(writer), Some(guard))
        }
        None => (fmt::writer::BoxMakeWriter::new(std::io::stderr), None),
    };

    let ansi = log_file.is_none();
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_ansi(ansi).with_writer(writer))
            .init();
    }

    Ok(guard)
}
