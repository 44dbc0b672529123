//! Catalog file writer

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::HarvestError;
use crate::metadata::LibraryRecord;

/// Serializes records as JSON indented with a single space
pub fn render_records(records: &[LibraryRecord]) -> Result<Vec<u8>, HarvestError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes records to `path`, creating parent directories as needed
pub fn write_records(path: &Path, records: &[LibraryRecord]) -> Result<(), HarvestError> {
    let content = render_records(records)?;

    let to_write_error = |source| HarvestError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(path, content).map_err(to_write_error)?;

    info!("Wrote {} libraries to {:?}", records.len(), path);
    Ok(())
}
