//! Tabular export of the collected advertisements.

use std::fs;
use std::path::Path;

use anyhow::Context;
use epcrawl_core::{AdRecord, ExportFormat};

/// Writes `records` to `path` in `format`, replacing any existing file.
///
/// CSV output has a header row with the record field names followed by one
/// row per record; JSON output is a pretty-printed array.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub(crate) fn export_records(
    records: &[AdRecord],
    path: &Path,
    format: ExportFormat,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let written = match format {
        ExportFormat::Csv => write_csv(records, path),
        ExportFormat::Json => write_json(records, path),
    };
    written.with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(rows = records.len(), path = %path.display(), %format, "export written");
    Ok(())
}

fn write_csv(records: &[AdRecord], path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    // `serialize` only emits the header alongside the first row.
    if records.is_empty() {
        writer.write_record(AdRecord::COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(records: &[AdRecord], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
