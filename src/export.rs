//! CSV export of frequency tables.
//!
//! Exports start with a UTF-8 byte-order mark so spreadsheet tools that assume
//! a legacy locale encoding still open Korean labels correctly.

use crate::analyser::flows::FileCounts;
use crate::analyser::types::FrequencyTable;
use crate::config::Labels;
use crate::error::{Result, ResultExt as _};
use std::path::Path;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Two-column `(category, count)` CSV of the full table.
pub fn export_csv_bytes(table: &FrequencyTable, labels: &Labels) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record([labels.category.as_str(), labels.count.as_str()])?;
    for entry in table {
        writer.write_record([entry.category.as_str(), entry.count.to_string().as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))
        .context("Failed to finish CSV export")
}

/// Per-file tables in one CSV with a leading `file` column.
pub fn export_per_file_csv_bytes(files: &[FileCounts], labels: &Labels) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(["file", labels.category.as_str(), labels.count.as_str()])?;
    for file in files {
        for entry in &file.counts {
            writer.write_record([
                file.file.as_str(),
                entry.category.as_str(),
                entry.count.to_string().as_str(),
            ])?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))
        .context("Failed to finish CSV export")
}

/// Write the export for `table` to `path`.
pub fn export_csv(table: &FrequencyTable, labels: &Labels, path: &Path) -> Result<()> {
    let bytes = export_csv_bytes(table, labels)?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Exported {} categories to {}", table.len(), path.display());
    Ok(())
}
