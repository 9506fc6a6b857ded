use super::cleaning::ValueNormalizer;
use super::columns::{ResolvedColumn, resolve_column};
use super::filter::filter_rows;
use super::frequency::{aggregate, count_values};
use super::io::{LoadedFile, load_tables};
use super::title::synthesize_title;
use super::types::{FrequencyTable, Table};
use crate::config::PipelineConfig;
use crate::error::{Result, TallyError};
use serde::Serialize;
use std::path::PathBuf;

/// Why a file did not contribute to the merged count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    Unreadable,
    Empty,
    ColumnMissing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub kind: SkipKind,
    pub reason: String,
}

/// Counts for one contributing file.
#[derive(Debug, Clone, Serialize)]
pub struct FileCounts {
    pub file: String,
    pub rows_dropped: usize,
    pub counts: FrequencyTable,
}

/// Everything one batch run produces.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub column: ResolvedColumn,
    pub title: String,
    pub merged: FrequencyTable,
    pub per_file: Vec<FileCounts>,
    pub skipped: Vec<SkippedFile>,
    /// Retained rows across contributing files
    pub total_rows: usize,
    #[serde(skip)]
    pub duration: std::time::Duration,
}

impl BatchReport {
    pub fn summary(&self) -> String {
        format!(
            "Counted {} rows from {} file(s) in column '{}': {} categories, {} file(s) skipped, {:.2}s",
            self.total_rows,
            self.per_file.len(),
            self.column.name,
            self.merged.len(),
            self.skipped.len(),
            self.duration.as_secs_f64()
        )
    }
}

/// Split loaded files into readable tables with data rows and skipped files.
///
/// Each skip is logged with its reason. Input order is kept on both sides.
pub fn usable_tables(files: Vec<LoadedFile>) -> (Vec<(String, Table)>, Vec<SkippedFile>) {
    let mut usable = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for file in files {
        match file.outcome {
            Ok(table) if table.is_empty() => {
                tracing::warn!("Skipping {}: file has no data rows", file.label);
                skipped.push(SkippedFile {
                    file: file.label,
                    kind: SkipKind::Empty,
                    reason: "file has no data rows".to_owned(),
                });
            }
            Ok(table) => usable.push((file.label, table)),
            Err(err) => {
                tracing::warn!("Skipping {}: {}", file.label, err);
                skipped.push(SkippedFile {
                    file: file.label,
                    kind: SkipKind::Unreadable,
                    reason: err.to_string(),
                });
            }
        }
    }
    (usable, skipped)
}

/// Load `paths` and run the batch over them.
pub fn run_batch_files(paths: &[PathBuf], config: &PipelineConfig) -> Result<BatchReport> {
    tracing::info!("Loading {} file(s)", paths.len());
    run_batch(load_tables(paths), config)
}

/// Resolve the column, filter, normalize and count every loaded file.
///
/// Unreadable, empty and column-less files are skipped with a warning. The
/// batch fails with [`TallyError::EmptyDataset`] when nothing is left to count.
pub fn run_batch(files: Vec<LoadedFile>, config: &PipelineConfig) -> Result<BatchReport> {
    let start = std::time::Instant::now();
    let normalizer = ValueNormalizer::from_config(config);

    let (usable, mut skipped) = usable_tables(files);

    let Some((first_label, first_table)) = usable.first() else {
        tracing::error!("No readable file with data in the batch");
        return Err(TallyError::EmptyDataset);
    };
    let column = resolve_column(first_table.columns(), &config.column).ok_or_else(|| {
        TallyError::Config(format!("{first_label} has no columns to aggregate"))
    })?;
    tracing::info!(
        "Aggregating column '{}' (from {} in {})",
        column.name,
        config.column,
        first_label
    );

    let mut per_file = Vec::with_capacity(usable.len());
    let mut sequences = Vec::with_capacity(usable.len());
    for (label, table) in &usable {
        if !table.has_column(&column.name) {
            let err = TallyError::ColumnMissing {
                file: label.clone(),
                column: column.name.clone(),
            };
            tracing::warn!("Skipping {}: {}", label, err);
            skipped.push(SkippedFile {
                file: label.clone(),
                kind: SkipKind::ColumnMissing,
                reason: err.to_string(),
            });
            continue;
        }

        let filtered = filter_rows(table, &config.exclusion);
        let values = filtered
            .table
            .column_values(&column.name)
            .map(|values| normalizer.normalize_all(values))
            .unwrap_or_default();

        per_file.push(FileCounts {
            file: label.clone(),
            rows_dropped: filtered.dropped,
            counts: count_values(&values),
        });
        sequences.push(values);
    }

    let merged = aggregate(&sequences).inspect_err(|_| {
        tracing::error!("No rows left to count in column '{}'", column.name);
    })?;

    let tables: Vec<Table> = usable.into_iter().map(|(_, table)| table).collect();
    let title = synthesize_title(&tables, &normalizer, &config.labels);

    let report = BatchReport {
        column,
        title,
        total_rows: merged.total(),
        merged,
        per_file,
        skipped,
        duration: start.elapsed(),
    };
    tracing::info!("{}", report.summary());
    Ok(report)
}
