use super::types::Table;
use crate::error::{Result, TallyError};
use calamine::{Data, Reader as _, open_workbook_auto};
use encoding_rs::{EUC_KR, Encoding, UTF_8};
use rayon::prelude::*;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// One input of a batch and what loading it produced.
#[derive(Debug)]
pub struct LoadedFile {
    pub label: String,
    pub path: PathBuf,
    pub outcome: Result<Table>,
}

/// Name used for a file in titles, warnings and per-file reports.
pub fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Load every path, in parallel, keeping the arrival order of `paths`.
pub fn load_tables(paths: &[PathBuf]) -> Vec<LoadedFile> {
    paths
        .par_iter()
        .map(|path| LoadedFile {
            label: file_label(path),
            path: path.clone(),
            outcome: load_table(path),
        })
        .collect()
}

/// Load one file as a table of trimmed text cells.
///
/// # Errors
///
/// Returns [`TallyError::Load`] naming the file when it cannot be read or
/// parsed, or when its extension is not a supported tabular format.
pub fn load_table(path: &Path) -> Result<Table> {
    let label = file_label(path);
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = match ext.as_str() {
        "csv" | "txt" => read_delimited(path, &label, b',')?,
        "tsv" => read_delimited(path, &label, b'\t')?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, &label)?,
        _ => {
            return Err(TallyError::load(
                label,
                format!("unsupported file extension '{ext}'"),
            ));
        }
    };

    tracing::info!(
        "Loaded {}: {} rows, {} columns",
        label,
        table.height(),
        table.width()
    );
    Ok(table)
}

impl Table {
    /// Parse comma-separated text whose first record is the header.
    pub fn from_csv_str(source: impl Into<String>, content: &str) -> Result<Self> {
        let source: String = source.into();
        parse_delimited(&source, content, b',')
    }
}

fn read_delimited(path: &Path, label: &str, delimiter: u8) -> Result<Table> {
    let bytes = std::fs::read(path).map_err(|e| TallyError::load(label, e))?;
    let content = decode_text(&bytes);
    parse_delimited(label, &content, delimiter)
}

/// Decode file bytes as UTF-8 (dropping a byte-order mark), or as EUC-KR when
/// the bytes are not valid UTF-8. Older spreadsheet tools export Korean text
/// in that legacy encoding.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let encoding: &'static Encoding =
        if Encoding::for_bom(bytes).is_some() || std::str::from_utf8(bytes).is_ok() {
            UTF_8
        } else {
            EUC_KR
        };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            "Input is not valid {}; undecodable bytes were replaced",
            used.name()
        );
    }
    text
}

fn parse_delimited(source: &str, content: &str, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();
    let header: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| TallyError::load(source, e))?
            .iter()
            .map(str::to_owned)
            .collect(),
        None => return Ok(Table::new(source, Vec::new(), Vec::new())),
    };

    let rows = records
        .enumerate()
        .map(|(idx, record)| {
            record
                .map(|r| r.iter().map(str::to_owned).collect::<Vec<_>>())
                .map_err(|e| TallyError::load(source, format!("row {}: {e}", idx + 2)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Table::new(source, header, rows))
}

fn read_workbook(path: &Path, label: &str) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| TallyError::load(label, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TallyError::load(label, "workbook has no worksheets"))?
        .map_err(|e| TallyError::load(label, e))?;

    // Ranges start at the first used cell; pad so letters still line up with A, B, C...
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows().map(|row| {
        std::iter::repeat_n(String::new(), col_offset)
            .chain(row.iter().map(cell_to_text))
            .collect::<Vec<String>>()
    });

    let header = rows.next().unwrap_or_default();
    Ok(Table::new(label, header, rows.collect()))
}

/// Render a spreadsheet cell the way it reads on screen.
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        other => other.to_string(),
    }
}
