use serde::Serialize;
use std::collections::HashSet;

// DATA STRUCTURES

/// A rectangular table of text cells with a unique, ordered header.
///
/// Tables are never mutated after loading; filtering produces a new table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    source: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw header and row cells.
    ///
    /// Every cell is trimmed, header names are made unique and rows are
    /// padded or truncated to the header width.
    pub fn new(source: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = unique_headers(header);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<String> = row
                    .into_iter()
                    .take(width)
                    .map(|cell| cell.trim().to_owned())
                    .collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Self {
            source: source.into(),
            columns,
            rows,
        }
    }

    /// Label of the input this table was loaded from (usually the file name).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// A table without rows or without columns holds no usable data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of the named column in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or("", String::as_str))
                .collect(),
        )
    }

    /// Cell at 0-based `(row, column)` position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Same source and header with a different set of rows.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: self.source.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Blank headers become `Unnamed: {index}`, repeats get a `.{n}` suffix.
fn unique_headers(header: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(header.len());
    let mut out = Vec::with_capacity(header.len());

    for (idx, raw) in header.into_iter().enumerate() {
        let base = match raw.trim() {
            "" => format!("Unnamed: {idx}"),
            name => name.to_owned(),
        };

        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}

/// One category and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub category: String,
    pub count: usize,
    /// Position of the category's first occurrence in the counted stream.
    #[serde(skip)]
    pub(crate) first_seen: usize,
}

/// Categories with counts, ordered by count descending.
///
/// Equal counts keep the order in which the categories first appeared in the
/// counted stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Entries must already be sorted; see [`super::frequency::FrequencyCounter`].
    pub(crate) fn from_sorted(entries: Vec<FrequencyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of counted rows.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
    }

    pub fn as_pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.category.as_str(), e.count))
            .collect()
    }

    /// Display selection over the table.
    ///
    /// With `sort_descending` the count order is kept, otherwise entries are
    /// listed in first-appearance order. `top_n == 0` keeps every entry.
    pub fn view(&self, top_n: usize, sort_descending: bool) -> Vec<&FrequencyEntry> {
        let mut view: Vec<&FrequencyEntry> = self.entries.iter().collect();
        if !sort_descending {
            view.sort_by_key(|e| e.first_seen);
        }
        if top_n > 0 {
            view.truncate(top_n);
        }
        view
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
