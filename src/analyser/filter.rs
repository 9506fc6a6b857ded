use super::types::Table;

/// Result of pruning a table.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub table: Table,
    pub dropped: usize,
}

/// True when any cell contains `needle`. An empty needle never matches.
pub fn row_matches<I, S>(cells: I, needle: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    !needle.is_empty() && cells.into_iter().any(|cell| cell.as_ref().contains(needle))
}

/// Drop every row with a cell containing `exclusion` (case-sensitive).
/// Retained rows keep their relative order.
pub fn filter_rows(table: &Table, exclusion: &str) -> FilterOutcome {
    if exclusion.is_empty() {
        return FilterOutcome {
            table: table.clone(),
            dropped: 0,
        };
    }

    let kept: Vec<Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| !row_matches(row.iter(), exclusion))
        .cloned()
        .collect();
    let dropped = table.height() - kept.len();

    if dropped > 0 {
        tracing::debug!(
            "Dropped {} of {} rows containing '{}' from {}",
            dropped,
            table.height(),
            exclusion,
            table.source()
        );
    }

    FilterOutcome {
        table: table.with_rows(kept),
        dropped,
    }
}
