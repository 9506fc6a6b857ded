//! Descriptive chart titles sampled from the first row of each table.
//!
//! Three fields are read by position (columns C, D and B, in that order).
//! A single table joins whichever of them have values. Several tables fold
//! each field into a [`FieldSummary`]: one distinct value is used verbatim,
//! more than one becomes "`{first}` 외" ("and others").

use super::cleaning::ValueNormalizer;
use super::types::Table;
use crate::config::Labels;

/// 0-based positions of the sampled fields, in title order (C, D, B).
pub const TITLE_FIELD_POSITIONS: [usize; 3] = [2, 3, 1];

/// What one title field looks like across a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSummary {
    Absent,
    Single(String),
    Multiple { first: String, distinct: usize },
}

impl FieldSummary {
    /// Fold one more sampled value into the summary.
    #[must_use]
    pub fn observe(self, value: Option<&str>, seen: &mut Vec<String>) -> Self {
        let Some(value) = value else {
            return self;
        };
        if seen.iter().any(|v| v == value) {
            return self;
        }
        seen.push(value.to_owned());

        match self {
            Self::Absent => Self::Single(value.to_owned()),
            Self::Single(first) => Self::Multiple { first, distinct: 2 },
            Self::Multiple { first, distinct } => Self::Multiple {
                first,
                distinct: distinct + 1,
            },
        }
    }

    pub fn render(&self, labels: &Labels) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Single(value) => Some(value.clone()),
            Self::Multiple { first, .. } => Some(format!("{first} {}", labels.and_others)),
        }
    }
}

/// Sample the title fields from the first row of `table`.
///
/// Missing columns, blank cells and missing-value spellings are `None`.
pub fn sample_fields(table: &Table, normalizer: &ValueNormalizer) -> [Option<String>; 3] {
    TITLE_FIELD_POSITIONS.map(|col| {
        table
            .cell(0, col)
            .filter(|v| !normalizer.is_absent(v))
            .map(|v| v.trim().to_owned())
    })
}

/// Fold the sampled fields of every table into per-field summaries.
pub fn summarize_fields(tables: &[Table], normalizer: &ValueNormalizer) -> [FieldSummary; 3] {
    let mut summaries = [FieldSummary::Absent, FieldSummary::Absent, FieldSummary::Absent];
    let mut seen: [Vec<String>; 3] = Default::default();

    for table in tables {
        let samples = sample_fields(table, normalizer);
        for ((summary, sample), seen) in summaries
            .iter_mut()
            .zip(samples.iter())
            .zip(seen.iter_mut())
        {
            let current = std::mem::replace(summary, FieldSummary::Absent);
            *summary = current.observe(sample.as_deref(), seen);
        }
    }
    summaries
}

/// Compose the batch title from the loaded tables.
pub fn synthesize_title(
    tables: &[Table],
    normalizer: &ValueNormalizer,
    labels: &Labels,
) -> String {
    match tables {
        [] => labels.fallback_title.clone(),
        [table] => {
            let fields: Vec<String> = sample_fields(table, normalizer)
                .into_iter()
                .flatten()
                .collect();
            if fields.is_empty() {
                labels.fallback_title.clone()
            } else {
                format!("{} {}", fields.join(" "), labels.title_suffix)
            }
        }
        _ => {
            let parts: Vec<String> = summarize_fields(tables, normalizer)
                .iter()
                .filter_map(|s| s.render(labels))
                .collect();
            if parts.is_empty() {
                format!("{} {}", labels.multi_file_marker, labels.title_suffix)
            } else {
                format!(
                    "{} {} {}",
                    labels.multi_file_marker,
                    parts.join(" "),
                    labels.title_suffix
                )
            }
        }
    }
}
