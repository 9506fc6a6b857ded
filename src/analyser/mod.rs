pub mod cleaning;
pub mod columns;
pub mod filter;
pub mod flows;
pub mod frequency;
pub mod io;
pub mod title;
pub mod types;

pub use cleaning::{MISSING_SENTINELS, PLACEHOLDER, ValueNormalizer};
pub use columns::{ColumnAddress, ResolvedColumn, letter_position, resolve_column};
pub use filter::{FilterOutcome, filter_rows, row_matches};
pub use flows::{
    BatchReport, FileCounts, SkipKind, SkippedFile, run_batch, run_batch_files, usable_tables,
};
pub use frequency::{FrequencyCounter, aggregate, count_values, merge_counts};
pub use io::{LoadedFile, file_label, load_table, load_tables};
pub use title::{FieldSummary, synthesize_title};
pub use types::{FrequencyEntry, FrequencyTable, Table};
