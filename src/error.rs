//! Centralized error handling for tallysheet.
//!
//! Errors fall into two groups:
//!
//! - **File-level** problems ([`TallyError::Load`], [`TallyError::ColumnMissing`]) are
//!   isolated to one input. The batch runner records them as skipped files and keeps going.
//! - **Batch-level** problems ([`TallyError::EmptyDataset`]) stop the batch: there is
//!   nothing left to count, so no frequency table, title or export is produced.
//!
//! ```
//! use tallysheet::error::TallyError;
//!
//! fn describe(err: &TallyError) -> &'static str {
//!     match err {
//!         TallyError::Load { .. } | TallyError::ColumnMissing { .. } => "skip file",
//!         TallyError::EmptyDataset => "abort batch",
//!         _ => "other",
//!     }
//! }
//! # assert_eq!(describe(&TallyError::EmptyDataset), "abort batch");
//! ```
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error converts
//! into [`TallyError`]:
//!
//! ```no_run
//! use tallysheet::error::ResultExt as _;
//!
//! fn read_raw(path: &str) -> tallysheet::error::Result<String> {
//!     std::fs::read_to_string(path).context("Failed to read input")
//! }
//! ```

use std::fmt;

/// Main error type for tallysheet operations.
#[derive(Debug)]
pub enum TallyError {
    /// A single input could not be parsed as tabular data.
    Load { file: String, reason: String },

    /// The batch aggregation column does not exist in this input.
    ColumnMissing { file: String, column: String },

    /// No input contributed any rows after skipping unusable files.
    EmptyDataset,

    /// I/O errors (reading inputs, writing exports)
    Io(std::io::Error),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl TallyError {
    pub fn load(file: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Load {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { file, reason } => write!(f, "Could not read '{file}': {reason}"),
            Self::ColumnMissing { file, column } => {
                write!(f, "Column '{column}' is missing from '{file}'")
            }
            Self::EmptyDataset => write!(
                f,
                "No usable data: every file was skipped or empty. Check the column choice and the input files"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for TallyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Other(format!("CSV error: {err}"))
    }
}

/// Result type alias for tallysheet operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TallyError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: TallyError = e.into();
            TallyError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: TallyError = e.into();
            TallyError::Other(format!("{}: {}", f(), err))
        })
    }
}
