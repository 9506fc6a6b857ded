//! # Tallysheet - merged frequency counts over spreadsheet exports
//!
//! Tallysheet reads one or more tabular exports with the same layout, picks
//! one column, and counts how often each value appears in it, per file and
//! merged across all files. Blank and missing cells are counted under a single
//! placeholder, rows containing an exclusion keyword are dropped, and a chart
//! title is synthesized from a few cells of each file's first row.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tallysheet::analyser::run_batch_files;
//! use tallysheet::config::PipelineConfig;
//! use std::path::PathBuf;
//!
//! let config = PipelineConfig {
//!     exclusion: "resend".to_owned(),
//!     ..Default::default()
//! };
//! let files = [PathBuf::from("3-1.xlsx"), PathBuf::from("3-2.xlsx")];
//! let report = run_batch_files(&files, &config)?;
//!
//! println!("{}", report.title);
//! for entry in report.merged.view(config.top_n, config.sort_descending) {
//!     println!("{}: {}", entry.category, entry.count);
//! }
//! # Ok::<(), tallysheet::error::TallyError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! load_tables ──> resolve_column (once, from the first usable file)
//!      │                 │
//!      │                 v
//!      │          filter_rows ──> ValueNormalizer ──> count_values (per file)
//!      │                                         └──> aggregate   (merged)
//!      └──> synthesize_title
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser`]: loading, column resolution, filtering, normalization, counting, titles
//! - [`config`]: batch configuration stored as JSON
//! - [`export`]: CSV export with a byte-order mark
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing subscriber setup for the binary

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod utils;
