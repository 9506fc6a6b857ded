use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tallysheet::analyser::{ColumnAddress, ValueNormalizer, load_tables, run_batch_files};
use tallysheet::analyser::{BatchReport, synthesize_title, usable_tables};
use tallysheet::config::{Labels, PipelineConfig, default_config_path};
use tallysheet::export::{export_csv, export_per_file_csv_bytes};
use tallysheet::utils::render_entries;

#[derive(Parser)]
#[command(
    name = "tallysheet",
    version,
    about = "Count how often each value appears in one column across spreadsheet exports"
)]
pub struct Cli {
    /// Show debug logging on the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON configuration file. Defaults to the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the files and count values in the aggregation column
    Count {
        /// Input files (CSV, TSV, XLSX, XLS, ODS)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Column letter (A = first column) or exact column name
        #[arg(short, long)]
        column: Option<ColumnAddress>,

        /// Exact column name, even when it is a single letter
        #[arg(long, conflicts_with = "column")]
        column_name: Option<String>,

        /// Drop rows where any cell contains this text
        #[arg(short, long)]
        exclude: Option<String>,

        /// Show only the top N categories (0 = all)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// List categories in order of first appearance instead of by count
        #[arg(long)]
        unsorted: bool,

        /// Write the merged table as CSV, to the configured export file name
        /// when no path is given
        #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
        output: Option<OsString>,

        /// Also show the table of each file
        #[arg(long)]
        per_file: bool,

        /// Write per-file tables as one CSV to this path
        #[arg(long)]
        per_file_output: Option<PathBuf>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the title synthesized from the files
    Title {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Write a configuration file with default values
    InitConfig {
        /// Target path. Defaults to the user config directory.
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run_command(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Commands::Count {
            files,
            column,
            column_name,
            exclude,
            top,
            unsorted,
            output,
            per_file,
            per_file_output,
            json,
        } => {
            let mut config = PipelineConfig::load_or_default(config_path.as_deref())?;
            if let Some(column) = column {
                config.column = column;
            }
            if let Some(name) = column_name {
                config.column = ColumnAddress::Name(name);
            }
            if let Some(exclude) = exclude {
                config.exclusion = exclude;
            }
            if let Some(top) = top {
                config.top_n = top;
            }
            if unsorted {
                config.sort_descending = false;
            }

            let report = run_batch_files(&files, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &config, per_file);
            }

            if let Some(path) = output {
                let path = export_target(path, &config.labels);
                export_csv(&report.merged, &config.labels, &path)?;
                if !json {
                    println!("Saved merged table to {}", path.display());
                }
            }
            if let Some(path) = per_file_output {
                let bytes = export_per_file_csv_bytes(&report.per_file, &config.labels)?;
                std::fs::write(&path, bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                if !json {
                    println!("Saved per-file tables to {}", path.display());
                }
            }
            Ok(())
        }
        Commands::Title { files } => {
            let config = PipelineConfig::load_or_default(config_path.as_deref())?;
            let (usable, _) = usable_tables(load_tables(&files));
            let tables: Vec<_> = usable.into_iter().map(|(_, table)| table).collect();
            let normalizer = ValueNormalizer::from_config(&config);
            println!("{}", synthesize_title(&tables, &normalizer, &config.labels));
            Ok(())
        }
        Commands::InitConfig { path, force } => {
            let path = path
                .or_else(default_config_path)
                .context("No config directory available; pass a path")?;
            init_config(&path, force)
        }
    }
}

fn print_report(report: &BatchReport, config: &PipelineConfig, per_file: bool) {
    println!("{}", report.title);
    println!();

    let view = report.merged.view(config.top_n, config.sort_descending);
    print!("{}", render_entries(&view, &config.labels));
    if view.len() < report.merged.len() {
        println!("({} of {} categories shown)", view.len(), report.merged.len());
    }

    if report.column.fallback_used {
        println!();
        println!(
            "Note: {} is outside the first file's columns; counted '{}' instead.",
            config.column, report.column.name
        );
    }

    if !report.skipped.is_empty() {
        println!();
        println!("Skipped files:");
        for skipped in &report.skipped {
            println!("  {}: {}", skipped.file, skipped.reason);
        }
    }

    if per_file {
        for file in &report.per_file {
            println!();
            println!("File: {} ({} rows excluded)", file.file, file.rows_dropped);
            print!("{}", render_entries(&file.counts.view(0, true), &config.labels));
        }
    }

    println!();
    println!("{}", report.summary());
}

/// `--output` given without a value writes to the configured export file name.
fn export_target(output: OsString, labels: &Labels) -> PathBuf {
    if output.is_empty() {
        PathBuf::from(&labels.export_file_name)
    } else {
        PathBuf::from(output)
    }
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; use --force to overwrite",
            path.display()
        );
    }
    PipelineConfig::default().to_file(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
