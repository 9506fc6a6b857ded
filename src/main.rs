//! # Tallysheet command-line entry point
//!
//! ```bash
//! tallysheet count 3-1.xlsx 3-2.xlsx --exclude resend --top 10 --output merged.csv
//! tallysheet title 3-1.xlsx
//! tallysheet init-config
//! ```
//!
//! Logging goes to stderr and to a rotating log file; set `RUST_LOG` to
//! change the level.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    tallysheet::logging::init(cli.verbose)?;
    cli::run_command(cli)
}
