//! Logging setup for the tallysheet binary.
//!
//! Logs go to stderr and to a daily-rotating file in the platform data
//! directory. The library itself only emits `tracing` events; installing a
//! subscriber is left to the binary (or to tests that want output).
//!
//! ```no_run
//! tallysheet::logging::init(false).expect("Failed to initialize logging");
//! tracing::info!("ready");
//! ```

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/tallysheet/logs`
/// - macOS: `~/Library/Application Support/tallysheet/logs`
/// - Linux: `~/.local/share/tallysheet/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = base_dir.join("tallysheet").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes console logging plus a rotating `tallysheet.log` file.
///
/// The filter defaults to `info` (`debug` when `verbose`) and can be
/// overridden with `RUST_LOG`. The console shows warnings only unless
/// `verbose` is set or `RUST_LOG` is. When no log directory is available only
/// the console layer is installed.
///
/// # Errors
///
/// Returns error if the filter cannot be built or a subscriber is already set.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to create env filter")?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let console_filter = EnvFilter::try_new(console_directive(verbose, rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (log_dir, file_layer) = match open_log_appender() {
        Ok((dir, appender)) => (
            Some(dir),
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            ),
        ),
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match log_dir {
        Some(dir) => tracing::debug!(
            "Logging initialized, writing to {}",
            current_log_path(&dir).display()
        ),
        None => tracing::debug!("Logging initialized without a log file"),
    }

    Ok(())
}

fn open_log_appender() -> Result<(PathBuf, RollingFileAppender)> {
    let log_dir = get_log_dir()?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("tallysheet")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create log file appender")?;
    Ok((log_dir, appender))
}

/// Directive for the stderr layer: `debug` when verbose, else `RUST_LOG` when
/// set, else warnings only.
fn console_directive(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        _ if verbose => "debug".to_owned(),
        Some(directive) if !directive.is_empty() => directive.to_owned(),
        _ => "warn".to_owned(),
    }
}

/// File the daily appender in `log_dir` is writing today.
///
/// The appender rotates on UTC dates.
pub fn current_log_path(log_dir: &Path) -> PathBuf {
    let today = chrono::Utc::now().format("%Y-%m-%d");
    log_dir.join(format!("tallysheet.{today}.log"))
}
