//! `tracing` subscriber setup.
//!
//! Print-style subcommands log to stderr. The dashboard owns the terminal, so
//! it only logs when given a file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `path` (appending), filtered by `RUST_LOG`.
pub fn init_file(path: &Path) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::new(2, format!("Invalid log file path: {}", path.display())))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(appender)
        .with_ansi(false)
        .try_init();
    Ok(())
}
