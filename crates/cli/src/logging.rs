use agecalc_core::config::types::{LoggingConfig, ResolvedConfig};
use color_eyre::eyre::{Result, WrapErr};
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber: stderr always, plus a file layer when configured.
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must hold it until the command has finished.
pub fn init(cfg: &ResolvedConfig) -> Result<Option<WorkerGuard>> {
    let log = &cfg.logging;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(env_filter(level_or(&log.level, LevelFilter::INFO)));

    let (file_layer, guard) = match log.file {
        Some(ref path) => {
            // Appends, so earlier runs stay in the file
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(file_level(log)));

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    Ok(guard)
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

/// `file_level` when set, else the stderr `level`, else debug.
fn file_level(log: &LoggingConfig) -> LevelFilter {
    level_or(log.file_level.as_deref().unwrap_or(&log.level), LevelFilter::DEBUG)
}

fn level_or(s: &str, fallback: LevelFilter) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        "off" => LevelFilter::OFF,
        _ => fallback,
    }
}
