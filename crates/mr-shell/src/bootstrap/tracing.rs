//! Tracing configuration for MyResidence
//!
//! Structured logging goes to stdout and, when the logs directory is
//! writable, to `myresidence.log` through a non-blocking appender.
//!
//! ## Span naming
//!
//! - `command.*` spans are opened by the shell commands
//! - `usecase.*` spans are opened by the use cases in `mr-app`

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "myresidence.log";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// A non-empty `level` from the config replaces the base level.
/// Workspace crates follow the base level; toasts are always shown.
fn build_filter_directives(is_dev: bool, level: &str) -> Vec<String> {
    let base = if !level.trim().is_empty() {
        level.trim()
    } else if is_dev {
        "debug"
    } else {
        "info"
    };
    vec![
        base.to_string(),
        format!("mr_core={base}"),
        format!("mr_infra={base}"),
        format!("mr_app={base}"),
        "toast=info".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// - `RUST_LOG` overrides the computed directives
/// - File logging falls back to stdout-only if `logs_dir` is unusable
///
/// Call once, before wiring dependencies.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: &Path, level: &str) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
