//! Tracing subscriber setup: stderr by default, or a daily rolling file.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";

/// Keeps the background log writer alive; drop it only at exit.
pub struct LogGuard(#[allow(dead_code)] Option<WorkerGuard>);

/// Install the global subscriber.
///
/// `filter` wins over `RUST_LOG`; with neither, [`DEFAULT_FILTER`] applies.
/// With `dir`, logs go to `dir/surverse.log.<date>`; if the directory cannot
/// be created, logging falls back to stderr.
pub fn init(filter: Option<&str>, dir: Option<&Path>) -> LogGuard {
    let filter = match filter {
        Some(s) if !s.trim().is_empty() => EnvFilter::new(s),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let dir = dir.filter(|d| fs::create_dir_all(d).is_ok());

    let Some(dir) = dir else {
        let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        return LogGuard(None);
    };

    let appender = tracing_appender::rolling::daily(dir, "surverse.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    tracing::info!(log_dir = %dir.display(), "file logging enabled");

    LogGuard(Some(guard))
}
