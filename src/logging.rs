//! Logging setup for the command line binary

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter directive when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` wins over the level passed in
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs a global subscriber writing to `log_path`
///
/// Falls back to stderr when the log directory cannot be created. The
/// returned guard must be held until exit so buffered lines are flushed.
pub fn init(log_path: &Path, level: &str) -> Option<WorkerGuard> {
    let file_writer = log_path
        .parent()
        .zip(log_path.file_name())
        .filter(|(dir, _)| std::fs::create_dir_all(dir).is_ok())
        .map(|(dir, file)| tracing_appender::rolling::never(dir, file));

    match file_writer {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Some(guard)
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
    }
}
