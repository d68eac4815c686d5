//! Tracing setup for the lockwatch binary.
//!
//! Logs go to stderr; stdout is reserved for status notifications. With a log
//! directory, a daily rolling file gets the same events.

use std::env;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEBUG_ENV: &str = "LOCKWATCH_DEBUG_LOG";
const LOG_FILE_PREFIX: &str = "lockwatch.log";

/// Installs the global subscriber. Keep the returned guard alive for the
/// process lifetime or buffered file logs are lost.
pub fn init(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir.and_then(file_writer) {
        Some((writer, guard)) => (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}

fn filter() -> EnvFilter {
    if debug_enabled(env::var(DEBUG_ENV).ok().as_deref()) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn debug_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "TRUE" | "yes" | "YES"))
}

fn file_writer(
    log_dir: &Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if let Err(err) = fs_err::create_dir_all(log_dir) {
        eprintln!("lockwatch: cannot create log directory: {err}");
        return None;
    }
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_values() {
        assert!(debug_enabled(Some("1")));
        assert!(debug_enabled(Some("yes")));
        assert!(debug_enabled(Some("TRUE")));
        assert!(!debug_enabled(Some("0")));
        assert!(!debug_enabled(Some("")));
        assert!(!debug_enabled(None));
    }

    #[test]
    fn test_file_writer_creates_log_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("logs").join("nested");
        let writer = file_writer(&dir);
        assert!(writer.is_some());
        assert!(dir.is_dir());
    }
}
