//! Diagnostic channel for swallowed lockfile failures.
//!
//! The reader never returns errors, so this is the only place a failed read
//! becomes visible. Production uses [`TracingDiagnostics`]; tests inject their
//! own implementation and inspect what was reported.

use std::sync::{Arc, Mutex};

use crate::error::ReadFailure;

pub trait Diagnostics: Send + Sync {
    fn report(&self, failure: &ReadFailure);
}

/// Routes failures to `tracing`. I/O failures are warnings; missing files and
/// bad content are expected while waiting for the client and log at debug.
#[derive(Debug, Clone, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &ReadFailure) {
        match failure {
            ReadFailure::Io { path, source } => {
                tracing::warn!(path = %path.display(), error = %source, "Error reading lockfile");
            }
            ReadFailure::InvalidFormat { path } => {
                tracing::debug!(path = %path.display(), "Lockfile content invalid");
            }
            ReadFailure::NotFound => {
                tracing::debug!("No lockfile found");
            }
        }
    }
}

/// Keeps every reported failure message in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    reports: Arc<Mutex<Vec<String>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, failure: &ReadFailure) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(failure.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct LevelCapture {
        levels: Arc<Mutex<Vec<Level>>>,
    }

    impl<S: Subscriber> Layer<S> for LevelCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.levels.lock().unwrap().push(*event.metadata().level());
        }
    }

    fn levels_for(failure: ReadFailure) -> Vec<Level> {
        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, || TracingDiagnostics.report(&failure));
        let levels = capture.levels.lock().unwrap().clone();
        levels
    }

    #[test]
    fn test_io_failure_logs_warning() {
        let failure = ReadFailure::Io {
            path: PathBuf::from("/tmp/lockfile"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(levels_for(failure), vec![Level::WARN]);
    }

    #[test]
    fn test_invalid_format_logs_debug() {
        let failure = ReadFailure::InvalidFormat {
            path: PathBuf::from("/tmp/lockfile"),
        };
        assert_eq!(levels_for(failure), vec![Level::DEBUG]);
    }

    #[test]
    fn test_not_found_logs_debug() {
        assert_eq!(levels_for(ReadFailure::NotFound), vec![Level::DEBUG]);
    }

    #[test]
    fn test_recording_diagnostics_keeps_messages_in_order() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.report(&ReadFailure::NotFound);
        diagnostics.report(&ReadFailure::InvalidFormat {
            path: PathBuf::from("/x"),
        });
        assert_eq!(
            diagnostics.reports(),
            vec![
                "no lockfile found at any candidate path".to_string(),
                "lockfile /x does not contain five colon-separated fields".to_string(),
            ]
        );
    }
}
