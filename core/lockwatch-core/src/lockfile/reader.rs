//! Locate + read + parse, with every failure collapsed to `None`.
//!
//! The reader is polled indefinitely while the client is not running, so
//! "not found", "found but corrupt" and "read failed mid-way" are all the same
//! retryable outcome. The only trace of the difference goes to [`Diagnostics`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs_err as fs;

use super::locator::LockfileLocator;
use super::parser::parse_lockfile;
use super::types::LockfileRecord;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ReadFailure;

#[derive(Clone)]
pub struct LockfileReader {
    locator: LockfileLocator,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for LockfileReader {
    fn default() -> Self {
        Self::new(LockfileLocator::default())
    }
}

impl std::fmt::Debug for LockfileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockfileReader")
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}

impl LockfileReader {
    pub fn new(locator: LockfileLocator) -> Self {
        Self {
            locator,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn locator(&self) -> &LockfileLocator {
        &self.locator
    }

    /// Reads the lockfile at `path`, or the first located candidate when `path`
    /// is `None`.
    ///
    /// An explicit path is read directly without an existence check.
    pub fn read(&self, path: Option<&Path>) -> Option<LockfileRecord> {
        match self.try_read(path) {
            Ok(record) => Some(record),
            Err(failure) => {
                self.diagnostics.report(&failure);
                None
            }
        }
    }

    fn try_read(&self, path: Option<&Path>) -> Result<LockfileRecord, ReadFailure> {
        let path: PathBuf = match path {
            Some(path) => path.to_path_buf(),
            None => self.locator.locate().ok_or(ReadFailure::NotFound)?,
        };

        let content = fs::read_to_string(&path).map_err(|source| ReadFailure::Io {
            path: path.clone(),
            source,
        })?;

        match parse_lockfile(content.as_str()) {
            Some(record) => Ok(record.with_source_path(path)),
            None => Err(ReadFailure::InvalidFormat { path }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use tempfile::tempdir;

    const VALID: &str = "LeagueClient:1234:5678:password:https";

    fn recording_reader(candidates: Vec<PathBuf>) -> (LockfileReader, RecordingDiagnostics) {
        let diagnostics = RecordingDiagnostics::new();
        let reader = LockfileReader::new(LockfileLocator::new(candidates))
            .with_diagnostics(Arc::new(diagnostics.clone()));
        (reader, diagnostics)
    }

    #[test]
    fn test_read_explicit_path_attaches_source_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lockfile");
        std::fs::write(&path, VALID).unwrap();

        let (reader, diagnostics) = recording_reader(vec![]);
        let record = reader.read(Some(&path)).unwrap();

        let expected = parse_lockfile(VALID).unwrap().with_source_path(&path);
        assert_eq!(record, expected);
        assert_eq!(record.source_path.as_deref(), Some(path.as_path()));
        assert!(diagnostics.reports().is_empty());
    }

    #[test]
    fn test_read_missing_explicit_path_reports_io_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("non_existent_file");

        let (reader, diagnostics) = recording_reader(vec![]);
        assert!(reader.read(Some(&path)).is_none());

        let reports = diagnostics.reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("failed to read lockfile"));
    }

    #[test]
    fn test_read_without_candidates_reports_not_found() {
        let temp = tempdir().unwrap();
        let (reader, diagnostics) = recording_reader(vec![temp.path().join("missing")]);

        assert!(reader.read(None).is_none());
        assert_eq!(
            diagnostics.reports(),
            vec!["no lockfile found at any candidate path".to_string()]
        );
    }

    #[test]
    fn test_read_discovers_candidate() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lockfile");
        std::fs::write(&path, VALID).unwrap();

        let (reader, _) = recording_reader(vec![temp.path().join("missing"), path.clone()]);
        let record = reader.read(None).unwrap();
        assert_eq!(record.source_path, Some(path));
        assert_eq!(record.port, Some(5678));
    }

    #[test]
    fn test_read_corrupt_file_reports_invalid_format() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lockfile");
        std::fs::write(&path, "LeagueClient:1234").unwrap();

        let (reader, diagnostics) = recording_reader(vec![path.clone()]);
        assert!(reader.read(None).is_none());

        let reports = diagnostics.reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("five colon-separated fields"));
    }

    #[test]
    fn test_read_non_utf8_file_is_io_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lockfile");
        std::fs::write(&path, [0xff, 0xfe, 0x3a, 0x00]).unwrap();

        let (reader, diagnostics) = recording_reader(vec![]);
        assert!(reader.read(Some(&path)).is_none());
        assert!(diagnostics.reports()[0].starts_with("failed to read lockfile"));
    }

    #[test]
    fn test_read_directory_is_io_failure() {
        let temp = tempdir().unwrap();
        let (reader, diagnostics) = recording_reader(vec![]);

        assert!(reader.read(Some(temp.path())).is_none());
        assert_eq!(diagnostics.reports().len(), 1);
    }
}
