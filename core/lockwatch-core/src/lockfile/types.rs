//! Parsed lockfile contents.

use std::fmt;
use std::path::PathBuf;

/// One parsed lockfile.
///
/// Built fresh on every read and never mutated afterwards. `pid` and `port`
/// are `None` when the lockfile held a non-numeric segment: the parser keeps
/// the record rather than rejecting it.
#[derive(Clone, PartialEq, Eq)]
pub struct LockfileRecord {
    pub process_name: String,
    pub pid: Option<u32>,
    pub port: Option<u16>,
    pub password: String,
    pub protocol: String,
    /// Path the record was read from. `None` for records parsed from raw text.
    pub source_path: Option<PathBuf>,
}

impl LockfileRecord {
    /// Local API base URL, e.g. `https://127.0.0.1:5678`.
    pub fn base_url(&self) -> Option<String> {
        self.port
            .map(|port| format!("{}://127.0.0.1:{}", self.protocol, port))
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }
}

// Password stays out of logs.
impl fmt::Debug for LockfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockfileRecord")
            .field("process_name", &self.process_name)
            .field("pid", &self.pid)
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .field("protocol", &self.protocol)
            .field("source_path", &self.source_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LockfileRecord {
        LockfileRecord {
            process_name: "LeagueClient".to_string(),
            pid: Some(1234),
            port: Some(5678),
            password: "hunter2".to_string(),
            protocol: "https".to_string(),
            source_path: None,
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", record());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("LeagueClient"));
    }

    #[test]
    fn test_base_url_uses_protocol_and_port() {
        assert_eq!(
            record().base_url().as_deref(),
            Some("https://127.0.0.1:5678")
        );
    }

    #[test]
    fn test_base_url_absent_without_numeric_port() {
        let record = LockfileRecord {
            port: None,
            ..record()
        };
        assert!(record.base_url().is_none());
    }
}
