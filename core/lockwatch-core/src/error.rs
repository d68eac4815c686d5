//! Error types for lockwatch-core operations.
//!
//! Lockfile reads never surface these to callers: the reader collapses every
//! failure to "no record". They exist for configuration loading and for the
//! failure reports handed to [`crate::Diagnostics`].

use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// Lockfile Read Failures
// ═══════════════════════════════════════════════════════════════════════════════

/// Why a lockfile read produced no record.
///
/// Reported to diagnostics only. The poll consumer sees all of these as
/// "Waiting for Client".
#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    #[error("no lockfile found at any candidate path")]
    NotFound,

    #[error("failed to read lockfile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lockfile {path} does not contain five colon-separated fields")]
    InvalidFormat { path: PathBuf },
}

// ═══════════════════════════════════════════════════════════════════════════════
// Library Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// All errors that can surface from lockwatch-core.
#[derive(Debug, thiserror::Error)]
pub enum LockwatchError {
    // ─────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Configuration file unreadable: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results using LockwatchError.
pub type Result<T> = std::result::Result<T, LockwatchError>;
