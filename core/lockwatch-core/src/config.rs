//! Runtime configuration.
//!
//! Loaded from `<config_dir>/lockwatch/config.toml` unless a path is given.
//! A missing file means defaults; a present but broken file is an error.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LockwatchError, Result};
use crate::lockfile::{LockfileLocator, DEFAULT_CANDIDATES};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const CONFIG_ENV: &str = "LOCKWATCH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LockwatchConfig {
    pub poll_interval_ms: u64,
    /// Checked after the built-in install locations.
    pub extra_candidates: Vec<PathBuf>,
}

impl Default for LockwatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            extra_candidates: Vec::new(),
        }
    }
}

impl LockwatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(LockwatchError::InvalidConfig(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Built-in candidates first, in their fixed order, then configured extras.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .chain(self.extra_candidates.iter().cloned())
            .collect()
    }

    pub fn locator(&self) -> LockfileLocator {
        LockfileLocator::new(self.candidate_paths())
    }
}

/// Returns the default config file path (`<config_dir>/lockwatch/config.toml`).
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("lockwatch").join("config.toml"))
        .ok_or(LockwatchError::ConfigDirNotFound)
}

/// Resolves the config path: explicit argument, then `LOCKWATCH_CONFIG`, then default.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

/// Loads and validates configuration, returning defaults if the file doesn't exist.
pub fn load_config(path: Option<PathBuf>) -> Result<LockwatchConfig> {
    let config_path = resolve_config_path(path)?;

    if !config_path.exists() {
        return Ok(LockwatchConfig::default());
    }

    let content =
        fs_err::read_to_string(&config_path).map_err(|source| LockwatchError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;
    let config = toml::from_str::<LockwatchConfig>(&content).map_err(|err| {
        LockwatchError::ConfigMalformed {
            path: config_path.clone(),
            details: err.to_string(),
        }
    })?;
    config.validate()?;
    Ok(config)
}
