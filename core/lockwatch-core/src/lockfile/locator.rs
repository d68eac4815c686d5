//! Lockfile discovery across known install locations.

use std::path::{Path, PathBuf};

/// Default install locations, checked in this order.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    r"C:\Riot Games\League of Legends\lockfile",
    "/Applications/League of Legends.app/Contents/LoL/lockfile",
];

/// Finds the lockfile by checking an ordered list of candidate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileLocator {
    candidates: Vec<PathBuf>,
}

impl Default for LockfileLocator {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.iter().map(PathBuf::from))
    }
}

impl LockfileLocator {
    pub fn new(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that exists.
    ///
    /// A failed existence check (permission denied, etc.) counts as "not here".
    /// `None` is the normal state while the client isn't running.
    pub fn locate(&self) -> Option<PathBuf> {
        self.candidates
            .iter()
            .find(|path| exists(path))
            .cloned()
    }

    /// Every candidate with its current existence, in check order.
    pub fn probe(&self) -> Vec<(PathBuf, bool)> {
        self.candidates
            .iter()
            .map(|path| (path.clone(), exists(path)))
            .collect()
    }
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_candidates_match_install_paths() {
        let locator = LockfileLocator::default();
        assert_eq!(
            locator.candidates(),
            &[
                PathBuf::from(r"C:\Riot Games\League of Legends\lockfile"),
                PathBuf::from("/Applications/League of Legends.app/Contents/LoL/lockfile"),
            ]
        );
    }

    #[test]
    fn test_no_candidates_exist() {
        let temp = tempdir().unwrap();
        let locator = LockfileLocator::new([
            temp.path().join("missing-a"),
            temp.path().join("missing-b"),
        ]);
        assert!(locator.locate().is_none());
    }

    #[test]
    fn test_returns_first_existing_candidate_in_order() {
        let temp = tempdir().unwrap();
        let second = temp.path().join("second");
        let third = temp.path().join("third");
        std::fs::write(&second, "x").unwrap();
        std::fs::write(&third, "x").unwrap();

        let locator = LockfileLocator::new([temp.path().join("first"), second.clone(), third]);
        assert_eq!(locator.locate(), Some(second));
    }

    #[test]
    fn test_probe_reports_existence_per_candidate() {
        let temp = tempdir().unwrap();
        let present = temp.path().join("present");
        std::fs::write(&present, "x").unwrap();
        let missing = temp.path().join("missing");

        let locator = LockfileLocator::new([missing.clone(), present.clone()]);
        assert_eq!(locator.probe(), vec![(missing, false), (present, true)]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let locator = LockfileLocator::new(Vec::new());
        assert!(locator.locate().is_none());
    }
}
