//! The case directory abstraction.
//!
//! A case is read-only input: `<root>/case_<id>/settings` holds the physical
//! parameters the run was generated with, and each numerically named
//! subdirectory is a snapshot of the simulation at that time.

pub mod field;
pub mod settings;
pub mod snapshot;

use std::path::{Path, PathBuf};

/// Name of the per-case parameter file.
pub const SETTINGS_FILE: &str = "settings";

/// One simulation run's output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    id: usize,
    dir: PathBuf,
}

impl Case {
    /// Locates case `id` under `root`, using the `case_0000` naming scheme
    /// the case-provisioning tooling produces.
    pub fn new(root: &Path, id: usize) -> Self {
        Self {
            id,
            dir: root.join(format!("case_{id:04}")),
        }
    }

    /// Ordinal identifier of this case.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Directory name of this case, e.g. `case_0003`.
    pub fn name(&self) -> String {
        format!("case_{:04}", self.id)
    }

    /// Root directory of this case.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the case's settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Path to a snapshot directory within this case.
    pub fn snapshot_path(&self, snapshot: &str) -> PathBuf {
        self.dir.join(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_the_provisioning_scheme() {
        let case = Case::new(Path::new("/data/run"), 3);
        assert_eq!(case.name(), "case_0003");
        assert_eq!(case.dir(), Path::new("/data/run/case_0003"));
        assert_eq!(
            case.settings_path(),
            Path::new("/data/run/case_0003/settings")
        );
        assert_eq!(case.snapshot_path("2.5"), Path::new("/data/run/case_0003/2.5"));
    }

    #[test]
    fn wide_ids_are_not_truncated() {
        let case = Case::new(Path::new("."), 12345);
        assert_eq!(case.name(), "case_12345");
    }
}
