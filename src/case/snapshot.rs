//! Snapshot (time-step) directory selection.
//!
//! A case directory accumulates one subdirectory per written time step,
//! named with the simulation time (`0`, `150`, `2.5`, ...), alongside
//! non-numeric directories (`constant`, `system`) that are not snapshots.
//! Selection interprets directory names as numbers and picks by rank.

use std::{fs, io, path::Path};

/// Outcome of interpreting a directory name as a simulation time.
///
/// Interpretation is an ordered attempt: integer first, then float, then
/// give up. Non-numeric names are ignored by selection, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NameValue {
    Integer(i64),
    Float(f64),
    NotNumeric,
}

impl NameValue {
    /// Interprets a directory name.
    pub fn parse(name: &str) -> Self {
        if let Ok(value) = name.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Ok(value) = name.parse::<f64>() {
            return Self::Float(value);
        }
        Self::NotNumeric
    }

    /// Numeric value of the name, if it has one.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(value as f64),
            Self::Float(value) => Some(value),
            Self::NotNumeric => None,
        }
    }
}

/// Which snapshot to pick from the descending time ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotPolicy {
    /// The most advanced time step.
    Highest,
    /// The penultimate time step. Preferred for runs that may still be
    /// writing: the latest directory can be incomplete on disk.
    #[default]
    SecondHighest,
}

impl SnapshotPolicy {
    fn rank(self) -> usize {
        match self {
            Self::Highest => 0,
            Self::SecondHighest => 1,
        }
    }
}

/// Picks the snapshot directory to analyse within a case.
///
/// Returns `Ok(None)` when fewer than two numeric directories exist,
/// regardless of the requested policy; callers treat that as "skip this
/// case". Ties in numeric value are broken by name so selection is
/// deterministic across directory enumeration orders.
///
/// # Errors
///
/// Returns an error if the case directory cannot be enumerated.
pub fn select(case_dir: &Path, policy: SnapshotPolicy) -> io::Result<Option<String>> {
    let mut numeric = Vec::new();
    for entry in fs::read_dir(case_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(value) = NameValue::parse(name).as_f64() {
            numeric.push((value, name.to_owned()));
        }
    }
    if numeric.len() < 2 {
        return Ok(None);
    }
    numeric.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    let (_, name) = numeric.swap_remove(policy.rank());
    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn case_with_dirs(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn ordered_attempt_name_interpretation() {
        assert_eq!(NameValue::parse("10"), NameValue::Integer(10));
        assert_eq!(NameValue::parse("2.5"), NameValue::Float(2.5));
        assert_eq!(NameValue::parse("1e3"), NameValue::Float(1000.0));
        assert_eq!(NameValue::parse("constant"), NameValue::NotNumeric);
        assert_eq!(NameValue::parse("constant").as_f64(), None);
    }

    #[test]
    fn picks_by_rank_and_ignores_non_numeric() {
        let case = case_with_dirs(&["0", "10", "2.5", "foo"]);
        let highest = select(case.path(), SnapshotPolicy::Highest).unwrap();
        assert_eq!(highest.as_deref(), Some("10"));
        let second = select(case.path(), SnapshotPolicy::SecondHighest).unwrap();
        assert_eq!(second.as_deref(), Some("2.5"));
    }

    #[test]
    fn fewer_than_two_numeric_dirs_is_absent_for_both_policies() {
        let case = case_with_dirs(&["10", "constant", "system"]);
        assert_eq!(select(case.path(), SnapshotPolicy::Highest).unwrap(), None);
        assert_eq!(select(case.path(), SnapshotPolicy::SecondHighest).unwrap(), None);
    }

    #[test]
    fn plain_files_are_not_snapshots() {
        let case = case_with_dirs(&["0", "150"]);
        fs::write(case.path().join("999"), b"").unwrap();
        let highest = select(case.path(), SnapshotPolicy::Highest).unwrap();
        assert_eq!(highest.as_deref(), Some("150"));
    }

    #[test]
    fn equal_values_break_ties_by_name() {
        let case = case_with_dirs(&["2", "2.0", "0"]);
        let highest = select(case.path(), SnapshotPolicy::Highest).unwrap();
        assert_eq!(highest.as_deref(), Some("2"));
        let second = select(case.path(), SnapshotPolicy::SecondHighest).unwrap();
        assert_eq!(second.as_deref(), Some("2.0"));
    }
}
