//! The per-case settings file.
//!
//! Settings files are plain text with one declaration per line:
//!
//! ```text
//! R 2.500000e-04;
//! Uavg 3.840000e-05;
//! D_CO2_l 2.000000e-10;
//! ```
//!
//! Declarations are order-insensitive and keys are expected to be unique;
//! if a key repeats, the first occurrence wins. A parameter name matches
//! only when it equals the line's entire first token, so a lookup of `R`
//! is never satisfied by an `R_outer` declaration.

use std::{collections::BTreeMap, fs, io, path::Path};

use thiserror::Error;

/// An error returned when a required parameter is absent from the settings.
///
/// Absence by itself is not fatal: [`Settings::get`] reports it as `None`
/// and exploratory lookups treat it as "parameter not set". Call sites that
/// cannot proceed without the value escalate through [`Settings::require`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required parameter `{0}` is missing from the settings file")]
pub struct MissingParameter(pub String);

/// Parsed physical parameters of one case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: BTreeMap<String, f64>,
}

impl Settings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Malformed lines never
    /// fail a load; they are simply not declarations.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parses settings text.
    ///
    /// A line declares a parameter when it has at least two whitespace
    /// separated tokens and the second, after stripping any trailing `;`,
    /// parses as a float. Everything else is ignored.
    pub fn parse(text: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in text.lines() {
            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                continue;
            };
            let Ok(value) = value.trim_end_matches(';').parse::<f64>() else {
                continue;
            };
            // First occurrence wins on duplicate keys.
            values.entry(key.to_owned()).or_insert(value);
        }
        Self { values }
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Looks up a parameter that the caller cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`MissingParameter`] when the name was not declared.
    pub fn require(&self, name: &str) -> Result<f64, MissingParameter> {
        self.get(name).ok_or_else(|| MissingParameter(name.to_owned()))
    }

    /// Reads a single named parameter straight from a file.
    ///
    /// One-shot variant of [`Settings::load`] followed by [`Settings::get`],
    /// for call sites that only care about one optional parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn lookup(path: impl AsRef<Path>, name: &str) -> io::Result<Option<f64>> {
        Ok(Self::load(path)?.get(name))
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_declarations_and_strips_terminator() {
        let settings = Settings::parse("R 2.5e-4;\nUavg 3.84e-05;\nn_R 400;\n");
        assert_relative_eq!(settings.get("R").unwrap(), 2.5e-4);
        assert_relative_eq!(settings.get("Uavg").unwrap(), 3.84e-5);
        assert_relative_eq!(settings.get("n_R").unwrap(), 400.0);
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn name_must_match_the_whole_first_token() {
        let settings = Settings::parse("Rfoo 5.0;\nR 2.5e-4;\n");
        assert_relative_eq!(settings.get("R").unwrap(), 2.5e-4);
        assert_relative_eq!(settings.get("Rfoo").unwrap(), 5.0);
    }

    #[test]
    fn first_occurrence_wins_on_duplicates() {
        let settings = Settings::parse("R 1.0;\nR 2.0;\n");
        assert_relative_eq!(settings.get("R").unwrap(), 1.0);
    }

    #[test]
    fn malformed_lines_are_not_declarations() {
        let settings = Settings::parse("\nlonely\nK_ext not-a-number;\n  R 2.5e-4;\n");
        assert_eq!(settings.len(), 1);
        assert!(settings.get("K_ext").is_none());
        assert_relative_eq!(settings.get("R").unwrap(), 2.5e-4);
    }

    #[test]
    fn absent_name_is_none_and_require_escalates() {
        let settings = Settings::parse("R 2.5e-4;\n");
        assert_eq!(settings.get("epsilon"), None);
        assert_eq!(
            settings.require("epsilon"),
            Err(MissingParameter("epsilon".to_owned()))
        );
    }

    #[test]
    fn lookup_reads_one_parameter_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "theta 2.400000e-01;").unwrap();
        writeln!(file, "zeta 2.500000e+02;").unwrap();

        assert_relative_eq!(Settings::lookup(&path, "zeta").unwrap().unwrap(), 250.0);
        assert_eq!(Settings::lookup(&path, "missing").unwrap(), None);
    }
}
