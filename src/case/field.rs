//! Scalar field file parsing.
//!
//! A field file carries header and metadata lines, then the bulk-data
//! section:
//!
//! ```text
//! internalField   nonuniform List<scalar>
//! 3
//! (
//! 0.1
//! 0.2
//! 0.3
//! )
//! ```
//!
//! The line after the marker declares the element count, the next line is
//! the opening bracket of the list, and exactly that many one-value lines
//! follow. Parsing is a strict single pass: no backtracking, no recovery
//! from a malformed numeric line.

use std::{fs, io, path::Path};

use thiserror::Error;

/// Literal token sequence introducing a field's bulk-data section.
pub const SCALAR_LIST_MARKER: &str = "nonuniform List<scalar>";

/// An error returned for a malformed field file.
///
/// Any variant is fatal for the file, and so for the case reading it.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No line contains [`SCALAR_LIST_MARKER`].
    #[error("no `nonuniform List<scalar>` section in file")]
    MissingMarker,

    /// The file ends immediately after the marker line.
    #[error("field file ends before the element count line")]
    MissingCount,

    /// The line after the marker is not a decimal element count.
    #[error("element count line is not an integer: `{line}`")]
    BadCount { line: String },

    /// Fewer than the declared number of values follow the bulk-list open.
    #[error("field data ends early: expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },

    /// A bulk-data line does not parse as a float.
    #[error("value {index} does not parse as a float: `{line}`")]
    BadValue { index: usize, line: String },
}

/// Reads one scalar field file into per-cell values, in file order.
///
/// # Errors
///
/// Returns [`FieldError`] if the file cannot be read or its bulk-data
/// section is malformed.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<f64>, FieldError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses scalar field text into per-cell values, in order.
///
/// # Errors
///
/// Returns [`FieldError`] if the marker is absent, the count line is
/// missing or non-numeric, fewer than `count` value lines remain, or any
/// value line does not parse as a float.
pub fn parse(text: &str) -> Result<Vec<f64>, FieldError> {
    let mut lines = text.lines();
    lines
        .find(|line| line.contains(SCALAR_LIST_MARKER))
        .ok_or(FieldError::MissingMarker)?;

    let count_line = lines.next().ok_or(FieldError::MissingCount)?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| FieldError::BadCount {
            line: count_line.trim().to_owned(),
        })?;

    // The opening bracket of the bulk list; skipped, not validated.
    lines.next();

    let mut values = Vec::with_capacity(count);
    for (index, line) in lines.take(count).enumerate() {
        let value = line.trim().parse::<f64>().map_err(|_| FieldError::BadValue {
            index,
            line: line.trim().to_owned(),
        })?;
        values.push(value);
    }
    if values.len() < count {
        return Err(FieldError::Truncated {
            expected: count,
            found: values.len(),
        });
    }
    Ok(values)
}
