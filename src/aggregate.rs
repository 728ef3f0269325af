//! Volume-weighted radial averaging.
//!
//! Cells sharing an axial coordinate form one radial station; the fields of
//! interest are averaged over each station, weighted by cell volume. The
//! grouping key is the axial value exactly as parsed (equality with no
//! tolerance), so cells land in the same station only when the mesh wrote
//! identical coordinate text. This mirrors how the coordinate field is
//! produced and must not be replaced by a rounded key; see the project
//! design notes for the hardening trade-off.

use thiserror::Error;

/// An error that invalidates the whole aggregation for a case.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AggregateError {
    /// Two fields of one snapshot disagree on cell count, breaking the
    /// one-to-one correspondence by cell index.
    #[error("field length mismatch: expected {expected} cells, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A station's weights sum to zero, so its mean is undefined.
    #[error("degenerate station at axial value {axial}: weights sum to zero")]
    DegenerateGroup { axial: f64 },
}

/// Volume-weighted means at one axial station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// The shared axial coordinate of the station's cells.
    pub axial: f64,
    /// One weighted mean per input field, in input-field order.
    pub means: Vec<f64>,
}

/// Aggregation output: stations in ascending axial order.
///
/// The ordering is load-bearing; the downstream curve inherits it and the
/// rendering collaborator relies on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxialProfile {
    pub stations: Vec<Station>,
}

/// Groups co-indexed per-cell samples by axial coordinate and computes the
/// volume-weighted mean of every field per group.
///
/// All slices must have the same length; cells correspond by index.
///
/// # Errors
///
/// Returns [`AggregateError::LengthMismatch`] when any field or the weight
/// slice disagrees with the axial slice on cell count, and
/// [`AggregateError::DegenerateGroup`] when a group's weights sum to zero.
pub fn radial_average(
    axial: &[f64],
    fields: &[&[f64]],
    weight: &[f64],
) -> Result<AxialProfile, AggregateError> {
    let cells = axial.len();
    for field in fields {
        if field.len() != cells {
            return Err(AggregateError::LengthMismatch {
                expected: cells,
                found: field.len(),
            });
        }
    }
    if weight.len() != cells {
        return Err(AggregateError::LengthMismatch {
            expected: cells,
            found: weight.len(),
        });
    }

    let mut order: Vec<usize> = (0..cells).collect();
    order.sort_by(|&a, &b| axial[a].total_cmp(&axial[b]));

    let mut stations = Vec::new();
    let mut start = 0;
    while start < cells {
        let value = axial[order[start]];
        let mut end = start + 1;
        while end < cells && axial[order[end]] == value {
            end += 1;
        }
        let group = &order[start..end];

        let weight_sum: f64 = group.iter().map(|&i| weight[i]).sum();
        if weight_sum == 0.0 {
            return Err(AggregateError::DegenerateGroup { axial: value });
        }

        let means = fields
            .iter()
            .map(|field| {
                let weighted: f64 = group.iter().map(|&i| field[i] * weight[i]).sum();
                weighted / weight_sum
            })
            .collect();
        stations.push(Station { axial: value, means });
        start = end;
    }

    Ok(AxialProfile { stations })
}
