//! Case normalization.
//!
//! Converts one case's aggregated radial profile into a non-dimensional
//! curve: the axial axis is rescaled by the case's own physical parameters
//! (diffusion length over convective length, a Péclet-style rescaling) and
//! the dependent axis is either taken as-is or scaled to the curve's own
//! peak. This is the primary per-case validity gate: a case that cannot be
//! normalized is skipped by the pipeline, never silently plotted.

mod parameters;

pub use parameters::PhysicalParameters;

use thiserror::Error;

use crate::{
    aggregate::AxialProfile, case::settings::MissingParameter, support::scalar::ScalarError,
};

/// An error that makes a case invalid for normalization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    MissingParameter(#[from] MissingParameter),

    /// A required parameter was declared but is unusable.
    #[error("parameter `{name}` is unusable: {source}")]
    InvalidParameter {
        name: &'static str,
        #[source]
        source: ScalarError,
    },

    /// The profile holds no axial stations.
    #[error("no axial stations to normalize")]
    EmptyProfile,

    /// The aggregated profile has no field at the requested index.
    #[error("no field at index {index} in the aggregated profile")]
    MissingField { index: usize },

    /// The dependent means peak at zero or a non-finite value, so the
    /// curve carries no signal.
    #[error("curve peak {max} is zero or not finite")]
    DegeneratePeak { max: f64 },
}

/// How the dependent axis is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Use the weighted mean as-is (sorbent-concentration studies).
    #[default]
    Raw,
    /// Divide by the maximum weighted mean across the curve, so the curve
    /// peaks at one (CO₂-concentration studies).
    PeakNormalized,
}

/// One point of a normalized curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Non-dimensional axial position.
    pub zeta: f64,
    /// Non-dimensional radial-averaged concentration.
    pub phi: f64,
}

/// A case's output curve, in ascending `zeta` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedCurve {
    pub points: Vec<CurvePoint>,
}

/// Non-dimensionalizes an aggregated profile.
///
/// `field` selects which of the profile's per-station means becomes the
/// dependent axis. The result is a pure function of the arguments; station
/// order (ascending axial) is preserved, and `zeta` is ascending because
/// the rescaling is monotonic for valid parameters.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the profile is empty, the field index is
/// out of range, or the curve's maximum is zero or not finite. The maximum
/// gates validity in both scaling modes: an all-zero or NaN-contaminated
/// dependent field invalidates the case even when plotted raw.
pub fn normalize(
    profile: &AxialProfile,
    field: usize,
    scaling: Scaling,
    parameters: &PhysicalParameters,
) -> Result<NormalizedCurve, NormalizeError> {
    if profile.stations.is_empty() {
        return Err(NormalizeError::EmptyProfile);
    }

    let mut raw = Vec::with_capacity(profile.stations.len());
    for station in &profile.stations {
        let value = station
            .means
            .get(field)
            .copied()
            .ok_or(NormalizeError::MissingField { index: field })?;
        raw.push((parameters.zeta(station.axial), value));
    }

    let mut max = f64::NEG_INFINITY;
    for &(_, phi) in &raw {
        if phi.is_nan() {
            max = f64::NAN;
            break;
        }
        max = max.max(phi);
    }
    if max == 0.0 || !max.is_finite() {
        return Err(NormalizeError::DegeneratePeak { max });
    }

    let scale = match scaling {
        Scaling::Raw => 1.0,
        Scaling::PeakNormalized => max,
    };

    let points = raw
        .into_iter()
        .map(|(zeta, phi)| CurvePoint {
            zeta,
            phi: phi / scale,
        })
        .collect();
    Ok(NormalizedCurve { points })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::aggregate::Station;

    fn reference_parameters() -> PhysicalParameters {
        PhysicalParameters::new(2e-10, 3.84e-5, 2.5e-4).unwrap()
    }

    fn profile(stations: &[(f64, f64)]) -> AxialProfile {
        AxialProfile {
            stations: stations
                .iter()
                .map(|&(axial, mean)| Station {
                    axial,
                    means: vec![mean],
                })
                .collect(),
        }
    }

    #[test]
    fn axial_axis_follows_the_peclet_rescaling() {
        // zeta = D * z / (Uavg * R^2); with the reference parameters the
        // denominator is 3.84e-5 * (2.5e-4)^2 = 2.4e-12.
        let curve = normalize(
            &profile(&[(0.005, 1.0), (0.5, 2.0)]),
            0,
            Scaling::Raw,
            &reference_parameters(),
        )
        .unwrap();

        assert_relative_eq!(curve.points[0].zeta, 5.0 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(curve.points[1].zeta, 125.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(curve.points[0].phi, 1.0);
        assert_relative_eq!(curve.points[1].phi, 2.0);
    }

    #[test]
    fn peak_scaling_divides_by_the_curve_maximum() {
        let curve = normalize(
            &profile(&[(0.1, 0.5), (0.2, 2.0), (0.3, 1.0)]),
            0,
            Scaling::PeakNormalized,
            &reference_parameters(),
        )
        .unwrap();

        assert_relative_eq!(curve.points[0].phi, 0.25);
        assert_relative_eq!(curve.points[1].phi, 1.0);
        assert_relative_eq!(curve.points[2].phi, 0.5);
    }

    #[test]
    fn zero_peak_invalidates_the_case() {
        let result = normalize(
            &profile(&[(0.1, 0.0), (0.2, 0.0)]),
            0,
            Scaling::PeakNormalized,
            &reference_parameters(),
        );
        assert_eq!(result, Err(NormalizeError::DegeneratePeak { max: 0.0 }));
    }

    #[test]
    fn nan_peak_invalidates_the_case() {
        let result = normalize(
            &profile(&[(0.1, 1.0), (0.2, f64::NAN)]),
            0,
            Scaling::PeakNormalized,
            &reference_parameters(),
        );
        assert!(matches!(
            result,
            Err(NormalizeError::DegeneratePeak { max }) if max.is_nan()
        ));
    }

    #[test]
    fn raw_mode_rejects_an_all_zero_dependent_field() {
        let result = normalize(
            &profile(&[(0.1, 0.0), (0.2, 0.0)]),
            0,
            Scaling::Raw,
            &reference_parameters(),
        );
        assert_eq!(result, Err(NormalizeError::DegeneratePeak { max: 0.0 }));
    }

    #[test]
    fn raw_mode_rejects_nan_dependent_means() {
        let result = normalize(
            &profile(&[(0.1, 1.0), (0.2, f64::NAN)]),
            0,
            Scaling::Raw,
            &reference_parameters(),
        );
        assert!(matches!(
            result,
            Err(NormalizeError::DegeneratePeak { max }) if max.is_nan()
        ));
    }

    #[test]
    fn empty_profile_is_invalid() {
        let result = normalize(
            &profile(&[]),
            0,
            Scaling::Raw,
            &reference_parameters(),
        );
        assert_eq!(result, Err(NormalizeError::EmptyProfile));
    }

    #[test]
    fn field_index_out_of_range_is_invalid() {
        let result = normalize(
            &profile(&[(0.1, 1.0)]),
            3,
            Scaling::Raw,
            &reference_parameters(),
        );
        assert_eq!(result, Err(NormalizeError::MissingField { index: 3 }));
    }

    #[test]
    fn normalization_is_a_pure_function_of_its_inputs() {
        let input = profile(&[(0.1, 0.5), (0.2, 2.0)]);
        let parameters = reference_parameters();
        let first = normalize(&input, 0, Scaling::PeakNormalized, &parameters).unwrap();
        let second = normalize(&input, 0, Scaling::PeakNormalized, &parameters).unwrap();
        assert_eq!(first, second);
    }
}
