//! Validation of raw scalar values read from settings files.
//!
//! Settings files carry physical parameters as bare decimal text, so every
//! value arrives as a float with no guarantees. The checks here are applied
//! at the boundary where a raw value becomes a typed physical quantity.

use num_traits::Float;
use thiserror::Error;

/// An error returned when a scalar fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("value is not a finite number")]
    NotFinite,
    #[error("value must be strictly positive")]
    NotPositive,
}

/// Checks that `value` is a finite number.
///
/// # Errors
///
/// Returns [`ScalarError::NotFinite`] for NaN and infinities.
pub fn finite<T: Float>(value: T) -> Result<T, ScalarError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScalarError::NotFinite)
    }
}

/// Checks that `value` is finite and strictly greater than zero.
///
/// Used for parameters that end up in a divisor, where zero would turn the
/// non-dimensionalization into a silent infinity.
///
/// # Errors
///
/// Returns [`ScalarError::NotFinite`] for NaN and infinities, and
/// [`ScalarError::NotPositive`] for zero and negative values.
pub fn strictly_positive<T: Float>(value: T) -> Result<T, ScalarError> {
    let value = finite(value)?;
    if value > T::zero() {
        Ok(value)
    } else {
        Err(ScalarError::NotPositive)
    }
}
